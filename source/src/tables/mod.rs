mod binary_properties;
mod name_aliases;
mod property_aliases;
mod property_value_aliases;
mod unicode_data;

pub use binary_properties::BinaryProperties;
pub use name_aliases::{NameAliases, NameAliasesEntry};
pub use property_aliases::{PropertyAlias, PropertyAliases};
pub use property_value_aliases::{DefaultValue, PropertyValueAlias, PropertyValueAliases};
pub use unicode_data::UnicodeData;

use crate::error::{FormatError, ParseError, UcdError};
use crate::parser::Record;
use crate::ucd::SourceFile;

/// привязка ошибки поля или структуры к файлу и строке
trait WithContext<T>
{
    fn context(self, file: SourceFile, record: &Record) -> Result<T, UcdError>;
}

impl<T> WithContext<T> for Result<T, ParseError>
{
    fn context(self, file: SourceFile, record: &Record) -> Result<T, UcdError>
    {
        self.map_err(|source| UcdError::Parse {
            file,
            line: record.line,
            content: record.content.to_owned(),
            source,
        })
    }
}

impl<T> WithContext<T> for Result<T, FormatError>
{
    fn context(self, file: SourceFile, record: &Record) -> Result<T, UcdError>
    {
        self.map_err(|source| format_error(file, record, source))
    }
}

fn format_error(file: SourceFile, record: &Record, source: FormatError) -> UcdError
{
    UcdError::Format {
        file,
        line: record.line,
        source,
    }
}
