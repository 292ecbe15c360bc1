use super::WithContext;
use crate::error::UcdError;
use crate::parser::records;
use crate::symbol::Symbol;
use crate::ucd::SourceFile;

const FILE: SourceFile = SourceFile::PropertyAliases;

/// варианты названия свойства
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAlias
{
    /// сокращённое название: gc
    pub abbreviated: String,
    /// полное название: General_Category
    pub long: String,
    /// прочие варианты
    pub others: Vec<String>,
}

impl PropertyAlias
{
    /// подходит ли название под один из вариантов (UAX44-LM3)
    pub fn matches(&self, name: &Symbol) -> bool
    {
        name.matches(&self.abbreviated)
            || name.matches(&self.long)
            || self.others.iter().any(|other| name.matches(other))
    }
}

/// PropertyAliases.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyAliases
{
    aliases: Vec<PropertyAlias>,
}

impl PropertyAliases
{
    /// разбор PropertyAliases.txt
    ///
    /// формат описан в разделе 5.8.1 UAX #44: сокращённое название; полное название; прочие...
    pub fn parse<'a, L>(lines: L) -> Result<Self, UcdError>
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut aliases = vec![];

        for record in records(lines) {
            if record.fields.is_empty() {
                continue;
            }

            let abbreviated = record.require(0).context(FILE, &record)?;
            let long = record.require(1).context(FILE, &record)?;

            aliases.push(PropertyAlias {
                abbreviated: abbreviated.as_str().to_owned(),
                long: long.as_str().to_owned(),
                others: record.fields[2 ..].iter().map(|f| f.as_str().to_owned()).collect(),
            });
        }

        log::debug!("{}: свойств - {}", FILE, aliases.len());

        Ok(Self { aliases })
    }

    /// найти свойство по любому из его названий
    pub fn resolve(&self, name: &str) -> Option<&PropertyAlias>
    {
        let name = Symbol::new(name);

        self.aliases.iter().find(|alias| alias.matches(&name))
    }

    pub fn aliases(&self) -> &[PropertyAlias]
    {
        self.aliases.as_slice()
    }
}
