use thiserror::Error;

use crate::properties::PropertyName;
use crate::ucd::SourceFile;

/// ошибка разбора отдельного поля записи
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError
{
    /// поле не соответствует шаблону HEX или HEX..HEX
    #[error("некорректная запись кодпоинта или диапазона: {0:?}")]
    InvalidCodePointRange(String),
    /// кодпоинт больше U+10FFFF
    #[error("кодпоинт {0:04X} вне диапазона U+0000..U+10FFFF")]
    CodePointOutOfRange(u32),
    /// начало диапазона больше конца
    #[error("начало диапазона {from:04X} больше конца {to:04X}")]
    InvertedRange
    {
        from: u32,
        to: u32,
    },
    /// в записи нет обязательного поля
    #[error("нет поля #{index}, всего полей в записи: {count}")]
    MissingField
    {
        index: usize,
        count: usize,
    },
}

/// нарушение структуры файла
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormatError
{
    /// за <X, First> не последовало <X, Last>
    #[error("за началом диапазона <{0}, First> не следует его конец")]
    UnmatchedRangeStart(String),
    /// <X, Last> без предшествующего <X, First>
    #[error("конец диапазона <{0}, Last> без начала")]
    UnexpectedRangeLast(String),
    /// метки First и Last различаются
    #[error("метки диапазона не совпадают: <{first}, First> и <{last}, Last>")]
    RangeLabelMismatch
    {
        first: String,
        last: String,
    },
    /// конец диапазона меньше начала
    #[error("диапазон <{label}> перевёрнут: {from:04X}..{to:04X}")]
    InvertedRangePair
    {
        label: String,
        from: u32,
        to: u32,
    },
}

/// ошибки построения и использования базы свойств
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum UcdError
{
    /// некорректное поле в строке файла UCD
    #[error("{file}, строка {line}: {source} ({content:?})")]
    Parse
    {
        file: SourceFile,
        line: usize,
        content: String,
        #[source]
        source: ParseError,
    },
    /// нарушена структура файла UCD
    #[error("{file}, строка {line}: {source}")]
    Format
    {
        file: SourceFile,
        line: usize,
        #[source]
        source: FormatError,
    },
    /// в PropertyValueAliases.txt нет значения по умолчанию для свойства
    #[error("не найдено значение по умолчанию (@missing) для свойства {0}")]
    MissingDefault(PropertyName),
    /// цикл (или слишком глубокая рекурсия) в правилах вывода свойств
    #[error("цикл в правилах вывода свойства {0}")]
    DerivationCycle(PropertyName),
    /// кодпоинт запроса вне диапазона U+0000..U+10FFFF
    #[error("U+{0:04X} не является кодпоинтом Unicode")]
    InvalidCodePoint(u32),
}
