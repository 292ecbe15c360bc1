mod derivation;
mod general_category;
mod names;

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use crate::symbol::{normalize_symbol, Symbol};

pub use derivation::{Condition, DerivationEngine, DERIVATION_RULES};
pub use general_category::{lookup_gc_groups, GENERAL_CATEGORY_GROUPS};
pub use names::{algorithmic_name, NamePrefixRule, HANGUL_SYLLABLE_PLACEHOLDER, NAME_PREFIX_RULES};

/// свойство Unicode
/// см. раздел 5 UAX #44 и PropertyAliases.txt
///
/// порядок вариантов определяет порядок свойств в наборе результатов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PropertyName
{
    /// na - название символа
    Name,
    /// Name_Alias - альтернативные названия (NameAliases.txt)
    NameAlias,
    /// gc - основная категория
    GeneralCategory,
    /// Alpha - буквенный символ (вычисляемое)
    Alphabetic,
    /// Lower - строчный символ (вычисляемое)
    Lowercase,
    /// Upper - прописной символ (вычисляемое)
    Uppercase,
    /// IDS - может начинать идентификатор
    IdStart,
    /// IDC - может продолжать идентификатор
    IdContinue,
    /// XIDS - ID_Start, замкнутый относительно NFKC
    XidStart,
    /// XIDC - ID_Continue, замкнутый относительно NFKC
    XidContinue,
    /// WSpace - пробельный символ
    WhiteSpace,
    /// OAlpha - вклад в Alphabetic сверх категорий (PropList.txt)
    OtherAlphabetic,
    /// OLower - вклад в Lowercase сверх категории Ll (PropList.txt)
    OtherLowercase,
    /// OUpper - вклад в Uppercase сверх категории Lu (PropList.txt)
    OtherUppercase,
}

impl PropertyName
{
    pub const ALL: [PropertyName; 14] = [
        Self::Name,
        Self::NameAlias,
        Self::GeneralCategory,
        Self::Alphabetic,
        Self::Lowercase,
        Self::Uppercase,
        Self::IdStart,
        Self::IdContinue,
        Self::XidStart,
        Self::XidContinue,
        Self::WhiteSpace,
        Self::OtherAlphabetic,
        Self::OtherLowercase,
        Self::OtherUppercase,
    ];

    /// полное название свойства, как в файлах UCD
    pub fn long_name(&self) -> &'static str
    {
        match self {
            Self::Name => "Name",
            Self::NameAlias => "Name_Alias",
            Self::GeneralCategory => "General_Category",
            Self::Alphabetic => "Alphabetic",
            Self::Lowercase => "Lowercase",
            Self::Uppercase => "Uppercase",
            Self::IdStart => "ID_Start",
            Self::IdContinue => "ID_Continue",
            Self::XidStart => "XID_Start",
            Self::XidContinue => "XID_Continue",
            Self::WhiteSpace => "White_Space",
            Self::OtherAlphabetic => "Other_Alphabetic",
            Self::OtherLowercase => "Other_Lowercase",
            Self::OtherUppercase => "Other_Uppercase",
        }
    }

    /// сокращённое название свойства (PropertyAliases.txt)
    pub fn short_name(&self) -> &'static str
    {
        match self {
            Self::Name => "na",
            Self::NameAlias => "Name_Alias",
            Self::GeneralCategory => "gc",
            Self::Alphabetic => "Alpha",
            Self::Lowercase => "Lower",
            Self::Uppercase => "Upper",
            Self::IdStart => "IDS",
            Self::IdContinue => "IDC",
            Self::XidStart => "XIDS",
            Self::XidContinue => "XIDC",
            Self::WhiteSpace => "WSpace",
            Self::OtherAlphabetic => "OAlpha",
            Self::OtherLowercase => "OLower",
            Self::OtherUppercase => "OUpper",
        }
    }

    /// двоичное (Yes/No) свойство?
    pub fn is_binary(&self) -> bool
    {
        !matches!(self, Self::Name | Self::NameAlias | Self::GeneralCategory)
    }
}

impl fmt::Display for PropertyName
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.long_name())
    }
}

impl TryFrom<&str> for PropertyName
{
    type Error = PropertiesError;

    /// название свойства в любом написании: полное или сокращённое, с нестрогим сравнением
    fn try_from(name: &str) -> Result<Self, Self::Error>
    {
        let normalized = normalize_symbol(name);

        Self::ALL
            .into_iter()
            .find(|p| {
                normalize_symbol(p.long_name()) == normalized
                    || normalize_symbol(p.short_name()) == normalized
            })
            .ok_or_else(|| PropertiesError::UnknownProperty(name.to_owned()))
    }
}

/// значение свойства
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum PropertyValue
{
    /// строковое значение (Name)
    Name(String),
    /// список строк (Name_Alias)
    NameList(Vec<String>),
    /// символьное значение (General_Category)
    Symbol(Symbol),
    /// двоичное значение
    Binary(bool),
}

impl PropertyValue
{
    pub const YES: Self = Self::Binary(true);
    pub const NO: Self = Self::Binary(false);

    pub fn as_name(&self) -> Option<&str>
    {
        match self {
            Self::Name(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn as_name_list(&self) -> Option<&[String]>
    {
        match self {
            Self::NameList(names) => Some(names.as_slice()),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol>
    {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<bool>
    {
        match self {
            Self::Binary(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::NameList(names) => f.write_str(&names.join(", ")),
            Self::Symbol(symbol) => write!(f, "{}", symbol),
            Self::Binary(true) => f.write_str("Yes"),
            Self::Binary(false) => f.write_str("No"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError
{
    #[error("неизвестное свойство: {0}")]
    UnknownProperty(String),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn names_with_loose_matching()
    {
        assert_eq!(PropertyName::try_from("White_Space"), Ok(PropertyName::WhiteSpace));
        assert_eq!(PropertyName::try_from("whitespace"), Ok(PropertyName::WhiteSpace));
        assert_eq!(PropertyName::try_from("WSpace"), Ok(PropertyName::WhiteSpace));
        assert_eq!(PropertyName::try_from("XID_Start"), Ok(PropertyName::XidStart));
        assert_eq!(PropertyName::try_from("gc"), Ok(PropertyName::GeneralCategory));
        assert_eq!(
            PropertyName::try_from("Bidi_Class"),
            Err(PropertiesError::UnknownProperty("Bidi_Class".to_owned()))
        );
    }

    #[test]
    fn display()
    {
        assert_eq!(PropertyValue::YES.to_string(), "Yes");
        assert_eq!(PropertyValue::NO.to_string(), "No");
        assert_eq!(
            PropertyValue::NameList(vec!["NULL".to_owned(), "NUL".to_owned()]).to_string(),
            "NULL, NUL"
        );
        assert_eq!(PropertyValue::Symbol(Symbol::new("Lu")).to_string(), "lu");
        assert_eq!(PropertyName::IdStart.to_string(), "ID_Start");
    }
}
