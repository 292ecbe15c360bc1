use crate::properties::PropertyName;

/// версия UCD, под которую составлены статические таблицы (правила названий, группы категорий)
pub const UNICODE_VERSION: &str = "15.1.0";

/// какие двоичные свойства извлекать из файлов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config
{
    /// свойства из DerivedCoreProperties.txt
    pub derived_core_properties: Vec<PropertyName>,
    /// свойства из PropList.txt
    pub prop_list: Vec<PropertyName>,
}

impl Default for Config
{
    fn default() -> Self
    {
        use PropertyName::*;

        Self {
            derived_core_properties: vec![
                Alphabetic,
                Lowercase,
                Uppercase,
                IdStart,
                IdContinue,
                XidStart,
                XidContinue,
            ],
            prop_list: vec![WhiteSpace, OtherAlphabetic, OtherLowercase, OtherUppercase],
        }
    }
}

impl Config
{
    /// все двоичные свойства обоих файлов, без повторов, по порядку
    pub fn binary_properties(&self) -> Vec<PropertyName>
    {
        let mut names: Vec<PropertyName> = self
            .derived_core_properties
            .iter()
            .chain(self.prop_list.iter())
            .copied()
            .filter(PropertyName::is_binary)
            .collect();

        names.sort();
        names.dedup();

        names
    }
}
