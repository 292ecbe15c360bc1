use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::UcdError;
use crate::properties::{PropertyName, PropertyValue};
use crate::range::MAX_CODE_POINT;
use crate::symbol::Symbol;
use crate::ucd::Ucd;

/// свойства одного кодпоинта
///
/// создаётся заново на каждый запрос и после создания не изменяется
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PropertySet
{
    code: u32,
    properties: BTreeMap<PropertyName, PropertyValue>,
    general_category_groups: Vec<Symbol>,
}

impl PropertySet
{
    #[inline]
    pub fn code(&self) -> u32
    {
        self.code
    }

    /// символ, если кодпоинт - скалярное значение (не суррогат)
    pub fn as_char(&self) -> Option<char>
    {
        char::from_u32(self.code)
    }

    pub fn get(&self, name: PropertyName) -> Option<&PropertyValue>
    {
        self.properties.get(&name)
    }

    /// свойства в порядке PropertyName
    pub fn iter(&self) -> impl Iterator<Item = (PropertyName, &PropertyValue)>
    {
        self.properties.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize
    {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.properties.is_empty()
    }

    pub fn name(&self) -> &str
    {
        self.get(PropertyName::Name).and_then(PropertyValue::as_name).unwrap_or("")
    }

    pub fn name_aliases(&self) -> &[String]
    {
        self.get(PropertyName::NameAlias)
            .and_then(PropertyValue::as_name_list)
            .unwrap_or(&[])
    }

    pub fn general_category(&self) -> Option<&Symbol>
    {
        self.get(PropertyName::GeneralCategory).and_then(PropertyValue::as_symbol)
    }

    /// значение двоичного свойства; None - свойство не двоичное или не вычислялось
    pub fn binary(&self, name: PropertyName) -> Option<bool>
    {
        self.get(name).and_then(PropertyValue::as_binary)
    }

    /// группы основной категории, в лексикографическом порядке
    pub fn general_category_groups(&self) -> &[Symbol]
    {
        self.general_category_groups.as_slice()
    }
}

impl<'a> IntoIterator for &'a PropertySet
{
    type Item = (&'a PropertyName, &'a PropertyValue);
    type IntoIter = std::collections::btree_map::Iter<'a, PropertyName, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.properties.iter()
    }
}

impl Ucd
{
    /// свойства кодпоинта
    ///
    /// базовые свойства берутся из таблиц, производные (Alphabetic, Lowercase, Uppercase)
    /// вычисляются по правилам; ошибка возможна только для кодпоинта вне U+0000..U+10FFFF
    pub fn analyze(&self, code: u32) -> Result<PropertySet, UcdError>
    {
        if code > MAX_CODE_POINT {
            return Err(UcdError::InvalidCodePoint(code));
        }

        let general_category = self.lookup_general_category(code).clone();
        let derivation = self.derivation();

        let mut properties = BTreeMap::new();

        properties.insert(PropertyName::Name, PropertyValue::Name(self.lookup_name(code)));
        properties.insert(
            PropertyName::NameAlias,
            PropertyValue::NameList(self.lookup_name_alias(code).to_vec()),
        );
        properties.insert(
            PropertyName::GeneralCategory,
            PropertyValue::Symbol(general_category.clone()),
        );

        // списки вычисляемых свойств в базовый набор не попадают - их значение даёт правило
        for name in self.config().binary_properties() {
            if !derivation.has_rule(name) {
                properties.insert(name, PropertyValue::Binary(self.listed_in(name, code)));
            }
        }

        let derived = derivation.derive_all(&properties).map_err(|e| {
            log::warn!("U+{:04X}: ошибка вычисления производных свойств - {}", code, e);
            e
        })?;

        for (name, value) in derived {
            properties.insert(name, PropertyValue::Binary(value));
        }

        Ok(PropertySet {
            code,
            properties,
            general_category_groups: self.general_category_groups(&general_category),
        })
    }
}
