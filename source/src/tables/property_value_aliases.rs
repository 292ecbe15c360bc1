use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::WithContext;
use crate::error::UcdError;
use crate::parser::{records, Record};
use crate::properties::PropertyName;
use crate::range::CodePointRange;
use crate::symbol::Symbol;
use crate::ucd::SourceFile;

const FILE: SourceFile = SourceFile::PropertyValueAliases;

/// варианты написания значения свойства; предпочтительные - сокращённое и полное
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PropertyValueAlias
{
    /// сокращённое символьное значение: lu
    pub abbreviated: Symbol,
    /// полное символьное значение: uppercaseletter
    pub long: Symbol,
    /// прочие варианты
    pub others: Vec<Symbol>,
}

impl PropertyValueAlias
{
    /// подходит ли написание значения под один из вариантов (UAX44-LM3)
    pub fn matches(&self, value: &Symbol) -> bool
    {
        self.abbreviated == *value || self.long == *value || self.others.contains(value)
    }
}

/// значение свойства по умолчанию для кодпоинтов, не перечисленных в файлах (@missing)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DefaultValue
{
    pub value: Symbol,
    pub range: CodePointRange,
}

/// PropertyValueAliases.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyValueAliases
{
    /// свойство (в нормализованном сокращённом написании) -> варианты значений
    aliases: BTreeMap<Symbol, Vec<PropertyValueAlias>>,
    /// значения по умолчанию
    default_values: BTreeMap<PropertyName, DefaultValue>,
}

impl PropertyValueAliases
{
    /// разбор PropertyValueAliases.txt
    ///
    /// формат описан в разделе 5.8.2 UAX #44: свойство; сокращённое значение; полное значение; прочие...
    /// значения по умолчанию берутся из комментариев @missing (раздел 4.2.10):
    /// диапазон; свойство; значение
    pub fn parse<'a, L>(lines: L) -> Result<Self, UcdError>
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();

        for record in records(lines) {
            if !record.fields.is_empty() {
                table.add_alias(&record)?;
            }

            if !record.default_fields.is_empty() {
                table.add_default(&record)?;
            }
        }

        log::debug!(
            "{}: свойств - {}, значений по умолчанию - {}",
            FILE,
            table.aliases.len(),
            table.default_values.len(),
        );

        Ok(table)
    }

    fn add_alias(&mut self, record: &Record) -> Result<(), UcdError>
    {
        let property = record.require(0).context(FILE, record)?.normalized_symbol();
        let abbreviated = record.require(1).context(FILE, record)?.normalized_symbol();

        let long = match record.field(2) {
            Some(field) => field.normalized_symbol(),
            None => abbreviated.clone(),
        };

        let others = record
            .fields
            .iter()
            .skip(3)
            .map(|f| f.normalized_symbol())
            .collect();

        self.aliases.entry(property).or_default().push(PropertyValueAlias {
            abbreviated,
            long,
            others,
        });

        Ok(())
    }

    /// из значений по умолчанию нужно только значение General_Category
    fn add_default(&mut self, record: &Record) -> Result<(), UcdError>
    {
        let property = record.require_default(1).context(FILE, record)?;

        if PropertyName::try_from(property.symbol()) != Ok(PropertyName::GeneralCategory) {
            return Ok(());
        }

        let range = record
            .require_default(0)
            .and_then(|f| f.code_point_range())
            .context(FILE, record)?;
        let value = record.require_default(2).context(FILE, record)?.normalized_symbol();

        self.default_values
            .insert(PropertyName::GeneralCategory, DefaultValue { value, range });

        Ok(())
    }

    /// варианты значений свойства; свойство указывается в сокращённой форме (gc, sc, ...)
    pub fn values(&self, property: &Symbol) -> &[PropertyValueAlias]
    {
        self.aliases
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// найти значение свойства по любому из его написаний
    pub fn resolve(&self, property: &Symbol, value: &Symbol) -> Option<&PropertyValueAlias>
    {
        self.values(property).iter().find(|alias| alias.matches(value))
    }

    /// значение по умолчанию для свойства
    pub fn default_value(&self, property: PropertyName) -> Option<&DefaultValue>
    {
        self.default_values.get(&property)
    }

    pub fn properties(&self) -> impl Iterator<Item = &Symbol>
    {
        self.aliases.keys()
    }
}
