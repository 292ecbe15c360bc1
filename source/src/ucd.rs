use core::fmt;

use crate::config::Config;
use crate::error::UcdError;
use crate::properties::{algorithmic_name, lookup_gc_groups, DerivationEngine, PropertyName};
use crate::symbol::Symbol;
use crate::tables::{
    BinaryProperties, NameAliases, PropertyAlias, PropertyAliases, PropertyValueAlias,
    PropertyValueAliases, UnicodeData,
};

/// файлы UCD, из которых строится база
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFile
{
    UnicodeData,
    NameAliases,
    DerivedCoreProperties,
    PropList,
    PropertyAliases,
    PropertyValueAliases,
}

impl SourceFile
{
    pub fn file_name(&self) -> &'static str
    {
        match self {
            Self::UnicodeData => "UnicodeData.txt",
            Self::NameAliases => "NameAliases.txt",
            Self::DerivedCoreProperties => "DerivedCoreProperties.txt",
            Self::PropList => "PropList.txt",
            Self::PropertyAliases => "PropertyAliases.txt",
            Self::PropertyValueAliases => "PropertyValueAliases.txt",
        }
    }
}

impl fmt::Display for SourceFile
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.file_name())
    }
}

/// содержимое файлов UCD; получение файлов (сеть, диск, кэш) - забота вызывающей стороны
/// незаданный файл считается пустым
#[derive(Debug, Clone, Copy, Default)]
pub struct Sources<'a>
{
    pub unicode_data: &'a str,
    pub name_aliases: &'a str,
    pub derived_core_properties: &'a str,
    pub prop_list: &'a str,
    pub property_aliases: &'a str,
    pub property_value_aliases: &'a str,
}

/// разобранные таблицы, из которых собирается база
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables
{
    pub unicode_data: UnicodeData,
    pub name_aliases: NameAliases,
    pub derived_core_properties: BinaryProperties,
    pub prop_list: BinaryProperties,
    pub property_aliases: PropertyAliases,
    pub property_value_aliases: PropertyValueAliases,
}

impl Tables
{
    /// разобрать все файлы; первая ошибка прерывает разбор
    pub fn parse(sources: &Sources, config: &Config) -> Result<Self, UcdError>
    {
        Ok(Self {
            unicode_data: UnicodeData::parse(sources.unicode_data.lines())?,
            name_aliases: NameAliases::parse(sources.name_aliases.lines())?,
            derived_core_properties: BinaryProperties::parse(
                SourceFile::DerivedCoreProperties,
                sources.derived_core_properties.lines(),
                &config.derived_core_properties,
            )?,
            prop_list: BinaryProperties::parse(
                SourceFile::PropList,
                sources.prop_list.lines(),
                &config.prop_list,
            )?,
            property_aliases: PropertyAliases::parse(sources.property_aliases.lines())?,
            property_value_aliases: PropertyValueAliases::parse(sources.property_value_aliases.lines())?,
        })
    }
}

/// база свойств символов Unicode
///
/// после построения не изменяется, поэтому её можно читать из нескольких потоков одновременно.
/// для замены данных нужно построить новую базу и подменить ссылку на неё (например, Arc)
#[derive(Debug, Clone)]
pub struct Ucd
{
    config: Config,
    tables: Tables,
    /// значение General_Category для кодпоинтов, отсутствующих в UnicodeData.txt
    general_category_default: Symbol,
    derivation: DerivationEngine<'static>,
}

impl Ucd
{
    /// собрать базу из готовых таблиц
    pub fn new(tables: Tables, config: Config) -> Result<Self, UcdError>
    {
        let general_category_default = tables
            .property_value_aliases
            .default_value(PropertyName::GeneralCategory)
            .map(|default| default.value.clone())
            .ok_or(UcdError::MissingDefault(PropertyName::GeneralCategory))?;

        let derivation = DerivationEngine::default();
        derivation.validate()?;

        log::info!(
            "база UCD собрана: названий - {}, категорий - {}, категория по умолчанию - {}",
            tables.unicode_data.names().len(),
            tables.unicode_data.categories().len(),
            general_category_default,
        );

        Ok(Self {
            config,
            tables,
            general_category_default,
            derivation,
        })
    }

    /// разобрать файлы UCD и собрать базу
    pub fn parse(sources: &Sources, config: Config) -> Result<Self, UcdError>
    {
        let tables = Tables::parse(sources, &config)?;

        Self::new(tables, config)
    }

    pub fn config(&self) -> &Config
    {
        &self.config
    }

    pub fn tables(&self) -> &Tables
    {
        &self.tables
    }

    pub(crate) fn derivation(&self) -> &DerivationEngine<'static>
    {
        &self.derivation
    }

    /// основная категория кодпоинта; если кодпоинта нет в UnicodeData.txt - значение по умолчанию
    pub fn lookup_general_category(&self, code: u32) -> &Symbol
    {
        self.tables
            .unicode_data
            .general_category(code)
            .unwrap_or(&self.general_category_default)
    }

    /// название кодпоинта: сначала правила префиксов (CJK, тангутский и т.д.), затем UnicodeData.txt;
    /// если названия нет - пустая строка
    pub fn lookup_name(&self, code: u32) -> String
    {
        if let Some(name) = algorithmic_name(code) {
            return name;
        }

        self.tables
            .unicode_data
            .name(code)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// альтернативные названия кодпоинта
    pub fn lookup_name_alias(&self, code: u32) -> &[String]
    {
        self.tables.name_aliases.lookup(code)
    }

    /// пробельный символ?
    pub fn is_white_space(&self, code: u32) -> bool
    {
        self.listed_in(PropertyName::WhiteSpace, code)
    }

    /// перечислен ли кодпоинт в диапазонах двоичного свойства (PropList.txt или DerivedCoreProperties.txt)
    ///
    /// для вычисляемых свойств (Alphabetic и т.д.) итоговое значение даёт analyze(), а не этот список
    pub fn listed_in(&self, name: PropertyName, code: u32) -> bool
    {
        self.tables.prop_list.contains(name, code)
            || self.tables.derived_core_properties.contains(name, code)
    }

    /// группы основной категории (L, LC, ...)
    ///
    /// категория сначала приводится к сокращённой форме по PropertyValueAliases.txt,
    /// так что и "unassigned", и "cn" попадают в группу "c"
    pub fn general_category_groups(&self, category: &Symbol) -> Vec<Symbol>
    {
        let gc = Symbol::new(PropertyName::GeneralCategory.short_name());

        let abbreviated = self
            .tables
            .property_value_aliases
            .resolve(&gc, category)
            .map(|alias| &alias.abbreviated)
            .unwrap_or(category);

        lookup_gc_groups(abbreviated)
    }

    /// найти свойство по любому из его названий (PropertyAliases.txt)
    pub fn property_alias(&self, name: &str) -> Option<&PropertyAlias>
    {
        self.tables.property_aliases.resolve(name)
    }

    /// найти значение свойства по любому из написаний свойства и значения
    pub fn value_alias(&self, property: &str, value: &str) -> Option<&PropertyValueAlias>
    {
        let value = Symbol::new(value);
        let aliases = &self.tables.property_value_aliases;

        // в PropertyValueAliases.txt свойство записано сокращённо
        let mut candidates = vec![Symbol::new(property)];

        if let Some(alias) = self.property_alias(property) {
            candidates.push(Symbol::new(&alias.abbreviated));
        }
        if let Ok(name) = PropertyName::try_from(property) {
            candidates.push(Symbol::new(name.short_name()));
        }

        candidates
            .iter()
            .find_map(|candidate| aliases.resolve(candidate, &value))
    }
}
