use std::collections::BTreeMap;

use super::WithContext;
use crate::error::UcdError;
use crate::parser::records;
use crate::ucd::SourceFile;

const FILE: SourceFile = SourceFile::NameAliases;

/// альтернативные названия одного кодпоинта, в порядке следования в файле
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAliasesEntry
{
    pub code: u32,
    pub aliases: Vec<String>,
}

/// NameAliases.txt: исправления, сокращения и названия управляющих символов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAliases
{
    /// записи, отсортированные по кодпоинту
    entries: Vec<NameAliasesEntry>,
}

impl NameAliases
{
    /// разбор NameAliases.txt
    ///
    /// колонки: 0 - кодпоинт, 1 - альтернативное название, 2 - тип (correction, control, ...)
    pub fn parse<'a, L>(lines: L) -> Result<Self, UcdError>
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut aliases: BTreeMap<u32, Vec<String>> = BTreeMap::new();

        for record in records(lines) {
            if record.fields.is_empty() {
                continue;
            }

            let range = record
                .require(0)
                .and_then(|f| f.code_point_range())
                .context(FILE, &record)?;
            let alias = record.require(1).context(FILE, &record)?;

            match alias.name() {
                Some(name) => aliases.entry(range.from()).or_default().push(name.to_owned()),
                None => log::trace!("{}: строка {} пропущена - {:?}", FILE, record.line, alias),
            }
        }

        let entries: Vec<NameAliasesEntry> = aliases
            .into_iter()
            .map(|(code, aliases)| NameAliasesEntry { code, aliases })
            .collect();

        log::debug!("{}: кодпоинтов с альтернативными названиями - {}", FILE, entries.len());

        Ok(Self { entries })
    }

    /// альтернативные названия кодпоинта; кодпоинт сравнивается на точное совпадение
    pub fn lookup(&self, code: u32) -> &[String]
    {
        match self.entries.binary_search_by_key(&code, |entry| entry.code) {
            Ok(index) => self.entries[index].aliases.as_slice(),
            Err(_) => &[],
        }
    }

    pub fn entries(&self) -> &[NameAliasesEntry]
    {
        self.entries.as_slice()
    }
}
