use std::collections::BTreeMap;

use super::WithContext;
use crate::error::UcdError;
use crate::parser::records;
use crate::properties::PropertyName;
use crate::range::RangeList;
use crate::ucd::SourceFile;

/// двоичные свойства: DerivedCoreProperties.txt, PropList.txt
///
/// в таблицу попадают только свойства из списка, переданного при разборе,
/// для каждого - диапазоны кодпоинтов со значением Yes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryProperties
{
    entries: BTreeMap<PropertyName, RangeList>,
}

impl BinaryProperties
{
    /// разбор файла двоичных свойств
    ///
    /// колонки: 0 - кодпоинт или диапазон, 1 - название свойства.
    /// записи с незнакомыми или ненужными свойствами пропускаются
    pub fn parse<'a, L>(file: SourceFile, lines: L, wanted: &[PropertyName]) -> Result<Self, UcdError>
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut entries: BTreeMap<PropertyName, RangeList> = BTreeMap::new();

        // перечисленные свойства присутствуют в таблице, даже если в файле их нет
        for name in wanted {
            entries.entry(*name).or_default();
        }

        for record in records(lines) {
            if record.fields.is_empty() {
                continue;
            }

            let range = record
                .require(0)
                .and_then(|f| f.code_point_range())
                .context(file, &record)?;
            let property = record.require(1).context(file, &record)?;

            let name = match PropertyName::try_from(property.symbol()) {
                Ok(name) if wanted.contains(&name) => name,
                _ => {
                    log::trace!("{}: строка {} пропущена - {}", file, record.line, property.symbol());
                    continue;
                }
            };

            entries.entry(name).or_default().push(range);
        }

        for (name, ranges) in entries.iter() {
            log::debug!("{}: {} - диапазонов {}", file, name, ranges.len());
        }

        Ok(Self { entries })
    }

    /// имеет ли кодпоинт свойство; свойство, которого нет в таблице, - No
    pub fn contains(&self, name: PropertyName, code: u32) -> bool
    {
        self.entries
            .get(&name)
            .map(|ranges| ranges.contains(code))
            .unwrap_or(false)
    }

    /// диапазоны свойства
    pub fn ranges(&self, name: PropertyName) -> Option<&RangeList>
    {
        self.entries.get(&name)
    }

    /// свойства, собранные в таблицу
    pub fn properties(&self) -> impl Iterator<Item = PropertyName> + '_
    {
        self.entries.keys().copied()
    }
}
