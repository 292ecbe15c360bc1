use std::collections::BTreeMap;

use super::{format_error, WithContext};
use crate::error::{FormatError, UcdError};
use crate::parser::records;
use crate::range::{CodePointRange, RangeList};
use crate::symbol::Symbol;
use crate::ucd::SourceFile;

const FILE: SourceFile = SourceFile::UnicodeData;

/// названия и основные категории из UnicodeData.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnicodeData
{
    /// названия кодпоинтов, у которых есть собственное название
    names: BTreeMap<u32, String>,
    /// категория -> диапазоны кодпоинтов
    general_category: BTreeMap<Symbol, RangeList>,
}

/// открытый диапазон <X, First>, ждущий своего <X, Last>
struct PendingRange<'a>
{
    label: &'a str,
    start: u32,
    category: Symbol,
    line: usize,
}

impl UnicodeData
{
    /// разбор UnicodeData.txt
    ///
    /// колонки: 0 - кодпоинт, 1 - название или метка в угловых скобках, 2 - основная категория.
    /// остальные колонки (CCC, Bidi, декомпозиция и т.д.) здесь не нужны
    pub fn parse<'a, L>(lines: L) -> Result<Self, UcdError>
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut data = Self::default();

        // пригодится, когда встретим диапазоны
        let mut pending: Option<PendingRange> = None;

        for record in records(lines) {
            if record.fields.is_empty() {
                continue;
            }

            let range = record
                .require(0)
                .and_then(|f| f.code_point_range())
                .context(FILE, &record)?;
            let name = record.require(1).context(FILE, &record)?;
            let category = record.require(2).context(FILE, &record)?;

            // предыдущая запись открыла диапазон - эта обязана его закрыть
            if let Some(open) = pending.take() {
                let label = name
                    .range_last()
                    .ok_or_else(|| FormatError::UnmatchedRangeStart(open.label.to_owned()))
                    .context(FILE, &record)?;

                if label != open.label {
                    let source = FormatError::RangeLabelMismatch {
                        first: open.label.to_owned(),
                        last: label.to_owned(),
                    };

                    return Err(format_error(FILE, &record, source));
                }

                if range.to() < open.start {
                    let source = FormatError::InvertedRangePair {
                        label: label.to_owned(),
                        from: open.start,
                        to: range.to(),
                    };

                    return Err(format_error(FILE, &record, source));
                }

                let full = CodePointRange::new(open.start, range.to()).context(FILE, &record)?;
                data.add_gc(open.category, full);

                continue;
            }

            // различные блоки: CJK, хангыль, тангутский, суррогаты, Private Use ...
            // названий у них нет, в таблицу категорий они попадают целым диапазоном
            if let Some(label) = name.range_start() {
                pending = Some(PendingRange {
                    label,
                    start: range.from(),
                    category: category.normalized_symbol(),
                    line: record.line,
                });

                continue;
            }

            if let Some(label) = name.range_last() {
                let source = FormatError::UnexpectedRangeLast(label.to_owned());

                return Err(format_error(FILE, &record, source));
            }

            // <control> и подобные метки - не названия
            match name.name() {
                Some(name) => {
                    data.names.insert(range.from(), name.to_owned());
                }
                None => log::trace!("{}: {} - {} без названия", FILE, range, name.as_str()),
            }

            data.add_gc(category.normalized_symbol(), range);
        }

        if let Some(open) = pending {
            return Err(UcdError::Format {
                file: FILE,
                line: open.line,
                source: FormatError::UnmatchedRangeStart(open.label.to_owned()),
            });
        }

        log::debug!(
            "{}: названий - {}, категорий - {}, диапазонов - {}",
            FILE,
            data.names.len(),
            data.general_category.len(),
            data.general_category.values().map(RangeList::len).sum::<usize>(),
        );

        Ok(data)
    }

    /// добавить диапазон к категории; соседние диапазоны одной категории сливаются
    ///
    /// раздел 4.2.11 UAX #44 (Empty Fields): пустое поле означает значение по умолчанию,
    /// поэтому кодпоинт без категории в таблицу не попадает
    pub fn add_gc(&mut self, category: Symbol, range: CodePointRange)
    {
        if category.as_str().is_empty() {
            return;
        }

        self.general_category.entry(category).or_default().push(range);
    }

    /// собственное название кодпоинта
    pub fn name(&self, code: u32) -> Option<&str>
    {
        self.names.get(&code).map(String::as_str)
    }

    /// основная категория кодпоинта, если он явно перечислен в файле
    pub fn general_category(&self, code: u32) -> Option<&Symbol>
    {
        self.general_category
            .iter()
            .find(|(_, ranges)| ranges.contains(code))
            .map(|(category, _)| category)
    }

    /// диапазоны категории
    pub fn category_ranges(&self, category: &Symbol) -> Option<&RangeList>
    {
        self.general_category.get(category)
    }

    pub fn names(&self) -> &BTreeMap<u32, String>
    {
        &self.names
    }

    pub fn categories(&self) -> &BTreeMap<Symbol, RangeList>
    {
        &self.general_category
    }
}
