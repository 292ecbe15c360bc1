mod field;

pub use field::Field;

use crate::error::ParseError;

/// префикс комментария со значениями по умолчанию (раздел 4.2.10 UAX #44)
const MISSING_PREFIX: &str = "# @missing:";

/// запись: поля данных и поля значения по умолчанию из одной строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a>
{
    /// номер строки, начиная с 1
    pub line: usize,
    /// исходная строка - для сообщений об ошибках
    pub content: &'a str,
    /// поля данных
    pub fields: Vec<Field<'a>>,
    /// поля из комментария @missing
    pub default_fields: Vec<Field<'a>>,
}

impl<'a> Record<'a>
{
    /// разобрать строку; пустые строки и строки из одного комментария дают None
    pub fn parse(line: usize, content: &'a str) -> Option<Self>
    {
        let (data, comment) = split_comment(content);

        let fields = match data.is_empty() {
            true => vec![],
            false => split_fields(data),
        };

        let default_fields = match comment.strip_prefix(MISSING_PREFIX) {
            Some(missing) => split_fields(missing.trim()),
            None => vec![],
        };

        if fields.is_empty() && default_fields.is_empty() {
            return None;
        }

        Some(Self {
            line,
            content,
            fields,
            default_fields,
        })
    }

    /// поле данных по индексу
    #[inline]
    pub fn field(&self, index: usize) -> Option<Field<'a>>
    {
        self.fields.get(index).copied()
    }

    /// поле значения по умолчанию по индексу
    #[inline]
    pub fn default_field(&self, index: usize) -> Option<Field<'a>>
    {
        self.default_fields.get(index).copied()
    }

    /// обязательное поле данных
    pub fn require(&self, index: usize) -> Result<Field<'a>, ParseError>
    {
        required(&self.fields, index)
    }

    /// обязательное поле значения по умолчанию
    pub fn require_default(&self, index: usize) -> Result<Field<'a>, ParseError>
    {
        required(&self.default_fields, index)
    }
}

fn required<'a>(fields: &[Field<'a>], index: usize) -> Result<Field<'a>, ParseError>
{
    fields.get(index).copied().ok_or(ParseError::MissingField {
        index,
        count: fields.len(),
    })
}

/// итератор записей по строкам файла
pub struct Records<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    lines: core::iter::Enumerate<I>,
}

impl<'a, I> Iterator for Records<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item>
    {
        for (i, line) in self.lines.by_ref() {
            if let Some(record) = Record::parse(i + 1, line) {
                return Some(record);
            }
        }

        None
    }
}

/// записи из последовательности строк
pub fn records<'a, L>(lines: L) -> Records<'a, L::IntoIter>
where
    L: IntoIterator<Item = &'a str>,
{
    Records {
        lines: lines.into_iter().enumerate(),
    }
}

/// отделить данные от комментария
/// комментарий начинается с первого `#`, перед которым нет `\`
fn split_comment(line: &str) -> (&str, &str)
{
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        match c {
            '\\' => escaped = !escaped,
            '#' if !escaped => return (line[.. i].trim(), &line[i ..]),
            _ => escaped = false,
        }
    }

    (line.trim(), "")
}

/// разделить данные на поля, обрезав пробелы вокруг каждого
fn split_fields(data: &str) -> Vec<Field<'_>>
{
    data.split(';').map(|f| Field::new(f.trim())).collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn parse(src: &str) -> Vec<(Vec<&str>, Vec<&str>)>
    {
        records(src.lines())
            .map(|r| {
                (
                    r.fields.iter().map(|f| f.as_str()).collect(),
                    r.default_fields.iter().map(|f| f.as_str()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn skips_blank_and_comment_lines()
    {
        assert_eq!(parse("\n\n123\n\n"), vec![(vec!["123"], vec![])]);
        assert_eq!(
            parse("# This is a comment\n123 # This is a comment\n# This is a comment\n"),
            vec![(vec!["123"], vec![])]
        );
        assert!(parse("   \n# comment only\n\t\n").is_empty());
    }

    #[test]
    fn fields()
    {
        assert_eq!(parse("123; foo; bar"), vec![(vec!["123", "foo", "bar"], vec![])]);
        assert_eq!(parse("123; foo;"), vec![(vec!["123", "foo", ""], vec![])]);
        assert_eq!(parse("123;; foo"), vec![(vec!["123", "", "foo"], vec![])]);
    }

    #[test]
    fn missing_defaults()
    {
        assert_eq!(
            parse("# @missing: 123; foo; bar"),
            vec![(vec![], vec!["123", "foo", "bar"])]
        );
        assert_eq!(
            parse("123; foo # @missing: 456; bar"),
            vec![(vec!["123", "foo"], vec!["456", "bar"])]
        );
        assert_eq!(
            parse("123; foo\n# @missing: 456; bar"),
            vec![(vec!["123", "foo"], vec![]), (vec![], vec!["456", "bar"])]
        );
        // обычный комментарий, а не @missing
        assert!(parse("# missing: 456; bar").is_empty());
    }

    #[test]
    fn line_numbers()
    {
        let lines: Vec<usize> = records("# header\n\n0041;A\n0042;B".lines()).map(|r| r.line).collect();

        assert_eq!(lines, vec![3, 4]);
    }

    #[test]
    fn escaped_hash()
    {
        assert_eq!(parse(r"0023; \#; x # comment"), vec![(vec!["0023", r"\#", "x"], vec![])]);
    }
}
