use core::fmt;

use regex::Regex;

use crate::error::ParseError;
use crate::range::CodePointRange;
use crate::symbol::Symbol;

lazy_static! {
    /// кодпоинт или диапазон кодпоинтов: 0041, 0041..005A
    static ref CODE_POINT_RANGE: Regex =
        Regex::new(r"^([0-9A-Fa-f]{1,6})(?:\.\.([0-9A-Fa-f]{1,6}))?$").unwrap();

    /// граница диапазона в UnicodeData.txt: <CJK Ideograph, First>, <CJK Ideograph, Last>
    static ref RANGE_MARKER: Regex = Regex::new(r"^<(.+), (First|Last)>$").unwrap();
}

/// поле записи файла UCD
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Field<'a>(&'a str);

impl<'a> Field<'a>
{
    #[inline]
    pub fn new(value: &'a str) -> Self
    {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &'a str
    {
        self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }

    /// кодпоинт или диапазон кодпоинтов в шестнадцатеричной записи
    pub fn code_point_range(&self) -> Result<CodePointRange, ParseError>
    {
        let invalid = || ParseError::InvalidCodePointRange(self.0.to_owned());

        let captures = CODE_POINT_RANGE.captures(self.0).ok_or_else(invalid)?;

        let decode = |hex: &str| u32::from_str_radix(hex, 16).map_err(|_| invalid());

        let from = match captures.get(1) {
            Some(m) => decode(m.as_str())?,
            None => return Err(invalid()),
        };

        let to = match captures.get(2) {
            Some(m) => decode(m.as_str())?,
            None => from,
        };

        CodePointRange::new(from, to)
    }

    /// имя; поля вида <...> именами не являются (это <control> или граница диапазона)
    pub fn name(&self) -> Option<&'a str>
    {
        match self.0.starts_with('<') && self.0.ends_with('>') {
            true => None,
            false => Some(self.0),
        }
    }

    /// метка начала диапазона: <LABEL, First>
    pub fn range_start(&self) -> Option<&'a str>
    {
        self.range_marker("First")
    }

    /// метка конца диапазона: <LABEL, Last>
    pub fn range_last(&self) -> Option<&'a str>
    {
        self.range_marker("Last")
    }

    fn range_marker(&self, kind: &str) -> Option<&'a str>
    {
        let captures = RANGE_MARKER.captures(self.0)?;

        match captures.get(2)?.as_str() == kind {
            true => captures.get(1).map(|m| m.as_str()),
            false => None,
        }
    }

    /// символьное значение в исходном написании
    #[inline]
    pub fn symbol(&self) -> &'a str
    {
        self.0
    }

    /// символьное значение, нормализованное по UAX44-LM3
    #[inline]
    pub fn normalized_symbol(&self) -> Symbol
    {
        Symbol::new(self.0)
    }
}

impl fmt::Debug for Field<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn range(field: &str) -> Result<(u32, u32), ParseError>
    {
        Field::new(field).code_point_range().map(|r| (r.from(), r.to()))
    }

    #[test]
    fn code_point_ranges()
    {
        assert_eq!(range("0"), Ok((0, 0)));
        assert_eq!(range("10FFFF"), Ok((0x10FFFF, 0x10FFFF)));
        assert_eq!(range("0..10FFFF"), Ok((0, 0x10FFFF)));
        assert_eq!(range("00c0..00d6"), Ok((0xC0, 0xD6)));
    }

    #[test]
    fn invalid_code_point_ranges()
    {
        for field in ["", "XYZ", "0041.005A", "0041..", "1234567", "0041 ..005A"] {
            assert_eq!(
                range(field),
                Err(ParseError::InvalidCodePointRange(field.to_owned())),
                "{}",
                field
            );
        }

        assert_eq!(range("110000"), Err(ParseError::CodePointOutOfRange(0x110000)));
        assert_eq!(
            range("005A..0041"),
            Err(ParseError::InvertedRange { from: 0x5A, to: 0x41 })
        );
    }

    #[test]
    fn names_and_markers()
    {
        assert_eq!(Field::new("LATIN CAPITAL LETTER A").name(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(Field::new("<control>").name(), None);
        assert_eq!(Field::new("<CJK Ideograph, First>").name(), None);

        assert_eq!(Field::new("<CJK Ideograph, First>").range_start(), Some("CJK Ideograph"));
        assert_eq!(Field::new("<CJK Ideograph, First>").range_last(), None);
        assert_eq!(Field::new("<CJK Ideograph, Last>").range_last(), Some("CJK Ideograph"));
        assert_eq!(Field::new("<control>").range_start(), None);
    }

    #[test]
    fn symbols()
    {
        let field = Field::new("Uppercase_Letter");

        assert_eq!(field.symbol(), "Uppercase_Letter");
        assert_eq!(field.normalized_symbol().as_str(), "uppercaseletter");
    }
}
