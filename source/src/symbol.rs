use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// символьное значение свойства в нормализованной форме
///
/// сравнение символьных значений выполняется по правилу UAX44-LM3 (раздел 5.9.3 UAX #44):
/// регистр не учитывается, символы `_`, `-` и пробел игнорируются, как и префикс `is`.
/// поэтому "Old_Italic", "OldItalic" и "old-italic" дают один и тот же символ.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Symbol(String);

impl Symbol
{
    /// нормализовать исходное написание значения
    pub fn new(raw: &str) -> Self
    {
        Self(normalize_symbol(raw))
    }

    #[inline]
    pub fn as_str(&self) -> &str
    {
        self.0.as_str()
    }

    /// совпадает ли символ с произвольным написанием значения (UAX44-LM3)
    #[inline]
    pub fn matches(&self, raw: &str) -> bool
    {
        self.0 == normalize_symbol(raw)
    }
}

impl From<&str> for Symbol
{
    fn from(raw: &str) -> Self
    {
        Self::new(raw)
    }
}

impl AsRef<str> for Symbol
{
    fn as_ref(&self) -> &str
    {
        self.as_str()
    }
}

impl fmt::Display for Symbol
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.0)
    }
}

/// нормализация символьного значения по UAX44-LM3
///
/// нижний регистр, без `_`, `-` и пробелов; ведущий `is` отбрасывается один раз,
/// если только значение целиком не равно `is`
pub fn normalize_symbol(raw: &str) -> String
{
    let folded: String = raw
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect();

    if folded == "is" {
        return folded;
    }

    match folded.strip_prefix("is") {
        Some(rest) => rest.to_owned(),
        None => folded,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn loose_matching()
    {
        let expected = normalize_symbol("Old_Italic");

        assert_eq!(expected, "olditalic");
        assert_eq!(normalize_symbol("OldItalic"), expected);
        assert_eq!(normalize_symbol("old-italic"), expected);
        assert_eq!(normalize_symbol("Old Italic"), expected);
    }

    #[test]
    fn is_prefix()
    {
        assert_eq!(normalize_symbol("isAlphabetic"), "alphabetic");
        assert_eq!(normalize_symbol("is"), "is");
        assert_eq!(normalize_symbol("IS"), "is");
        assert_eq!(normalize_symbol("Is_Is"), "is");
        assert_eq!(normalize_symbol("Foo_Bar-Baz Bra"), "foobarbazbra");
    }

    #[test]
    fn symbol_equality()
    {
        assert_eq!(Symbol::new("Lu"), Symbol::new("lu"));
        assert!(Symbol::new("Uppercase_Letter").matches("uppercase-letter"));
        assert!(!Symbol::new("Lu").matches("Ll"));
    }
}
