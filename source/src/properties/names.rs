use crate::range::CodePointRange;

/// заглушка вместо названий слогов хангыль (алгоритм NR1 не реализуется)
pub const HANGUL_SYLLABLE_PLACEHOLDER: &str = "<Hangul Syllable>";

/// правило получения названия: префикс + шестнадцатеричный код (NR2)
/// см. раздел 4.8 стандарта Unicode, таблица 4-8 Name Derivation Rule Prefix Strings
pub struct NamePrefixRule
{
    /// префикс названия; для хангыль - заглушка целиком
    pub prefix: &'static str,
    /// диапазоны, к которым применяется правило
    pub ranges: &'static [CodePointRange],
    /// добавлять ли к префиксу код символа
    pub append_code: bool,
}

impl NamePrefixRule
{
    pub fn contains(&self, code: u32) -> bool
    {
        self.ranges.iter().any(|range| range.contains(code))
    }

    /// название символа по правилу
    pub fn name(&self, code: u32) -> String
    {
        match self.append_code {
            true => format!("{}{:04X}", self.prefix, code),
            false => self.prefix.to_owned(),
        }
    }
}

const fn r(from: u32, to: u32) -> CodePointRange
{
    CodePointRange::from_bounds(from, to)
}

/// правила для Unicode 15.1
pub static NAME_PREFIX_RULES: [NamePrefixRule; 6] = [
    NamePrefixRule {
        prefix: HANGUL_SYLLABLE_PLACEHOLDER,
        ranges: &[r(0xAC00, 0xD7A3)],
        append_code: false,
    },
    NamePrefixRule {
        prefix: "CJK UNIFIED IDEOGRAPH-",
        ranges: &[
            r(0x3400, 0x4DBF),
            r(0x4E00, 0x9FFF),
            r(0x20000, 0x2A6DF),
            r(0x2A700, 0x2B739),
            r(0x2B740, 0x2B81D),
            r(0x2B820, 0x2CEA1),
            r(0x2CEB0, 0x2EBE0),
            r(0x2EBF0, 0x2EE5D),
            r(0x30000, 0x3134A),
            r(0x31350, 0x323AF),
        ],
        append_code: true,
    },
    NamePrefixRule {
        prefix: "TANGUT IDEOGRAPH-",
        ranges: &[r(0x17000, 0x187F7), r(0x18D00, 0x18D08)],
        append_code: true,
    },
    NamePrefixRule {
        prefix: "KHITAN SMALL SCRIPT CHARACTER-",
        ranges: &[r(0x18B00, 0x18CD5)],
        append_code: true,
    },
    NamePrefixRule {
        prefix: "NUSHU CHARACTER-",
        ranges: &[r(0x1B170, 0x1B2FB)],
        append_code: true,
    },
    NamePrefixRule {
        prefix: "CJK COMPATIBILITY IDEOGRAPH-",
        ranges: &[r(0xF900, 0xFA6D), r(0xFA70, 0xFAD9), r(0x2F800, 0x2FA1D)],
        append_code: true,
    },
];

/// название, получаемое по правилу префикса, если кодпоинт попадает под одно из правил
pub fn algorithmic_name(code: u32) -> Option<String>
{
    NAME_PREFIX_RULES
        .iter()
        .find(|rule| rule.contains(code))
        .map(|rule| rule.name(code))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn prefixed_names()
    {
        assert_eq!(algorithmic_name(0x4E00).as_deref(), Some("CJK UNIFIED IDEOGRAPH-4E00"));
        assert_eq!(algorithmic_name(0x20000).as_deref(), Some("CJK UNIFIED IDEOGRAPH-20000"));
        assert_eq!(algorithmic_name(0xF900).as_deref(), Some("CJK COMPATIBILITY IDEOGRAPH-F900"));
        assert_eq!(algorithmic_name(0x17000).as_deref(), Some("TANGUT IDEOGRAPH-17000"));
        assert_eq!(algorithmic_name(0x18B00).as_deref(), Some("KHITAN SMALL SCRIPT CHARACTER-18B00"));
        assert_eq!(algorithmic_name(0x1B170).as_deref(), Some("NUSHU CHARACTER-1B170"));
    }

    #[test]
    fn hangul_placeholder()
    {
        assert_eq!(algorithmic_name(0xAC00).as_deref(), Some(HANGUL_SYLLABLE_PLACEHOLDER));
        assert_eq!(algorithmic_name(0xD7A3).as_deref(), Some(HANGUL_SYLLABLE_PLACEHOLDER));
        assert_eq!(algorithmic_name(0xD7A4), None);
    }

    #[test]
    fn outside_rules()
    {
        assert_eq!(algorithmic_name(0x41), None);
        assert_eq!(algorithmic_name(0xFA6E), None);
        assert_eq!(algorithmic_name(0x10FFFF), None);
    }
}
