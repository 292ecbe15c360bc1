use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::ParseError;

/// последний кодпоинт Unicode
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// диапазон кодпоинтов, включая обе границы
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CodePointRange
{
    from: u32,
    to: u32,
}

impl CodePointRange
{
    /// диапазон с проверкой границ
    pub fn new(from: u32, to: u32) -> Result<Self, ParseError>
    {
        if from > MAX_CODE_POINT {
            return Err(ParseError::CodePointOutOfRange(from));
        }
        if to > MAX_CODE_POINT {
            return Err(ParseError::CodePointOutOfRange(to));
        }
        if from > to {
            return Err(ParseError::InvertedRange { from, to });
        }

        Ok(Self { from, to })
    }

    /// диапазон из заведомо корректных границ - для статических таблиц
    pub(crate) const fn from_bounds(from: u32, to: u32) -> Self
    {
        Self { from, to }
    }

    /// диапазон из одного кодпоинта
    pub fn single(code: u32) -> Result<Self, ParseError>
    {
        Self::new(code, code)
    }

    #[inline]
    pub fn from(&self) -> u32
    {
        self.from
    }

    #[inline]
    pub fn to(&self) -> u32
    {
        self.to
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.from <= code && code <= self.to
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn len(&self) -> u32
    {
        self.to - self.from + 1
    }

    /// диапазон не бывает пустым, метод для пары к len()
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        false
    }
}

impl fmt::Display for CodePointRange
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.from == self.to {
            true => write!(f, "{:04X}", self.from),
            false => write!(f, "{:04X}..{:04X}", self.from, self.to),
        }
    }
}

/// список диапазонов одного значения свойства
///
/// диапазоны добавляются в порядке возрастания; если новый диапазон начинается сразу за
/// последним, они сливаются в один
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct RangeList(Vec<CodePointRange>);

impl RangeList
{
    pub fn new() -> Self
    {
        Self(vec![])
    }

    /// добавить диапазон, при необходимости объединив его с последним
    pub fn push(&mut self, range: CodePointRange)
    {
        if let Some(last) = self.0.last_mut() {
            if last.to.checked_add(1) == Some(range.from) {
                last.to = range.to;
                return;
            }
        }

        self.0.push(range);
    }

    /// содержит ли какой-либо из диапазонов кодпоинт
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.find(code).is_some()
    }

    /// первый диапазон, содержащий кодпоинт
    pub fn find(&self, code: u32) -> Option<&CodePointRange>
    {
        self.0.iter().find(|range| range.contains(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodePointRange>
    {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CodePointRange]
    {
        self.0.as_slice()
    }

    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }
}

impl FromIterator<CodePointRange> for RangeList
{
    fn from_iter<T: IntoIterator<Item = CodePointRange>>(iter: T) -> Self
    {
        let mut list = Self::new();

        for range in iter {
            list.push(range);
        }

        list
    }
}
