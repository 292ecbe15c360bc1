use std::collections::{BTreeMap, HashMap};

use super::{PropertyName, PropertyValue};
use crate::error::UcdError;
use crate::symbol::Symbol;

/// предельная глубина вывода; граф правил маленький, так что превышение означает ошибку в правилах
pub const MAX_DERIVATION_DEPTH: usize = 16;

/// элементарное условие: свойство имеет заданное значение
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition
{
    pub property: PropertyName,
    pub value: PropertyValue,
}

impl Condition
{
    /// двоичное свойство = Yes
    pub fn yes(property: PropertyName) -> Self
    {
        Self {
            property,
            value: PropertyValue::YES,
        }
    }

    /// General_Category = категория
    pub fn category(category: &str) -> Self
    {
        Self {
            property: PropertyName::GeneralCategory,
            value: PropertyValue::Symbol(Symbol::new(category)),
        }
    }
}

lazy_static! {
    /// правила вывода свойств: свойство истинно, если выполнено хотя бы одно из условий
    /// см. раздел 5.3 UAX #44 и DerivedCoreProperties.txt
    pub static ref DERIVATION_RULES: HashMap<PropertyName, Vec<Condition>> = {
        use PropertyName::*;

        let mut rules = HashMap::new();

        // Lowercase + Uppercase + Lt + Lm + Lo + Nl + Other_Alphabetic
        rules.insert(
            Alphabetic,
            vec![
                Condition::yes(Lowercase),
                Condition::yes(Uppercase),
                Condition::category("Lt"),
                Condition::category("Lm"),
                Condition::category("Lo"),
                Condition::category("Nl"),
                Condition::yes(OtherAlphabetic),
            ],
        );

        // Ll + Other_Lowercase
        rules.insert(Lowercase, vec![Condition::category("Ll"), Condition::yes(OtherLowercase)]);

        // Lu + Other_Uppercase
        rules.insert(Uppercase, vec![Condition::category("Lu"), Condition::yes(OtherUppercase)]);

        rules
    };
}

/// вычисление производных свойств по таблице правил
#[derive(Debug, Clone, Copy)]
pub struct DerivationEngine<'r>
{
    rules: &'r HashMap<PropertyName, Vec<Condition>>,
}

impl Default for DerivationEngine<'static>
{
    fn default() -> Self
    {
        Self {
            rules: &DERIVATION_RULES,
        }
    }
}

impl<'r> DerivationEngine<'r>
{
    pub fn with_rules(rules: &'r HashMap<PropertyName, Vec<Condition>>) -> Self
    {
        Self { rules }
    }

    /// есть ли правило вывода для свойства
    #[inline]
    pub fn has_rule(&self, name: PropertyName) -> bool
    {
        self.rules.contains_key(&name)
    }

    /// свойства, имеющие правила вывода, по порядку
    pub fn derived_properties(&self) -> Vec<PropertyName>
    {
        let mut names: Vec<PropertyName> = self.rules.keys().copied().collect();
        names.sort();

        names
    }

    /// проверить граф правил на отсутствие циклов
    ///
    /// с пустым набором базовых свойств ни одно условие не выполняется сразу,
    /// поэтому обходятся все ссылки между правилами
    pub fn validate(&self) -> Result<(), UcdError>
    {
        let base = BTreeMap::new();

        for name in self.derived_properties() {
            self.derive(name, &base)?;
        }

        Ok(())
    }

    /// вычислить производное свойство по базовым свойствам кодпоинта
    pub fn derive(
        &self,
        name: PropertyName,
        base: &BTreeMap<PropertyName, PropertyValue>,
    ) -> Result<bool, UcdError>
    {
        let mut stack = Vec::with_capacity(4);

        self.evaluate(name, base, &mut stack)
    }

    /// вычислить все производные свойства
    pub fn derive_all(
        &self,
        base: &BTreeMap<PropertyName, PropertyValue>,
    ) -> Result<BTreeMap<PropertyName, bool>, UcdError>
    {
        self.derived_properties()
            .into_iter()
            .map(|name| Ok((name, self.derive(name, base)?)))
            .collect()
    }

    fn evaluate(
        &self,
        name: PropertyName,
        base: &BTreeMap<PropertyName, PropertyValue>,
        stack: &mut Vec<PropertyName>,
    ) -> Result<bool, UcdError>
    {
        if stack.contains(&name) || stack.len() >= MAX_DERIVATION_DEPTH {
            return Err(UcdError::DerivationCycle(name));
        }

        // свойство без правила и без значения в базовом наборе - No
        let conditions = match self.rules.get(&name) {
            Some(conditions) => conditions,
            None => return Ok(false),
        };

        stack.push(name);

        let mut result = false;

        for condition in conditions {
            let holds = match base.get(&condition.property) {
                Some(value) => *value == condition.value,
                None => match condition.value {
                    PropertyValue::Binary(expected) => {
                        self.evaluate(condition.property, base, stack)? == expected
                    }
                    _ => false,
                },
            };

            if holds {
                result = true;
                break;
            }
        }

        stack.pop();

        Ok(result)
    }
}
