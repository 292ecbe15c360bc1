use std::collections::BTreeMap;

use crate::symbol::Symbol;

/// общие категории (группы основных категорий), раздел 5.7.1 UAX #44:
///
/// - LC (Lu, Ll, Lt) - буквы, имеющие регистр
/// - L (Lu, Ll, Lt, Lm, Lo) - буквы
/// - M (Mn, Mc, Me) - комбинирующие символы
/// - N (Nd, Nl, No) - цифры, числовые символы
/// - P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
/// - S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
/// - Z (Zs, Zl, Zp) - разделители
/// - C (Cc, Cf, Cs, Co, Cn) - системные символы
///
/// одна категория может входить в несколько групп: Lu входит и в L, и в LC
///
pub const GENERAL_CATEGORY_GROUPS: [(&str, &[&str]); 8] = [
    ("lc", &["lu", "ll", "lt"]),
    ("l", &["lu", "ll", "lt", "lm", "lo"]),
    ("m", &["mn", "mc", "me"]),
    ("n", &["nd", "nl", "no"]),
    ("p", &["pc", "pd", "ps", "pe", "pi", "pf", "po"]),
    ("s", &["sm", "sc", "sk", "so"]),
    ("z", &["zs", "zl", "zp"]),
    ("c", &["cc", "cf", "cs", "co", "cn"]),
];

lazy_static! {
    /// обратная таблица: категория -> группы, в которые она входит (отсортированы)
    static ref GROUPS_BY_CATEGORY: BTreeMap<Symbol, Vec<Symbol>> = invert_groups();
}

fn invert_groups() -> BTreeMap<Symbol, Vec<Symbol>>
{
    let mut map: BTreeMap<Symbol, Vec<Symbol>> = BTreeMap::new();

    for (group, categories) in GENERAL_CATEGORY_GROUPS.iter() {
        for category in categories.iter() {
            map.entry(Symbol::new(category)).or_default().push(Symbol::new(group));
        }
    }

    for groups in map.values_mut() {
        groups.sort();
        groups.dedup();
    }

    map
}

/// группы, в которые входит основная категория, в лексикографическом порядке
/// неизвестная категория не входит ни в одну группу
pub fn lookup_gc_groups(category: &Symbol) -> Vec<Symbol>
{
    GROUPS_BY_CATEGORY.get(category).cloned().unwrap_or_default()
}
