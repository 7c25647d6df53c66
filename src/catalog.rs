//! Catalog entities
//!
//! Medicines live in a [`Formulary`] keyed by [`MedicineKey`], so identity is
//! the key and a catalog may hold distinct medicines with identical names.

use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::weekday::{Day, DaySet};

new_key_type! {
    /// Medicine Key
    pub struct MedicineKey;
}

/// Every medicine the partner network can dispense.
pub type Formulary<'a> = SlotMap<MedicineKey, Medicine<'a>>;

/// Medicine
#[derive(Debug, Clone)]
pub struct Medicine<'a> {
    /// Medicine name
    pub name: String,

    /// Short description
    pub description: String,

    /// Unit price
    pub price: Money<'a, Currency>,
}

/// Partner pharmacy
#[derive(Debug, Clone, PartialEq)]
pub struct Pharmacy {
    /// Pharmacy name
    pub name: String,

    /// Short description
    pub description: String,

    /// Days the pharmacy accepts deliveries; may be empty.
    pub open_days: DaySet,

    /// Catalog in display order, referencing formulary entries.
    pub catalog: SmallVec<[MedicineKey; 8]>,
}

impl Pharmacy {
    /// Whether the pharmacy is open on the given day.
    #[must_use]
    pub fn is_open_on(&self, day: Day) -> bool {
        self.open_days.contains(day)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn pharmacy_is_open_on_listed_days_only() {
        let pharmacy = Pharmacy {
            name: "Pharmacie du Soleil".to_string(),
            description: "Weekend-only pharmacy".to_string(),
            open_days: DaySet::WEEKEND,
            catalog: smallvec![],
        };

        assert!(pharmacy.is_open_on(Day::Saturday));
        assert!(!pharmacy.is_open_on(Day::Monday));
    }

    #[test]
    fn pharmacy_with_empty_day_set_is_never_open() {
        let pharmacy = Pharmacy {
            name: "Closed".to_string(),
            description: String::new(),
            open_days: DaySet::EMPTY,
            catalog: smallvec![],
        };

        for day in Day::ALL {
            assert!(!pharmacy.is_open_on(day), "empty day-set must never match");
        }
    }

    #[test]
    fn formulary_keys_distinguish_same_named_medicines() {
        let mut formulary = Formulary::with_key();

        let first = formulary.insert(Medicine {
            name: "Dolomax 500".to_string(),
            description: "Blister of 16".to_string(),
            price: Money::from_minor(850, EUR),
        });

        let second = formulary.insert(Medicine {
            name: "Dolomax 500".to_string(),
            description: "Blister of 32".to_string(),
            price: Money::from_minor(1550, EUR),
        });

        assert_ne!(first, second);
        assert_eq!(formulary.len(), 2);
    }
}
