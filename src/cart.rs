//! Order cart
//!
//! The cart is a grouped ledger: pharmacy, then medicine line, then a
//! positive quantity. The ledger is the single source of truth; unit counts
//! and totals are folded from it on demand in exact minor units, so there is
//! no second representation to drift out of step.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::catalog::{Formulary, MedicineKey};

/// Errors related to cart mutation.
#[derive(Debug, Error)]
pub enum CartError {
    /// The medicine key does not resolve in the formulary.
    #[error("medicine {0:?} is not in the formulary")]
    UnknownMedicine(MedicineKey),

    /// A medicine's currency differs from the cart currency.
    #[error("{name} is priced in {medicine_currency}, but the cart uses {cart_currency}")]
    CurrencyMismatch {
        /// Medicine name
        name: String,

        /// ISO code of the medicine's price currency
        medicine_currency: &'static str,

        /// ISO code of the cart currency
        cart_currency: &'static str,
    },
}

/// One ledger line: a medicine from one pharmacy with a positive quantity.
///
/// Name and unit price are captured when the first unit is added, so removal
/// subtracts exactly the price that was charged and later formulary edits
/// cannot skew an open cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    medicine: MedicineKey,
    name: String,
    unit_price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// Formulary key of the medicine on this line.
    #[must_use]
    pub fn medicine(&self) -> MedicineKey {
        self.medicine
    }

    /// Medicine name as charged.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price as charged.
    #[must_use]
    pub fn unit_price(&self) -> Money<'a, Currency> {
        self.unit_price
    }

    /// Units of this medicine in the cart; always at least 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Quantity times unit price.
    #[must_use]
    pub fn line_total(&self) -> Money<'a, Currency> {
        Money::from_minor(
            self.unit_price.to_minor_units() * i64::from(self.quantity),
            self.unit_price.currency(),
        )
    }
}

/// All ledger lines for one pharmacy, in first-add order.
#[derive(Debug, Clone, PartialEq)]
pub struct CartGroup<'a> {
    pharmacy: String,
    lines: SmallVec<[CartLine<'a>; 4]>,
}

impl<'a> CartGroup<'a> {
    /// Name of the pharmacy the units were drawn from.
    #[must_use]
    pub fn pharmacy(&self) -> &str {
        &self.pharmacy
    }

    /// Lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }
}

/// Point-in-time cart totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary<'a> {
    /// Total purchased units across all lines.
    pub units: u32,

    /// Grand total in the cart currency.
    pub total: Money<'a, Currency>,
}

/// Order cart
#[derive(Debug)]
pub struct OrderCart<'a> {
    groups: Vec<CartGroup<'a>>,
    currency: &'static Currency,
}

impl<'a> OrderCart<'a> {
    /// Create an empty cart pinned to a currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        OrderCart {
            groups: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a medicine from the named pharmacy.
    ///
    /// The medicine's name and unit price are resolved through the formulary
    /// at call time. A repeated add of the same (pharmacy, medicine-name)
    /// pair increments that line's quantity.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownMedicine`]: the key is absent from the formulary.
    /// - [`CartError::CurrencyMismatch`]: the medicine is priced in a
    ///   different currency than the cart.
    pub fn add_unit(
        &mut self,
        pharmacy_name: &str,
        medicine: MedicineKey,
        formulary: &Formulary<'a>,
    ) -> Result<(), CartError> {
        let entry = formulary
            .get(medicine)
            .ok_or(CartError::UnknownMedicine(medicine))?;

        let medicine_currency = entry.price.currency();

        if medicine_currency != self.currency {
            return Err(CartError::CurrencyMismatch {
                name: entry.name.clone(),
                medicine_currency: medicine_currency.iso_alpha_code,
                cart_currency: self.currency.iso_alpha_code,
            });
        }

        let group_pos = if let Some(pos) = self
            .groups
            .iter()
            .position(|group| group.pharmacy == pharmacy_name)
        {
            pos
        } else {
            self.groups.push(CartGroup {
                pharmacy: pharmacy_name.to_string(),
                lines: SmallVec::new(),
            });

            self.groups.len().saturating_sub(1)
        };

        if let Some(group) = self.groups.get_mut(group_pos) {
            if let Some(line) = group.lines.iter_mut().find(|line| line.name == entry.name) {
                line.quantity = line.quantity.saturating_add(1);
            } else {
                group.lines.push(CartLine {
                    medicine,
                    name: entry.name.clone(),
                    unit_price: entry.price,
                    quantity: 1,
                });
            }
        }

        Ok(())
    }

    /// Remove one unit of the named medicine bought from the named pharmacy.
    ///
    /// A quantity reaching zero deletes the line; a pharmacy left with no
    /// lines is deleted too. Removing an entry that does not exist is a
    /// no-op: caller state and cart state may legitimately lag by one action.
    pub fn remove_unit(&mut self, pharmacy_name: &str, medicine_name: &str) {
        let Some(group_pos) = self
            .groups
            .iter()
            .position(|group| group.pharmacy == pharmacy_name)
        else {
            return;
        };

        let Some(group) = self.groups.get_mut(group_pos) else {
            return;
        };

        let Some(line_pos) = group
            .lines
            .iter()
            .position(|line| line.name == medicine_name)
        else {
            return;
        };

        if let Some(line) = group.lines.get_mut(line_pos) {
            line.quantity = line.quantity.saturating_sub(1);

            if line.quantity == 0 {
                group.lines.remove(line_pos);
            }
        }

        if group.lines.is_empty() {
            self.groups.remove(group_pos);
        }
    }

    /// Total purchased units, folded from the ledger.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.lines().map(CartLine::quantity).sum()
    }

    /// Grand total in the cart currency, folded from the ledger.
    #[must_use]
    pub fn total_price(&self) -> Money<'a, Currency> {
        let minor_units = self
            .lines()
            .map(|line| line.unit_price.to_minor_units() * i64::from(line.quantity))
            .sum();

        Money::from_minor(minor_units, self.currency)
    }

    /// Unit count and grand total in one read.
    #[must_use]
    pub fn summary(&self) -> CartSummary<'a> {
        CartSummary {
            units: self.unit_count(),
            total: self.total_price(),
        }
    }

    /// The grouped ledger, pharmacies and lines both in first-add order.
    #[must_use]
    pub fn detail(&self) -> &[CartGroup<'a>] {
        &self.groups
    }

    /// Whether the cart holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The cart currency.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn lines(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.groups.iter().flat_map(|group| group.lines.iter())
    }
}
