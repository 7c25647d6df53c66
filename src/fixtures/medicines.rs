//! Medicine Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{catalog::Medicine, fixtures::FixtureError};

/// Wrapper for medicines in YAML
#[derive(Debug, Deserialize)]
pub struct MedicinesFixture {
    /// Map of medicine key -> medicine fixture
    pub medicines: FxHashMap<String, MedicineFixture>,
}

/// Medicine fixture from YAML
#[derive(Debug, Deserialize)]
pub struct MedicineFixture {
    /// Medicine name
    pub name: String,

    /// Medicine description
    pub description: String,

    /// Unit price (e.g., "8.50 EUR")
    pub price: String,
}

impl TryFrom<MedicineFixture> for Medicine<'_> {
    type Error = FixtureError;

    fn try_from(fixture: MedicineFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Medicine {
            name: fixture.name,
            description: fixture.description,
            price: Money::from_minor(minor_units, currency),
        })
    }
}

/// Parse price string (e.g., "8.50 EUR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
