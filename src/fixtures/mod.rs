//! Fixtures
//!
//! YAML seed sets for the partner network, loaded from
//! `fixtures/medicines/<name>.yml` and `fixtures/partners/<name>.yml`. The
//! bundled `demo` set carries a small demonstration network: eight medicines
//! and four pharmacies, including a weekend-only and an open-every-day
//! partner.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    cart::OrderCart,
    catalog::{Formulary, Medicine, MedicineKey, Pharmacy},
    directory::PartnerDirectory,
    fixtures::{medicines::MedicinesFixture, partners::PartnersFixture},
};

pub mod medicines;
pub mod partners;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Medicine not found
    #[error("Medicine not found: {0}")]
    MedicineNotFound(String),

    /// Currency mismatch between medicines
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No medicines loaded yet
    #[error("No medicines loaded yet; currency unknown")]
    NoCurrency,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Formulary holding the loaded medicines with generated keys
    formulary: Formulary<'a>,

    /// String key -> `MedicineKey` mapping for lookups
    medicine_keys: FxHashMap<String, MedicineKey>,

    /// Partner pharmacies in file order
    partners: Vec<Pharmacy>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            formulary: Formulary::with_key(),
            medicine_keys: FxHashMap::default(),
            partners: Vec::new(),
            currency: None,
        }
    }

    /// Load medicines from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are
    /// currency mismatches.
    pub fn load_medicines(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("medicines").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: MedicinesFixture = serde_norway::from_str(&contents)?;

        for (key, medicine_fixture) in fixture.medicines {
            let (_minor_units, currency) = medicines::parse_price(&medicine_fixture.price)?;

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let medicine: Medicine<'a> = medicine_fixture.try_into()?;
            let medicine_key = self.formulary.insert(medicine);

            self.medicine_keys.insert(key, medicine_key);
        }

        Ok(self)
    }

    /// Load partner pharmacies from a YAML fixture file
    ///
    /// Partners keep their file order; catalog entries are resolved against
    /// the already-loaded medicines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// catalog entry references a medicine that was not loaded.
    pub fn load_partners(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("partners").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: PartnersFixture = serde_norway::from_str(&contents)?;

        for partner in fixture.partners {
            let catalog = partner
                .catalog
                .iter()
                .map(|medicine_key| {
                    self.medicine_keys
                        .get(medicine_key)
                        .copied()
                        .ok_or_else(|| FixtureError::MedicineNotFound(medicine_key.clone()))
                })
                .collect::<Result<_, _>>()?;

            self.partners.push(Pharmacy {
                name: partner.name,
                description: partner.description,
                open_days: partner.open_days.into_iter().collect(),
                catalog,
            });
        }

        Ok(self)
    }

    /// Load a complete fixture set (medicines and partners with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_medicines(name)?.load_partners(name)?;

        Ok(fixture)
    }

    /// Get a medicine by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the medicine is not found.
    pub fn medicine(&self, key: &str) -> Result<&Medicine<'a>, FixtureError> {
        let medicine_key = self.medicine_key(key)?;

        self.formulary
            .get(medicine_key)
            .ok_or_else(|| FixtureError::MedicineNotFound(key.to_string()))
    }

    /// Get a medicine key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the medicine is not found.
    pub fn medicine_key(&self, key: &str) -> Result<MedicineKey, FixtureError> {
        self.medicine_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::MedicineNotFound(key.to_string()))
    }

    /// The loaded formulary
    pub fn formulary(&self) -> &Formulary<'a> {
        &self.formulary
    }

    /// The loaded partner pharmacies, in file order
    pub fn partners(&self) -> &[Pharmacy] {
        &self.partners
    }

    /// Build a partner directory over the loaded pharmacies
    #[must_use]
    pub fn directory(&self) -> PartnerDirectory {
        PartnerDirectory::new(self.partners.clone())
    }

    /// Create an empty cart in the fixture currency
    ///
    /// # Errors
    ///
    /// Returns an error if no medicines have been loaded yet.
    pub fn cart(&self) -> Result<OrderCart<'a>, FixtureError> {
        Ok(OrderCart::new(self.currency()?))
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no medicines have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rusty_money::iso::EUR;
    use testresult::TestResult;

    use crate::weekday::Day;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_demo_medicines_and_partners() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        assert_eq!(fixture.formulary().len(), 8);
        assert_eq!(fixture.partners().len(), 4);
        assert_eq!(fixture.currency()?, EUR);

        let dolomax = fixture.medicine("dolomax")?;

        assert_eq!(dolomax.name, "Dolomax 500");
        assert_eq!(dolomax.price.to_minor_units(), 850);

        Ok(())
    }

    #[test]
    fn demo_partners_keep_file_order() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        let names: Vec<&str> = fixture
            .partners()
            .iter()
            .map(|partner| partner.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec![
                "Pharmacie Saint-Remi",
                "Pharmacie des Collines",
                "Pharmacie du Soleil",
                "Pharmacie Express",
            ]
        );

        Ok(())
    }

    #[test]
    fn demo_weekend_partner_is_closed_on_monday() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        let weekend_partner = fixture
            .partners()
            .iter()
            .find(|partner| partner.name == "Pharmacie du Soleil")
            .ok_or("expected the weekend partner")?;

        assert!(!weekend_partner.is_open_on(Day::Monday));
        assert!(weekend_partner.is_open_on(Day::Sunday));

        Ok(())
    }

    #[test]
    fn fixture_directory_builds_over_loaded_partners() -> TestResult {
        let fixture = Fixture::from_set("demo")?;
        let directory = fixture.directory();

        assert_eq!(directory.partners().len(), 4);
        assert_eq!(directory.available_count(), 0);

        Ok(())
    }

    #[test]
    fn fixture_cart_uses_the_set_currency() -> TestResult {
        let fixture = Fixture::from_set("demo")?;
        let cart = fixture.cart()?;

        assert_eq!(cart.currency(), EUR);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn fixture_medicine_not_found_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.medicine("nonexistent");

        assert!(matches!(result, Err(FixtureError::MedicineNotFound(_))));
    }

    #[test]
    fn fixture_no_currency_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.currency();

        assert!(matches!(result, Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn fixture_load_medicines_rejects_currency_mismatch() -> TestResult {
        let base = tempfile::tempdir()?;

        write_fixture(
            base.path(),
            "medicines",
            "usd_set",
            "medicines:\n  aspirin:\n    name: Aspirin\n    description: none\n    price: 1.00 USD\n",
        )?;

        write_fixture(
            base.path(),
            "medicines",
            "eur_set",
            "medicines:\n  dolomax:\n    name: Dolomax 500\n    description: none\n    price: 8.50 EUR\n",
        )?;

        let mut fixture = Fixture::with_base_path(base.path());

        fixture.load_medicines("usd_set")?;

        let result = fixture.load_medicines("eur_set");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn fixture_load_partners_rejects_unknown_catalog_key() -> TestResult {
        let base = tempfile::tempdir()?;

        write_fixture(
            base.path(),
            "medicines",
            "small",
            "medicines:\n  dolomax:\n    name: Dolomax 500\n    description: none\n    price: 8.50 EUR\n",
        )?;

        write_fixture(
            base.path(),
            "partners",
            "small",
            "partners:\n  - name: Central\n    description: none\n    open_days: [Monday]\n    catalog: [missing]\n",
        )?;

        let mut fixture = Fixture::with_base_path(base.path());

        fixture.load_medicines("small")?;

        let result = fixture.load_partners("small");

        assert!(matches!(result, Err(FixtureError::MedicineNotFound(_))));

        Ok(())
    }
}
