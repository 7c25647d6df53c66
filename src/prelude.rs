//! Apotheca prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartError, CartGroup, CartLine, CartSummary, OrderCart},
    catalog::{Formulary, Medicine, MedicineKey, Pharmacy},
    delivery::DeliveryInfo,
    directory::{DirectoryError, PartnerDirectory},
    fixtures::{Fixture, FixtureError},
    receipt::{Receipt, ReceiptError},
    weekday::{DateParseError, Day, DaySet, resolve},
};
