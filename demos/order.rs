//! Ordering Demo
//!
//! Walks the full ordering flow against a fixture set: resolve the delivery
//! date, filter the partner directory, pick a partner, add its whole catalog
//! to a cart and print the receipt.
//!
//! Use `-d` to set the delivery date (dd/mm/yyyy)
//! Use `-f` to load a fixture set by name
//! Use `-p` to pick a partner by its index in the available list

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use apotheca::{
    catalog::MedicineKey, delivery::DeliveryInfo, fixtures::Fixture, receipt::Receipt,
    utils::DemoOrderArgs,
};

/// Ordering Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoOrderArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    let mut delivery = DeliveryInfo::new();
    delivery.set_last_name(&args.last_name);
    delivery.set_first_name(&args.first_name);
    delivery.set_date(&args.date);

    let day = delivery
        .resolved_day()
        .with_context(|| format!("cannot resolve a weekday from {:?}", args.date))?;

    let mut directory = fixture.directory();

    let available: Vec<String> = directory
        .filter_by_day(day)
        .into_iter()
        .map(|partner| partner.name.clone())
        .collect();

    println!("Partners open on {day}: {}", available.join(", "));

    let partner = directory.select_active(args.partner)?;
    let partner_name = partner.name.clone();
    let catalog: Vec<MedicineKey> = partner.catalog.iter().copied().collect();

    let mut cart = fixture.cart()?;

    for medicine in catalog {
        cart.add_unit(&partner_name, medicine, fixture.formulary())?;
    }

    let stdout = io::stdout();
    let handle = stdout.lock();

    Receipt::new(&delivery, &cart).write_to(handle)?;

    Ok(())
}
