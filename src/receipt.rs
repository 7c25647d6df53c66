//! Receipt
//!
//! Deterministic textual rendering of an order: delivery details, the
//! grouped ledger as a table, and the grand total. Purely derived from the
//! cart and delivery state; safe to render repeatedly.

use std::{fmt::Write as _, io};

use rusty_money::{Money, iso::Currency};
use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::{CartGroup, OrderCart},
    delivery::DeliveryInfo,
    weekday::Day,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Point-in-time snapshot of an order, ready for rendering.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    customer: String,
    date_text: String,
    day_label: &'static str,
    groups: Vec<CartGroup<'a>>,
    units: u32,
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Capture a receipt from the delivery details and the cart ledger.
    #[must_use]
    pub fn new(delivery: &DeliveryInfo, cart: &OrderCart<'a>) -> Self {
        let summary = cart.summary();

        Receipt {
            customer: format!("{} {}", delivery.first_name(), delivery.last_name())
                .trim()
                .to_string(),
            date_text: delivery.date_text().to_string(),
            day_label: delivery.resolved_day().map_or("Unknown", Day::name),
            groups: cart.detail().to_vec(),
            units: summary.units,
            total: summary.total,
        }
    }

    /// Customer line as rendered.
    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Total purchased units at capture time.
    #[must_use]
    pub fn units(&self) -> u32 {
        self.units
    }

    /// Grand total at capture time.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Render the receipt as text.
    ///
    /// Repeated calls produce byte-identical output for the same snapshot.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();

        write_summary_line(&mut out, "Customer:", &self.customer);
        write_summary_line(
            &mut out,
            "Delivery:",
            &format!("{} ({})", self.date_text, self.day_label),
        );

        _ = writeln!(out, "{}", self.table());

        write_summary_line(&mut out, "Items:", &self.units.to_string());
        write_summary_line(&mut out, "Total:", &format!("{}", self.total));

        out
    }

    /// Write the rendered receipt to the given sink.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if the sink rejects the write.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        out.write_all(self.text().as_bytes())
            .map_err(|_err| ReceiptError::IO)
    }

    fn table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Pharmacy", "Item", "Qty", "Unit Price", "Line Total"]);

        let mut group_boundary_rows: SmallVec<[usize; 8]> = smallvec![];
        let mut current_row = 1usize;

        for group in &self.groups {
            group_boundary_rows.push(current_row);

            let mut pharmacy_cell = group.pharmacy();

            for line in group.lines() {
                builder.push_record([
                    pharmacy_cell.to_string(),
                    line.name().to_string(),
                    line.quantity().to_string(),
                    format!("{}", line.unit_price()),
                    format!("{}", line.line_total()),
                ]);

                pharmacy_cell = "";
                current_row += 1;
            }
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        for &row in &group_boundary_rows {
            if row > 1 {
                theme.insert_horizontal_line(row, separator);
            }
        }

        table.with(theme);
        table.modify(Columns::new(2..5), Alignment::right());

        table.to_string()
    }
}

/// Header and summary lines share one label column width.
const LABEL_WIDTH: usize = 10;

fn write_summary_line(out: &mut String, label: &str, value: &str) {
    _ = writeln!(out, " {label:<width$} {value}", width = LABEL_WIDTH);
}
