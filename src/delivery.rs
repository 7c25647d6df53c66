//! Delivery details
//!
//! Customer identity plus the requested delivery date. The weekday is a
//! derived attribute: it is recomputed whenever the date text is set and is
//! never stored independently.

use std::fmt;

use crate::weekday::{self, Day};

/// Delivery details for one order session.
///
/// The core does not validate names; gating blank input is the caller's
/// concern before the order proceeds.
#[derive(Debug, Default, Clone)]
pub struct DeliveryInfo {
    last_name: String,
    first_name: String,
    date_text: String,
    resolved_day: Option<Day>,
}

impl DeliveryInfo {
    /// Create empty delivery details with no resolved day.
    #[must_use]
    pub fn new() -> Self {
        DeliveryInfo::default()
    }

    /// Store the date text and recompute the resolved weekday.
    ///
    /// Text that does not resolve leaves the day unresolved rather than
    /// failing; downstream filtering treats an unresolved day as "cannot
    /// proceed".
    pub fn set_date(&mut self, date_text: impl Into<String>) {
        self.date_text = date_text.into();
        self.resolved_day = weekday::resolve(&self.date_text).ok();
    }

    /// Store the customer's last name.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Store the customer's first name.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    /// The customer's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The customer's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The raw delivery date text.
    #[must_use]
    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    /// The weekday derived from the date text, if it resolved.
    #[must_use]
    pub fn resolved_day(&self) -> Option<Day> {
        self.resolved_day
    }
}

impl fmt::Display for DeliveryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.resolved_day.map_or("Unknown", Day::name);

        write!(
            f,
            "{} {} - Date: {} ({day})",
            self.first_name, self.last_name, self.date_text
        )
    }
}
