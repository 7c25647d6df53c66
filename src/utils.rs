//! Utils

use clap::Parser;

/// Arguments for the ordering demo
#[derive(Debug, Parser)]
pub struct DemoOrderArgs {
    /// Delivery date in dd/mm/yyyy form
    #[clap(short, long, default_value = "02/06/2025")]
    pub date: String,

    /// Fixture set to load medicines & partners from
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Index into the available-partner list to order from
    #[clap(short, long, default_value_t = 0)]
    pub partner: usize,

    /// Customer last name
    #[clap(long, default_value = "Doe")]
    pub last_name: String,

    /// Customer first name
    #[clap(long, default_value = "Jane")]
    pub first_name: String,
}
