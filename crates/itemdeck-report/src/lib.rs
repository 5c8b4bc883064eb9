//! Read-only summaries of the record collection.
//!
//! Everything here is computed from the canonical items, never from the
//! filtered projection, so dashboard figures do not move with the table's
//! search box.

#![deny(unsafe_code)]

mod charts;
mod format;
mod stats;

pub use charts::{ChartPoint, items_by_status, value_by_category};
pub use format::{format_currency, format_date};
pub use stats::DashboardStats;
