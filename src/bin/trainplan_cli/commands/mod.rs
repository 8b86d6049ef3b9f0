// ABOUTME: Command implementations for trainplan-cli
// ABOUTME: One module per subcommand plus shared argument parsing

pub mod generate;
pub mod preview;
pub mod token;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today (UTC)
pub fn start_date_or_today(raw: Option<&str>) -> Result<NaiveDate> {
    raw.map_or_else(
        || Ok(Utc::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid --start-date '{s}', expected YYYY-MM-DD"))
        },
    )
}
