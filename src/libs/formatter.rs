//! Display formatting for dates, weights and set lists.
//!
//! ```rust
//! use liftlog::libs::formatter::format_weight;
//!
//! assert_eq!(format_weight(100.0), "100");
//! assert_eq!(format_weight(102.5), "102.5");
//! ```

use crate::db::history::SetSummary;
use chrono::{DateTime, Local, Utc};

/// Workout timestamp in local time, minute precision.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Weight without a trailing `.0` for whole numbers.
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.is_finite() {
        format!("{:.0}", weight)
    } else {
        let s = format!("{:.2}", weight);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Compact `weight x reps` list, e.g. `100 x 5, 105 x 5`.
pub fn format_sets(sets: &[SetSummary]) -> String {
    if sets.is_empty() {
        return "-".to_string();
    }
    sets.iter()
        .map(|set| format!("{} x {}", format_weight(set.weight), set.reps))
        .collect::<Vec<_>>()
        .join(", ")
}
