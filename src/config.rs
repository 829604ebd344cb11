use std::path::PathBuf;

use crate::scheduler::IntervalTable;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub database_path: PathBuf,
    pub feed_path: Option<PathBuf>,
    pub intervals: Option<Vec<f64>>,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/flashdeck.db"));

        let feed_path = std::env::var("CARDS_FEED").ok().map(PathBuf::from);

        let intervals = std::env::var("INTERVAL_TABLE")
            .ok()
            .and_then(|value| parse_intervals(&value));

        Self {
            log_level,
            database_path,
            feed_path,
            intervals,
        }
    }

    pub fn interval_table(&self) -> IntervalTable {
        match &self.intervals {
            Some(intervals) => IntervalTable::new(intervals.clone()),
            None => IntervalTable::default(),
        }
    }
}

/// Comma-separated positive durations, e.g. `1,5,25,120`. Anything invalid
/// rejects the whole override.
fn parse_intervals(value: &str) -> Option<Vec<f64>> {
    let intervals: Option<Vec<f64>> = value
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok().filter(|v| *v > 0.0))
        .collect();

    match intervals {
        Some(ref list) if list.is_empty() => None,
        Some(list) => Some(list),
        None => {
            tracing::warn!(value, "invalid INTERVAL_TABLE override ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_interval_override() {
        assert_eq!(
            parse_intervals("1, 5, 25,120"),
            Some(vec![1.0, 5.0, 25.0, 120.0])
        );
    }

    #[test]
    fn rejects_bad_overrides() {
        assert_eq!(parse_intervals("1,banana,25"), None);
        assert_eq!(parse_intervals("1,-5"), None);
        assert_eq!(parse_intervals(""), None);
    }
}
