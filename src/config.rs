//! Per-adapter settings.
//!
//! Both switches can come from the environment:
//!
//! - `LAPACKE_NANCHECK`: an integer; `0` turns NaN screening off. Anything
//!   that does not parse as an integer counts as `0`. Unset means on.
//! - `LAPACKE_TRACE=1`: print the path each call takes to stderr.

/// Adapter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Screen high-level inputs for NaN before doing anything else.
    pub nan_check: bool,
    /// Report each call's layout, tier and status on stderr.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nan_check: true,
            trace: false,
        }
    }
}

impl Config {
    /// Read `LAPACKE_NANCHECK` and `LAPACKE_TRACE`.
    pub fn from_env() -> Self {
        Self {
            nan_check: nan_check_from(std::env::var("LAPACKE_NANCHECK").ok().as_deref()),
            trace: matches!(std::env::var("LAPACKE_TRACE"), Ok(ref v) if v == "1"),
        }
    }

    pub fn with_nan_check(mut self, on: bool) -> Self {
        self.nan_check = on;
        self
    }

    pub fn with_trace(mut self, on: bool) -> Self {
        self.trace = on;
        self
    }
}

fn nan_check_from(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.trim().parse::<i64>().map_or(false, |flag| flag != 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screens_nan() {
        let config = Config::default();
        assert!(config.nan_check);
        assert!(!config.trace);
    }

    #[test]
    fn test_nan_check_flag_values() {
        assert!(nan_check_from(None));
        assert!(nan_check_from(Some("1")));
        assert!(nan_check_from(Some(" 2 ")));
        assert!(!nan_check_from(Some("0")));
        assert!(!nan_check_from(Some("off")));
    }

    #[test]
    fn test_builders() {
        let config = Config::default().with_nan_check(false).with_trace(true);
        assert_eq!(
            config,
            Config {
                nan_check: false,
                trace: true
            }
        );
    }
}
