//! Chart window configuration for the view projection.

use serde::{Deserialize, Serialize};

/// Upper bound on gridlines emitted for one chart.
pub const MAX_GRIDLINES: usize = 256;

/// Visible chart window.
///
/// Defaults to 75 hands across and ±20 units of score, with a gridline
/// every 2 units.
///
/// # Example
///
/// ```rust
/// use natural_win::view::ViewConfig;
///
/// let config: ViewConfig = serde_json::from_str(r#"{ "x_max": 100 }"#).unwrap();
/// assert_eq!(config.x_max, 100);
/// assert_eq!(config.y_min, -20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Last hand index shown on the x axis
    pub x_max: usize,
    /// Lower bound of the score axis
    pub y_min: i64,
    /// Upper bound of the score axis
    pub y_max: i64,
    /// Spacing between horizontal gridlines
    pub grid_step: i64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            x_max: 75,
            y_min: -20,
            y_max: 20,
            grid_step: 2,
        }
    }
}

impl ViewConfig {
    /// Horizontal gridline values, excluding the zero baseline.
    ///
    /// A non-positive step yields no gridlines. At most `MAX_GRIDLINES`
    /// values are produced, and stepping stops at the edge of `i64`.
    pub fn gridlines(&self) -> Vec<i64> {
        if self.grid_step <= 0 {
            return Vec::new();
        }
        let mut lines = Vec::new();
        let mut next = Some(self.y_min);
        while let Some(value) = next {
            if value > self.y_max || lines.len() >= MAX_GRIDLINES {
                break;
            }
            if value != 0 {
                lines.push(value);
            }
            next = value.checked_add(self.grid_step);
        }
        lines
    }

    pub fn contains(&self, index: usize, score: i64) -> bool {
        index <= self.x_max && (self.y_min..=self.y_max).contains(&score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gridlines_skip_zero() {
        let lines = ViewConfig::default().gridlines();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines.first(), Some(&-20));
        assert_eq!(lines.last(), Some(&20));
        assert!(!lines.contains(&0));
    }

    #[test]
    fn zero_step_has_no_gridlines() {
        let config = ViewConfig {
            grid_step: 0,
            ..ViewConfig::default()
        };
        assert!(config.gridlines().is_empty());
    }

    #[test]
    fn contains_checks_both_axes() {
        let config = ViewConfig::default();
        assert!(config.contains(0, 0));
        assert!(config.contains(75, -20));
        assert!(!config.contains(76, 0));
        assert!(!config.contains(10, 21));
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config: ViewConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn gridlines_stop_at_i64_edge() {
        let config = ViewConfig {
            x_max: 75,
            y_min: i64::MAX - 3,
            y_max: i64::MAX,
            grid_step: 2,
        };
        assert_eq!(config.gridlines(), vec![i64::MAX - 3, i64::MAX - 1]);
    }

    #[test]
    fn gridlines_are_capped_for_huge_windows() {
        let config = ViewConfig {
            x_max: 75,
            y_min: i64::MIN,
            y_max: i64::MAX,
            grid_step: 1,
        };
        let lines = config.gridlines();
        assert_eq!(lines.len(), MAX_GRIDLINES);
        assert_eq!(lines[0], i64::MIN);
    }

    #[test]
    fn inverted_window_has_no_gridlines() {
        let config = ViewConfig {
            y_min: 5,
            y_max: -5,
            ..ViewConfig::default()
        };
        assert!(config.gridlines().is_empty());
    }
}
