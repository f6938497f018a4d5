//! Pure projection from a session snapshot to presentation data.
//!
//! Views never read the log directly and the log never holds presentation
//! state. After each command a binding takes a fresh [`Snapshot`] and
//! calls [`render`] to get everything it needs to draw:
//! - a score series anchored at `(0, 0)` for the chart
//! - reverse-chronological rows for the audit table
//! - the three-state next-bet indicator

mod config;

pub use config::{ViewConfig, MAX_GRIDLINES};

use crate::core::{Grade, Hand, Outcome};
use crate::session::Snapshot;
use serde::Serialize;

/// One chart point: hand index and cumulative score after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub index: usize,
    pub score: i64,
}

/// Chart series plus the window it is drawn in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub points: Vec<ChartPoint>,
    pub x_max: usize,
    pub y_min: i64,
    pub y_max: i64,
    pub gridlines: Vec<i64>,
    /// At least one point falls outside the window
    pub clipped: bool,
}

/// Colour class for a signed score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn of(score: i64) -> Self {
        match score {
            s if s > 0 => Self::Positive,
            s if s < 0 => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// One row of the audit table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    /// `#01`, `#02`, ...
    pub label: String,
    pub outcome: Outcome,
    /// Upper-case winner, e.g. `BANKER`
    pub winner: String,
    /// `4C` for four-card hands, `5+C` otherwise
    pub badge: &'static str,
    /// `P`, `B` or `-` when nothing was predicted
    pub predicted: &'static str,
    pub grade: Grade,
    /// Signed running score, e.g. `+2`, `0`, `-1`
    pub score: String,
    pub tone: Tone,
}

impl Row {
    fn from_hand(hand: &Hand) -> Self {
        Self {
            label: format!("#{:02}", hand.sequence_number),
            outcome: hand.outcome,
            winner: hand.outcome.name().to_uppercase(),
            badge: if hand.is_four_card_hand { "4C" } else { "5+C" },
            predicted: hand.predicted_outcome.map_or("-", |p| p.glyph()),
            grade: hand.grade,
            score: signed(hand.cumulative_score),
            tone: Tone::of(hand.cumulative_score),
        }
    }
}

/// Next-bet indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Indicator {
    Player,
    Banker,
    Blank,
}

impl Indicator {
    pub fn from_prediction(prediction: Option<Outcome>) -> Self {
        match prediction {
            Some(Outcome::Player) => Self::Player,
            Some(Outcome::Banker) => Self::Banker,
            Some(Outcome::Tie) | None => Self::Blank,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Player => "P",
            Self::Banker => "B",
            Self::Blank => "-",
        }
    }
}

/// Everything a binding needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub chart: Chart,
    pub rows: Vec<Row>,
    pub indicator: Indicator,
    /// `[N]` hand counter
    pub log_count: String,
    pub can_undo: bool,
    pub score: i64,
}

/// Project a snapshot into a view model.
///
/// # Example
///
/// ```rust
/// use natural_win::core::Outcome;
/// use natural_win::session::SessionLog;
/// use natural_win::view::{render, Indicator, ViewConfig};
///
/// let mut log = SessionLog::new();
/// log.submit(Outcome::Banker, false).unwrap();
/// log.submit(Outcome::Player, false).unwrap();
///
/// let view = render(&log.snapshot(), &ViewConfig::default());
/// assert_eq!(view.chart.points.len(), 3);
/// assert_eq!(view.rows[0].label, "#02");
/// assert_eq!(view.rows[0].score, "+1");
/// assert_eq!(view.indicator, Indicator::Banker);
/// assert_eq!(view.log_count, "[2]");
/// ```
pub fn render(snapshot: &Snapshot, config: &ViewConfig) -> ViewModel {
    let points: Vec<ChartPoint> = std::iter::once(ChartPoint { index: 0, score: 0 })
        .chain(snapshot.history.iter().map(|h| ChartPoint {
            index: h.sequence_number,
            score: h.cumulative_score,
        }))
        .collect();
    let clipped = points.iter().any(|p| !config.contains(p.index, p.score));

    ViewModel {
        chart: Chart {
            points,
            x_max: config.x_max,
            y_min: config.y_min,
            y_max: config.y_max,
            gridlines: config.gridlines(),
            clipped,
        },
        rows: snapshot.history.iter().rev().map(Row::from_hand).collect(),
        indicator: Indicator::from_prediction(snapshot.pending_prediction),
        log_count: format!("[{}]", snapshot.history.len()),
        can_undo: !snapshot.is_empty(),
        score: snapshot.score(),
    }
}

fn signed(score: i64) -> String {
    if score > 0 {
        format!("+{}", score)
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionLog;

    #[test]
    fn empty_snapshot_renders_anchor_only() {
        let view = render(&Snapshot::default(), &ViewConfig::default());

        assert_eq!(view.chart.points, vec![ChartPoint { index: 0, score: 0 }]);
        assert!(view.rows.is_empty());
        assert_eq!(view.indicator, Indicator::Blank);
        assert_eq!(view.indicator.glyph(), "-");
        assert_eq!(view.log_count, "[0]");
        assert!(!view.can_undo);
        assert!(!view.chart.clipped);
    }

    #[test]
    fn rows_are_reverse_chronological() {
        let mut log = SessionLog::new();
        log.replay(vec![
            (Outcome::Banker, false),
            (Outcome::Player, false),
            (Outcome::Player, true),
        ])
        .unwrap();

        let view = render(&log.snapshot(), &ViewConfig::default());
        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["#03", "#02", "#01"]);

        let newest = &view.rows[0];
        assert_eq!(newest.winner, "PLAYER");
        assert_eq!(newest.badge, "4C");
        assert_eq!(newest.predicted, "B");
        assert_eq!(newest.grade, Grade::Loss);
        assert_eq!(newest.score, "0");
        assert_eq!(newest.tone, Tone::Neutral);

        let oldest = &view.rows[2];
        assert_eq!(oldest.winner, "BANKER");
        assert_eq!(oldest.badge, "5+C");
        assert_eq!(oldest.predicted, "-");
        assert_eq!(oldest.grade, Grade::Push);
    }

    #[test]
    fn chart_tracks_cumulative_score() {
        let mut log = SessionLog::new();
        log.replay(vec![(Outcome::Banker, false), (Outcome::Banker, false)])
            .unwrap();

        let view = render(&log.snapshot(), &ViewConfig::default());
        assert_eq!(
            view.chart.points,
            vec![
                ChartPoint { index: 0, score: 0 },
                ChartPoint { index: 1, score: 0 },
                ChartPoint { index: 2, score: -1 },
            ]
        );
        assert_eq!(view.rows[0].score, "-1");
        assert_eq!(view.rows[0].tone, Tone::Negative);
        assert_eq!(view.score, -1);
    }

    #[test]
    fn chart_flags_points_outside_window() {
        let mut log = SessionLog::new();
        log.replay(vec![(Outcome::Banker, false); 4]).unwrap();

        let config = ViewConfig {
            x_max: 3,
            ..ViewConfig::default()
        };
        let view = render(&log.snapshot(), &config);
        assert!(view.chart.clipped);
        assert_eq!(view.chart.x_max, 3);
    }

    #[test]
    fn indicator_follows_pending_prediction() {
        assert_eq!(
            Indicator::from_prediction(Some(Outcome::Player)),
            Indicator::Player
        );
        assert_eq!(
            Indicator::from_prediction(Some(Outcome::Banker)).glyph(),
            "B"
        );
        assert_eq!(Indicator::from_prediction(None), Indicator::Blank);
    }

    #[test]
    fn signed_score_text() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-2), "-2");
    }

    #[test]
    fn render_is_pure() {
        let mut log = SessionLog::new();
        log.submit(Outcome::Player, false).unwrap();
        let snapshot = log.snapshot();

        let first = render(&snapshot, &ViewConfig::default());
        let second = render(&snapshot, &ViewConfig::default());
        assert_eq!(first, second);
    }

    #[test]
    fn render_survives_extreme_window() {
        let mut log = SessionLog::new();
        log.submit(Outcome::Banker, false).unwrap();

        let config = ViewConfig {
            x_max: 75,
            y_min: i64::MAX - 3,
            y_max: i64::MAX,
            grid_step: 2,
        };
        let view = render(&log.snapshot(), &config);
        assert_eq!(view.chart.gridlines, vec![i64::MAX - 3, i64::MAX - 1]);
        assert!(view.chart.clipped);

        let config = ViewConfig {
            x_max: 75,
            y_min: i64::MIN,
            y_max: i64::MAX,
            grid_step: 1,
        };
        let view = render(&log.snapshot(), &config);
        assert_eq!(view.chart.gridlines.len(), MAX_GRIDLINES);
    }
}
