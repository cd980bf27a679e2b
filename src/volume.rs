//! # Master Volume
//!
//! Turns the user's volume expression into a decibel offset. Decibels mix
//! directly with Wwise's own volume values.
//!
//! | Input    | Meaning                                   |
//! |----------|-------------------------------------------|
//! | `*`      | auto: 0 dB now, normalised later          |
//! | `-6db`   | decibels (suffix is case-insensitive)     |
//! | `50%`    | percentage, converted to a multiplier     |
//! | `2`      | linear multiplier                         |
//!
//! Multipliers must be positive. Bad input never fails the run: the previous
//! state is kept and, if nothing was ever set, an informational note is logged.

use log::{debug, info};

/// Common multipliers with exact decibel values, avoiding float noise.
const MULTIPLIER_TO_DB: [(f64, f64); 5] = [
    (4.0, 12.0),
    (2.0, 6.0),
    (1.0, 0.0),
    (0.5, -6.0),
    (0.25, -12.0),
];

/// Result of interpreting one volume expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeOutcome {
    /// Nothing given.
    Empty,
    /// New offset stored.
    Applied { db: f64, auto: bool },
    /// Not a number in any accepted form.
    IgnoredInvalid,
    /// Multiplier of zero or less has no decibel value.
    IgnoredNonPositive,
}

/// Master volume state for a run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VolumeState {
    pub master_db: Option<f64>,
    pub auto: bool,
}

impl VolumeState {
    /// Parses `input` and stores the result when it is usable.
    pub fn set_volume(&mut self, input: Option<&str>) -> VolumeOutcome {
        let Some(input) = input.filter(|v| !v.is_empty()) else {
            return VolumeOutcome::Empty;
        };

        let outcome = parse_volume(input);
        if let VolumeOutcome::Applied { db, auto } = outcome {
            debug!("Master volume set to {db} dB (auto: {auto})");
            self.master_db = Some(db);
            self.auto = auto;
        }

        if self.reports_ignored(outcome) {
            info!("parser: ignored incorrect volume {input}");
        }
        outcome
    }

    /// Unreadable input is worth a note only while nothing is set.
    /// Non-positive multipliers are dropped silently.
    fn reports_ignored(&self, outcome: VolumeOutcome) -> bool {
        outcome == VolumeOutcome::IgnoredInvalid && self.master_db.is_none() && !self.auto
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.master_db.is_some()
    }
}

/// Interprets a non-empty volume expression without touching any state.
#[must_use]
pub fn parse_volume(input: &str) -> VolumeOutcome {
    if input == "*" {
        return VolumeOutcome::Applied {
            db: 0.0,
            auto: true,
        };
    }

    let lower = input.to_ascii_lowercase();
    if let Some(number) = lower.strip_suffix("db") {
        return match parse_number(number) {
            Some(db) => VolumeOutcome::Applied { db, auto: false },
            None => VolumeOutcome::IgnoredInvalid,
        };
    }

    let multiplier = match lower.strip_suffix('%') {
        Some(number) => parse_number(number).map(|percent| percent / 100.0),
        None => parse_number(&lower),
    };

    match multiplier {
        None => VolumeOutcome::IgnoredInvalid,
        Some(m) if m <= 0.0 => VolumeOutcome::IgnoredNonPositive,
        Some(m) => VolumeOutcome::Applied {
            db: multiplier_to_db(m),
            auto: false,
        },
    }
}

/// Decibel value of a positive linear multiplier.
#[must_use]
pub fn multiplier_to_db(multiplier: f64) -> f64 {
    MULTIPLIER_TO_DB
        .iter()
        .find(|(m, _)| *m == multiplier)
        .map_or_else(|| multiplier.log10() * 20.0, |(_, db)| *db)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
