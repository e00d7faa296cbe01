use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reciprocal condition number below which `(I - A)` counts as singular.
pub const DEFAULT_SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Central configuration for the total-output solve.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    #[serde(default)]
    pub rounding: RoundingPolicy,

    #[serde(default = "default_singularity_tolerance")]
    pub singularity_tolerance: f64,
}

fn default_singularity_tolerance() -> f64 {
    DEFAULT_SINGULARITY_TOLERANCE
}

/// How derived flows and total outputs are rounded to whole units.
///
/// The two policies only disagree on exact `.5` boundaries.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Banker's rounding: ties go to the nearest even integer.
    #[default]
    HalfToEven,
    /// Ties go away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    HalfAwayFromZero,
}

impl RoundingPolicy {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingPolicy::HalfToEven => value.round_ties_even(),
            RoundingPolicy::HalfAwayFromZero => value.round(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoundingPolicy::HalfToEven => "half-even",
            RoundingPolicy::HalfAwayFromZero => "half-away",
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half-even" | "half_to_even" | "bankers" => Ok(RoundingPolicy::HalfToEven),
            "half-away" | "half_away_from_zero" | "half-up" => {
                Ok(RoundingPolicy::HalfAwayFromZero)
            }
            _ => Err(format!(
                "Unknown rounding policy: {}. Expected one of `half-even` or `half-away`",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(rounding: RoundingPolicy, singularity_tolerance: f64) -> Self {
        Self {
            rounding,
            singularity_tolerance,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingPolicy::HalfToEven,
            singularity_tolerance: DEFAULT_SINGULARITY_TOLERANCE,
        }
    }
}
