//! Briefing output types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall recommendation for the flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    /// Good conditions.
    Favorable,
    /// Flyable with care.
    Caution,
    /// Stay on the ground.
    Unfavorable,
}

impl Recommendation {
    /// The go/no-go answer that always accompanies this recommendation.
    #[must_use]
    pub fn go_no_go(self) -> GoNoGo {
        match self {
            Self::Favorable => GoNoGo::Go,
            Self::Caution => GoNoGo::Marginal,
            Self::Unfavorable => GoNoGo::Nogo,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorable => write!(f, "FAVORABLE"),
            Self::Caution => write!(f, "CAUTION"),
            Self::Unfavorable => write!(f, "UNFAVORABLE"),
        }
    }
}

/// Tri-state go/no-go decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoNoGo {
    /// Go.
    Go,
    /// Marginal.
    Marginal,
    /// No-go.
    Nogo,
}

impl fmt::Display for GoNoGo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Go => write!(f, "go"),
            Self::Marginal => write!(f, "marginal"),
            Self::Nogo => write!(f, "nogo"),
        }
    }
}

/// The result of a weather briefing.
///
/// Built once per evaluation and never mutated afterwards. `go_no_go` is
/// always the value implied by `recommendation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingSummary {
    /// Human-readable paragraph, one sentence per contributing stage.
    pub summary: String,
    /// Hazards in the order they were detected.
    pub hazards: Vec<String>,
    /// Overall recommendation.
    pub recommendation: Recommendation,
    /// Go/no-go answer matching `recommendation`.
    pub go_no_go: GoNoGo,
}

impl BriefingSummary {
    pub(crate) fn new(
        fragments: &[String],
        hazards: Vec<String>,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            summary: fragments.join(" "),
            hazards,
            recommendation,
            go_no_go: recommendation.go_no_go(),
        }
    }

    /// True when at least one hazard was identified.
    #[must_use]
    pub fn has_hazards(&self) -> bool {
        !self.hazards.is_empty()
    }
}
