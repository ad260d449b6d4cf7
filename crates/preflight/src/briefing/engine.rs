//! Briefing engine entry points.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use super::stages::{BriefingContext, StageInput, STAGES};
use super::summary::BriefingSummary;
use crate::config::BriefingConfig;
use crate::weather::{CurrentObservation, Forecast};

/// Default look-ahead for forecast trend analysis.
pub const DEFAULT_FORECAST_WINDOW_HOURS: u32 = 6;

/// Evaluates observations and forecasts into briefings.
///
/// The engine holds only its forecast window; every evaluation builds its
/// own context, so one engine may be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BriefingEngine {
    forecast_window: Duration,
}

impl Default for BriefingEngine {
    fn default() -> Self {
        Self::with_forecast_window_hours(DEFAULT_FORECAST_WINDOW_HOURS)
    }
}

impl BriefingEngine {
    /// Create an engine with the default six hour forecast window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that looks `hours` ahead in the forecast.
    #[must_use]
    pub fn with_forecast_window_hours(hours: u32) -> Self {
        Self {
            forecast_window: Duration::hours(i64::from(hours)),
        }
    }

    /// Create an engine from the `[briefing]` configuration section.
    #[must_use]
    pub fn from_config(config: &BriefingConfig) -> Self {
        Self::with_forecast_window_hours(config.forecast_window_hours)
    }

    /// The forecast look-ahead.
    #[must_use]
    pub fn forecast_window(&self) -> Duration {
        self.forecast_window
    }

    /// Brief against the current wall-clock time.
    #[must_use]
    pub fn evaluate(
        &self,
        observation: &CurrentObservation,
        forecast: Option<&Forecast>,
    ) -> BriefingSummary {
        self.evaluate_at(observation, forecast, Utc::now())
    }

    /// Brief as of `now`. Only the forecast window depends on the time.
    #[must_use]
    pub fn evaluate_at(
        &self,
        observation: &CurrentObservation,
        forecast: Option<&Forecast>,
        now: DateTime<Utc>,
    ) -> BriefingSummary {
        let input = StageInput {
            observation,
            forecast,
            now,
            forecast_window: self.forecast_window,
        };
        let mut ctx = BriefingContext::default();

        for (name, stage) in STAGES {
            stage(&input, &mut ctx);
            trace!(
                stage = name,
                hazards = ctx.hazard_count(),
                no_go = ctx.no_go(),
                high_caution = ctx.high_caution(),
                "briefing stage complete"
            );
        }

        let summary = ctx.finish();
        debug!(
            station = %observation.station,
            category = %observation.flight_category,
            recommendation = %summary.recommendation,
            hazards = summary.hazards.len(),
            "briefing evaluated"
        );
        summary
    }
}

/// Brief an observation with the default engine.
///
/// Never fails: every observation yields a complete summary, even with no
/// hazards.
#[must_use]
pub fn evaluate(observation: &CurrentObservation, forecast: Option<&Forecast>) -> BriefingSummary {
    BriefingEngine::default().evaluate(observation, forecast)
}
