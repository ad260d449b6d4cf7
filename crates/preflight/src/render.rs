//! Rendering of briefings for the terminal.

use std::fmt::Write;

use serde::Serialize;

use crate::briefing::BriefingSummary;
use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::weather::CurrentObservation;

/// A briefing together with the observation it was built from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingReport<'a> {
    /// Station identifier.
    pub station: &'a str,
    /// The observation that was briefed.
    pub observation: &'a CurrentObservation,
    /// The briefing.
    pub briefing: &'a BriefingSummary,
}

impl<'a> BriefingReport<'a> {
    /// Pair a briefing with its observation.
    #[must_use]
    pub fn new(observation: &'a CurrentObservation, briefing: &'a BriefingSummary) -> Self {
        Self {
            station: &observation.station,
            observation,
            briefing,
        }
    }

    /// Render in the configured format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, output: &OutputConfig) -> Result<String> {
        match output.format {
            OutputFormat::Text => Ok(self.to_text(output.show_raw)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Plain-text rendering.
    #[must_use]
    pub fn to_text(&self, show_raw: bool) -> String {
        let obs = self.observation;
        let briefing = self.briefing;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{}  {}  {} ({})",
            self.station, obs.flight_category, briefing.recommendation, briefing.go_no_go
        );
        if show_raw && !obs.raw_text.is_empty() {
            let _ = writeln!(out, "{}", obs.raw_text);
        }
        out.push('\n');
        let _ = writeln!(out, "{}", briefing.summary);

        if briefing.has_hazards() {
            out.push('\n');
            out.push_str("Hazards:\n");
            for hazard in &briefing.hazards {
                let _ = writeln!(out, "  - {hazard}");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::briefing::{BriefingEngine, GoNoGo};
    use crate::weather::{FlightCategory, WindDirection};

    fn observation() -> CurrentObservation {
        CurrentObservation {
            station: "KMRY".to_string(),
            flight_category: FlightCategory::Vfr,
            raw_text: "KMRY 191754Z 29010KT 10SM CLR 18/08 A2978".to_string(),
            temperature_c: 18.0,
            dewpoint_c: 8.0,
            wind_direction: WindDirection::Degrees(290),
            wind_speed_kt: 10,
            wind_gust_kt: None,
            visibility_sm: 10.0,
            ceiling_ft: None,
            altimeter_in_hg: 29.78,
            present_weather: None,
            observation_time: Utc.with_ymd_and_hms(2026, 10, 19, 17, 54, 0).unwrap(),
            cloud_layers: Vec::new(),
        }
    }

    #[test]
    fn test_text_rendering() {
        let obs = observation();
        let briefing = BriefingEngine::new().evaluate(&obs, None);
        let text = BriefingReport::new(&obs, &briefing).to_text(true);

        assert!(text.starts_with("KMRY  VFR  CAUTION (marginal)\n"));
        assert!(text.contains("KMRY 191754Z"));
        assert!(text.contains("Hazards:\n  - Low altimeter 29.78 inHg"));
    }

    #[test]
    fn test_text_rendering_hides_raw() {
        let obs = observation();
        let briefing = BriefingEngine::new().evaluate(&obs, None);
        let text = BriefingReport::new(&obs, &briefing).to_text(false);
        assert!(!text.contains("191754Z"));
    }

    #[test]
    fn test_json_rendering() {
        let obs = observation();
        let briefing = BriefingEngine::new().evaluate(&obs, None);
        let output = OutputConfig {
            format: OutputFormat::Json,
            show_raw: true,
        };
        let json = BriefingReport::new(&obs, &briefing).render(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["station"], "KMRY");
        assert_eq!(value["briefing"]["goNoGo"], "marginal");
        assert_eq!(value["observation"]["windSpeedKt"], 10);
        assert_eq!(briefing.go_no_go, GoNoGo::Marginal);
    }
}
