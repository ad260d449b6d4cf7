//! Weather briefing and go/no-go assessment.
//!
//! The engine turns one normalized observation, and optionally a terminal
//! forecast, into a [`BriefingSummary`]: a readable paragraph, the list of
//! hazards found, and a recommendation.
//!
//! Rules run as a fixed sequence of stages sharing a per-call context:
//!
//! 1. Critical present weather (thunderstorms, freezing precipitation,
//!    funnel clouds and squalls) grounds the flight outright.
//! 2. Flight category narrative.
//! 3. Wind and gusts.
//! 4. Visibility.
//! 5. Temperature/dewpoint spread (fog risk).
//! 6. Ceiling.
//! 7. Present weather narrative and active precipitation.
//! 8. Altimeter.
//! 9. Forecast trend over the look-ahead window.
//! 10. Final recommendation.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use preflight::briefing::{evaluate, GoNoGo};
//! use preflight::weather::{CurrentObservation, FlightCategory, WindDirection};
//!
//! let observation = CurrentObservation {
//!     station: "KPAO".to_string(),
//!     flight_category: FlightCategory::Vfr,
//!     raw_text: String::new(),
//!     temperature_c: 20.0,
//!     dewpoint_c: 5.0,
//!     wind_direction: WindDirection::Degrees(0),
//!     wind_speed_kt: 0,
//!     wind_gust_kt: None,
//!     visibility_sm: 10.0,
//!     ceiling_ft: None,
//!     altimeter_in_hg: 30.10,
//!     present_weather: None,
//!     observation_time: Utc::now(),
//!     cloud_layers: Vec::new(),
//! };
//!
//! let briefing = evaluate(&observation, None);
//! assert_eq!(briefing.go_no_go, GoNoGo::Go);
//! ```

mod engine;
mod phrases;
mod stages;
mod summary;

pub use engine::{evaluate, BriefingEngine, DEFAULT_FORECAST_WINDOW_HOURS};
pub use summary::{BriefingSummary, GoNoGo, Recommendation};
