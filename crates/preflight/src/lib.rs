//! `preflight` - Weather briefings and go/no-go risk assessment for pilots
//!
//! This library turns a current observation (METAR) and an optional terminal
//! forecast (TAF) into a plain-language briefing, an ordered list of hazards,
//! and a recommendation.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod briefing;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod normalizer;
pub mod render;
pub mod weather;

pub use briefing::{evaluate, BriefingEngine, BriefingSummary, GoNoGo, Recommendation};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use weather::{CurrentObservation, FlightCategory, Forecast, ForecastPeriod};
