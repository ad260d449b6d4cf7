//! Canonical weather records consumed by the briefing engine.
//!
//! These are the normalized shapes produced by [`crate::normalizer`]. Field
//! names serialize in camelCase so stored briefing inputs keep the layout the
//! rest of the system already reads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// FAA flight category derived from ceiling and visibility.
///
/// Codes outside the four standard categories are preserved verbatim in
/// [`FlightCategory::Unknown`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightCategory {
    /// Visual flight rules.
    Vfr,
    /// Marginal visual flight rules.
    Mvfr,
    /// Instrument flight rules.
    Ifr,
    /// Low instrument flight rules.
    Lifr,
    /// Any other category code reported by the provider.
    Unknown(String),
}

impl FlightCategory {
    /// Severity rank used for trend comparison. Lower is worse.
    ///
    /// Unrecognized categories rank alongside VFR.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::Lifr => 1,
            Self::Ifr => 2,
            Self::Mvfr => 3,
            Self::Vfr | Self::Unknown(_) => 4,
        }
    }

    /// True for IFR and LIFR.
    #[must_use]
    pub fn is_instrument(&self) -> bool {
        matches!(self, Self::Ifr | Self::Lifr)
    }

    /// The category code as reported (`VFR`, `MVFR`, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vfr => "VFR",
            Self::Mvfr => "MVFR",
            Self::Ifr => "IFR",
            Self::Lifr => "LIFR",
            Self::Unknown(code) => code,
        }
    }
}

impl From<String> for FlightCategory {
    fn from(code: String) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "VFR" => Self::Vfr,
            "MVFR" => Self::Mvfr,
            "IFR" => Self::Ifr,
            "LIFR" => Self::Lifr,
            _ => Self::Unknown(code),
        }
    }
}

impl From<&str> for FlightCategory {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<FlightCategory> for String {
    fn from(category: FlightCategory) -> Self {
        category.to_string()
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sky cover of a single cloud layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CloudCover {
    /// Sky clear (manual observation).
    Skc,
    /// Clear below 12,000 ft (automated observation).
    Clr,
    /// 1-2 oktas.
    Few,
    /// 3-4 oktas.
    Sct,
    /// 5-7 oktas.
    Bkn,
    /// 8 oktas.
    Ovc,
    /// Any other cover code.
    Other(String),
}

impl CloudCover {
    /// Broken and overcast layers constitute a ceiling.
    #[must_use]
    pub fn is_ceiling(&self) -> bool {
        matches!(self, Self::Bkn | Self::Ovc)
    }

    /// The cover code (`BKN`, `OVC`, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Skc => "SKC",
            Self::Clr => "CLR",
            Self::Few => "FEW",
            Self::Sct => "SCT",
            Self::Bkn => "BKN",
            Self::Ovc => "OVC",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for CloudCover {
    fn from(code: String) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SKC" => Self::Skc,
            "CLR" => Self::Clr,
            "FEW" => Self::Few,
            "SCT" => Self::Sct,
            "BKN" => Self::Bkn,
            "OVC" => Self::Ovc,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for CloudCover {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<CloudCover> for String {
    fn from(cover: CloudCover) -> Self {
        cover.to_string()
    }
}

impl fmt::Display for CloudCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reported cloud layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudLayer {
    /// Sky cover of the layer.
    pub cover: CloudCover,
    /// Layer base in feet AGL.
    pub base_ft: i32,
}

impl CloudLayer {
    /// Create a new cloud layer.
    #[must_use]
    pub fn new(cover: impl Into<CloudCover>, base_ft: i32) -> Self {
        Self {
            cover: cover.into(),
            base_ft,
        }
    }
}

/// Direction the wind is blowing from.
///
/// Serialized as an integer number of degrees, or the literal `"variable"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindDirection {
    /// Variable direction (`VRB`).
    Variable,
    /// True heading in degrees.
    Degrees(u16),
}

impl WindDirection {
    /// Variable, or the `0` heading that accompanies calm or light winds.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable | Self::Degrees(0))
    }
}

impl Default for WindDirection {
    fn default() -> Self {
        Self::Degrees(0)
    }
}

impl FromStr for WindDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("vrb") || trimmed.eq_ignore_ascii_case("variable") {
            return Ok(Self::Variable);
        }
        trimmed
            .parse::<u16>()
            .map(Self::Degrees)
            .map_err(|_| Error::invalid_value("wind direction", s))
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => f.write_str("variable"),
            Self::Degrees(deg) => write!(f, "{deg:03}"),
        }
    }
}

impl Serialize for WindDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Variable => serializer.serialize_str("variable"),
            Self::Degrees(deg) => serializer.serialize_u16(*deg),
        }
    }
}

impl<'de> Deserialize<'de> for WindDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Degrees(u16),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Degrees(deg) => Ok(Self::Degrees(deg)),
            Repr::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

/// A normalized surface observation (METAR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentObservation {
    /// Airport identifier.
    pub station: String,
    /// Flight category derived from ceiling and visibility.
    pub flight_category: FlightCategory,
    /// The original report text, kept verbatim.
    #[serde(default)]
    pub raw_text: String,
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Dewpoint in degrees Celsius.
    pub dewpoint_c: f64,
    /// Wind direction.
    #[serde(default)]
    pub wind_direction: WindDirection,
    /// Sustained wind speed in knots.
    #[serde(default)]
    pub wind_speed_kt: u32,
    /// Gust speed in knots, if gusting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_gust_kt: Option<u32>,
    /// Visibility in statute miles. Values of 10 or more mean "10 or more".
    pub visibility_sm: f64,
    /// Lowest broken or overcast base in feet AGL, `None` when there is no ceiling.
    #[serde(default)]
    pub ceiling_ft: Option<i32>,
    /// Altimeter setting in inches of mercury.
    #[serde(default)]
    pub altimeter_in_hg: f64,
    /// Coded present weather, e.g. `+TSRA` or `-FZDZ`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_weather: Option<String>,
    /// When the observation was taken.
    pub observation_time: DateTime<Utc>,
    /// Reported cloud layers, lowest first.
    #[serde(default)]
    pub cloud_layers: Vec<CloudLayer>,
}

impl CurrentObservation {
    /// Temperature minus dewpoint. Not clamped, so a dewpoint above the
    /// temperature yields a negative spread.
    #[must_use]
    pub fn temp_dewpoint_spread(&self) -> f64 {
        self.temperature_c - self.dewpoint_c
    }

    /// First cloud layer whose base is exactly `base_ft`.
    #[must_use]
    pub fn layer_at(&self, base_ft: i32) -> Option<&CloudLayer> {
        self.cloud_layers.iter().find(|layer| layer.base_ft == base_ft)
    }

    /// Present weather upper-cased, or `None` when absent or blank.
    #[must_use]
    pub fn present_weather_codes(&self) -> Option<String> {
        self.present_weather
            .as_deref()
            .map(str::trim)
            .filter(|wx| !wx.is_empty())
            .map(str::to_ascii_uppercase)
    }
}

/// One period of a terminal forecast (TAF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// Start of the period.
    pub time_from: DateTime<Utc>,
    /// End of the period.
    pub time_to: DateTime<Utc>,
    /// Forecast sustained wind in knots.
    #[serde(default)]
    pub wind_speed_kt: u32,
    /// Forecast gusts in knots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_gust_kt: Option<u32>,
    /// Forecast visibility in statute miles.
    #[serde(default = "default_visibility_sm")]
    pub visibility_sm: f64,
    /// Forecast ceiling in feet AGL.
    #[serde(default)]
    pub ceiling_ft: Option<i32>,
    /// Forecast flight category, if known.
    #[serde(default)]
    pub flight_category: Option<FlightCategory>,
    /// Coded forecast weather.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wx_string: Option<String>,
}

impl ForecastPeriod {
    /// Rank of this period's category; a missing category ranks as VFR.
    #[must_use]
    pub fn category_rank(&self) -> u8 {
        self.flight_category
            .as_ref()
            .map_or(FlightCategory::Vfr.rank(), FlightCategory::rank)
    }

    /// Whether the coded weather contains `code`, ignoring case.
    #[must_use]
    pub fn weather_contains(&self, code: &str) -> bool {
        self.wx_string
            .as_deref()
            .is_some_and(|wx| wx.to_ascii_uppercase().contains(code))
    }
}

fn default_visibility_sm() -> f64 {
    10.0
}

/// A terminal forecast: chronological, not necessarily contiguous periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forecast {
    /// Forecast periods in chronological order.
    pub periods: Vec<ForecastPeriod>,
}

impl Forecast {
    /// Create a forecast from its periods.
    #[must_use]
    pub fn new(periods: Vec<ForecastPeriod>) -> Self {
        Self { periods }
    }

    /// True when the forecast has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Periods that begin at or before `cutoff`.
    pub fn starting_by(&self, cutoff: DateTime<Utc>) -> impl Iterator<Item = &ForecastPeriod> {
        self.periods
            .iter()
            .filter(move |period| period.time_from <= cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn observation() -> CurrentObservation {
        CurrentObservation {
            station: "KPAO".to_string(),
            flight_category: FlightCategory::Vfr,
            raw_text: "KPAO 191755Z 31008KT 10SM FEW040 18/06 A3012".to_string(),
            temperature_c: 18.0,
            dewpoint_c: 6.0,
            wind_direction: WindDirection::Degrees(310),
            wind_speed_kt: 8,
            wind_gust_kt: None,
            visibility_sm: 10.0,
            ceiling_ft: None,
            altimeter_in_hg: 30.12,
            present_weather: None,
            observation_time: Utc.with_ymd_and_hms(2026, 10, 19, 17, 55, 0).unwrap(),
            cloud_layers: vec![CloudLayer::new("FEW", 4000)],
        }
    }

    #[test]
    fn test_flight_category_rank_order() {
        assert!(FlightCategory::Lifr.rank() < FlightCategory::Ifr.rank());
        assert!(FlightCategory::Ifr.rank() < FlightCategory::Mvfr.rank());
        assert!(FlightCategory::Mvfr.rank() < FlightCategory::Vfr.rank());
        assert_eq!(FlightCategory::Unknown("XX".into()).rank(), 4);
    }

    #[test]
    fn test_flight_category_from_code() {
        assert_eq!(FlightCategory::from("vfr"), FlightCategory::Vfr);
        assert_eq!(FlightCategory::from("LIFR"), FlightCategory::Lifr);
        assert_eq!(
            FlightCategory::from("UNK"),
            FlightCategory::Unknown("UNK".to_string())
        );
    }

    #[test]
    fn test_flight_category_serde() {
        let json = serde_json::to_string(&FlightCategory::Mvfr).unwrap();
        assert_eq!(json, "\"MVFR\"");
        let parsed: FlightCategory = serde_json::from_str("\"IFR\"").unwrap();
        assert_eq!(parsed, FlightCategory::Ifr);
    }

    #[test]
    fn test_cloud_cover_is_ceiling() {
        assert!(CloudCover::Bkn.is_ceiling());
        assert!(CloudCover::Ovc.is_ceiling());
        assert!(!CloudCover::Sct.is_ceiling());
        assert!(!CloudCover::Other("OVX".into()).is_ceiling());
    }

    #[test]
    fn test_wind_direction_parse() {
        assert_eq!("VRB".parse::<WindDirection>().unwrap(), WindDirection::Variable);
        assert_eq!(
            "270".parse::<WindDirection>().unwrap(),
            WindDirection::Degrees(270)
        );
        assert!("north".parse::<WindDirection>().is_err());
    }

    #[test]
    fn test_wind_direction_display_pads() {
        assert_eq!(WindDirection::Degrees(40).to_string(), "040");
        assert_eq!(WindDirection::Variable.to_string(), "variable");
    }

    #[test]
    fn test_wind_direction_zero_is_variable() {
        assert!(WindDirection::Degrees(0).is_variable());
        assert!(!WindDirection::Degrees(360).is_variable());
    }

    #[test]
    fn test_wind_direction_serde() {
        let parsed: WindDirection = serde_json::from_str("180").unwrap();
        assert_eq!(parsed, WindDirection::Degrees(180));
        let parsed: WindDirection = serde_json::from_str("\"variable\"").unwrap();
        assert_eq!(parsed, WindDirection::Variable);
        assert_eq!(
            serde_json::to_string(&WindDirection::Variable).unwrap(),
            "\"variable\""
        );
    }

    #[test]
    fn test_observation_spread_not_clamped() {
        let mut obs = observation();
        obs.temperature_c = 5.0;
        obs.dewpoint_c = 7.0;
        assert!((obs.temp_dewpoint_spread() + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_observation_present_weather_codes() {
        let mut obs = observation();
        assert!(obs.present_weather_codes().is_none());
        obs.present_weather = Some("   ".to_string());
        assert!(obs.present_weather_codes().is_none());
        obs.present_weather = Some("-ra br".to_string());
        assert_eq!(obs.present_weather_codes().as_deref(), Some("-RA BR"));
    }

    #[test]
    fn test_observation_serialization_uses_camel_case() {
        let json = serde_json::to_value(observation()).unwrap();
        assert_eq!(json["flightCategory"], "VFR");
        assert_eq!(json["windSpeedKt"], 8);
        assert_eq!(json["altimeterInHg"], 30.12);
        assert_eq!(json["cloudLayers"][0]["baseFt"], 4000);
        assert!(json.get("windGustKt").is_none());
    }

    #[test]
    fn test_forecast_starting_by() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 18, 0, 0).unwrap();
        let period = |hours: i64| ForecastPeriod {
            time_from: start + chrono::Duration::hours(hours),
            time_to: start + chrono::Duration::hours(hours + 3),
            wind_speed_kt: 5,
            wind_gust_kt: None,
            visibility_sm: 10.0,
            ceiling_ft: None,
            flight_category: None,
            wx_string: None,
        };
        let forecast = Forecast::new(vec![period(0), period(3), period(9)]);
        let cutoff = start + chrono::Duration::hours(6);
        assert_eq!(forecast.starting_by(cutoff).count(), 2);
    }

    #[test]
    fn test_forecast_period_missing_category_ranks_vfr() {
        let json = r#"{"timeFrom":"2026-10-19T18:00:00Z","timeTo":"2026-10-19T21:00:00Z"}"#;
        let period: ForecastPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.category_rank(), 4);
        assert!((period.visibility_sm - 10.0).abs() < f64::EPSILON);
    }
}
