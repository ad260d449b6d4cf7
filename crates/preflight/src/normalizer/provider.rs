//! Provider records as returned by the aviation weather JSON API.
//!
//! These mirror the provider's loosely typed fields; every field is
//! optional and several may arrive either as a number or as text.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A provider field that may be numeric or textual (`"VRB"`, `"10+"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// A numeric value.
    Number(f64),
    /// A textual value.
    Text(String),
}

/// A provider cloud layer. Clear-sky entries carry no base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCloud {
    /// Cover code (`FEW`, `SCT`, `BKN`, `OVC`, `CLR`, ...).
    pub cover: String,
    /// Base in feet AGL.
    pub base: Option<i32>,
}

/// A provider METAR record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMetar {
    /// Station identifier.
    pub icao_id: String,
    /// Observation time in epoch seconds.
    pub obs_time: Option<i64>,
    /// Observation time as text, used when `obs_time` is absent.
    pub report_time: Option<String>,
    /// Temperature in Celsius.
    pub temp: Option<f64>,
    /// Dewpoint in Celsius.
    pub dewp: Option<f64>,
    /// Wind direction in degrees, or `"VRB"`.
    pub wdir: Option<NumberOrText>,
    /// Wind speed in knots.
    pub wspd: Option<u32>,
    /// Gust speed in knots.
    pub wgst: Option<u32>,
    /// Visibility in statute miles, possibly `"10+"`.
    pub visib: Option<NumberOrText>,
    /// Altimeter, in hPa or inHg.
    pub altim: Option<f64>,
    /// Coded present weather.
    pub wx_string: Option<String>,
    /// Raw report text.
    pub raw_ob: Option<String>,
    /// Cloud layers.
    pub clouds: Vec<RawCloud>,
}

/// One provider forecast period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawForecastPeriod {
    /// Period start in epoch seconds.
    pub time_from: i64,
    /// Period end in epoch seconds.
    pub time_to: i64,
    /// Wind speed in knots.
    pub wspd: Option<u32>,
    /// Gust speed in knots.
    pub wgst: Option<u32>,
    /// Visibility in statute miles, possibly `"6+"`.
    pub visib: Option<NumberOrText>,
    /// Coded forecast weather.
    pub wx_string: Option<String>,
    /// Cloud layers.
    pub clouds: Vec<RawCloud>,
}

/// A provider TAF record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTaf {
    /// Station identifier.
    pub icao_id: String,
    /// Raw forecast text.
    pub raw_taf: Option<String>,
    /// Forecast periods.
    pub fcsts: Vec<RawForecastPeriod>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Parse a METAR response: a JSON array of records or a single record.
///
/// # Errors
///
/// Returns an error if the text is not valid METAR JSON.
pub fn parse_metars(json: &str) -> Result<Vec<RawMetar>> {
    let parsed: OneOrMany<RawMetar> = serde_json::from_str(json)?;
    Ok(parsed.into())
}

/// Parse a TAF response: a JSON array of records or a single record.
///
/// # Errors
///
/// Returns an error if the text is not valid TAF JSON.
pub fn parse_tafs(json: &str) -> Result<Vec<RawTaf>> {
    let parsed: OneOrMany<RawTaf> = serde_json::from_str(json)?;
    Ok(parsed.into())
}

/// Pick the record for `station`, or the first record when no station is
/// given. Station matching ignores case.
///
/// # Errors
///
/// Returns [`Error::NoObservation`] when nothing matches.
pub fn select_metar<'a>(metars: &'a [RawMetar], station: Option<&str>) -> Result<&'a RawMetar> {
    let found = match station {
        Some(id) => metars
            .iter()
            .find(|metar| metar.icao_id.eq_ignore_ascii_case(id)),
        None => metars.first(),
    };
    found.ok_or_else(|| Error::NoObservation {
        station: station.map(str::to_string),
    })
}

/// Pick the TAF for `station`, or the first one when no station is given.
#[must_use]
pub fn select_taf<'a>(tafs: &'a [RawTaf], station: Option<&str>) -> Option<&'a RawTaf> {
    match station {
        Some(id) => tafs.iter().find(|taf| taf.icao_id.eq_ignore_ascii_case(id)),
        None => tafs.first(),
    }
}
