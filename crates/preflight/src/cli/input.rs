//! Loading briefing inputs from files.

use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};
use crate::normalizer::{
    normalize_metar, normalize_taf, parse_metars, parse_tafs, select_metar, select_taf,
};
use crate::weather::{CurrentObservation, Forecast};

/// Read an input file to a string.
///
/// # Errors
///
/// Returns [`Error::InputRead`] if the file cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::input_read(path, source))
}

/// Build the observation to brief from METAR JSON.
///
/// Canonical input is a single observation object. Provider input may hold
/// several stations; `station` picks one, otherwise the first is used.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or no matching record exists.
pub fn observation_from_json(
    json: &str,
    station: Option<&str>,
    normalized: bool,
) -> Result<CurrentObservation> {
    if normalized {
        return Ok(serde_json::from_str(json)?);
    }

    let metars = parse_metars(json)?;
    let metar = select_metar(&metars, station)?;
    Ok(normalize_metar(metar))
}

/// Build the forecast for `station` from TAF JSON.
///
/// Canonical input is an array of forecast periods. Returns `None` when a
/// provider response has no TAF for the station.
///
/// # Errors
///
/// Returns an error if the JSON is invalid.
pub fn forecast_from_json(json: &str, station: &str, normalized: bool) -> Result<Option<Forecast>> {
    if normalized {
        return Ok(Some(serde_json::from_str(json)?));
    }

    let tafs = parse_tafs(json)?;
    let forecast = select_taf(&tafs, Some(station)).map(normalize_taf);
    if forecast.is_none() {
        warn!(station, "no forecast found for station, briefing without trend");
    }
    Ok(forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::FlightCategory;

    #[test]
    fn test_observation_from_provider_json() {
        let json = r#"[
            {"icaoId":"KSNS","obsTime":1792432500,"wspd":14,"wgst":30,"visib":"10+","altim":1012,
             "clouds":[{"cover":"OVC","base":900}]},
            {"icaoId":"KWVI","obsTime":1792432500,"wspd":5,"visib":"10+","altim":1012}
        ]"#;

        let obs = observation_from_json(json, Some("KSNS"), false).unwrap();
        assert_eq!(obs.station, "KSNS");
        assert_eq!(obs.flight_category, FlightCategory::Ifr);
        assert_eq!(obs.wind_gust_kt, Some(30));

        let obs = observation_from_json(json, None, false).unwrap();
        assert_eq!(obs.station, "KSNS");
    }

    #[test]
    fn test_observation_from_canonical_json() {
        let json = r#"{
            "station": "KSQL", "flightCategory": "MVFR", "rawText": "",
            "temperatureC": 15, "dewpointC": 9, "windDirection": "variable",
            "windSpeedKt": 3, "visibilitySm": 5, "ceilingFt": 2800,
            "altimeterInHg": 30.01, "observationTime": "2026-10-19T17:55:00Z",
            "cloudLayers": [{"cover": "BKN", "baseFt": 2800}]
        }"#;

        let obs = observation_from_json(json, None, true).unwrap();
        assert_eq!(obs.flight_category, FlightCategory::Mvfr);
        assert_eq!(obs.ceiling_ft, Some(2800));
    }

    #[test]
    fn test_observation_missing_station() {
        let err = observation_from_json("[]", Some("KJFK"), false).unwrap_err();
        assert!(matches!(err, Error::NoObservation { .. }));
    }

    #[test]
    fn test_forecast_from_provider_json() {
        let json = r#"[{"icaoId":"KSNS","fcsts":[
            {"timeFrom":1792432800,"timeTo":1792443600,"visib":"6+","wxString":"-SHRA"}
        ]}]"#;

        let forecast = forecast_from_json(json, "KSNS", false).unwrap().unwrap();
        assert_eq!(forecast.periods.len(), 1);
        assert!(forecast_from_json(json, "KMRY", false).unwrap().is_none());
    }

    #[test]
    fn test_forecast_from_canonical_json() {
        let json = r#"[{"timeFrom":"2026-10-19T18:00:00Z","timeTo":"2026-10-19T22:00:00Z",
                        "flightCategory":"IFR","ceilingFt":800}]"#;
        let forecast = forecast_from_json(json, "KSNS", true).unwrap().unwrap();
        assert_eq!(
            forecast.periods[0].flight_category,
            Some(FlightCategory::Ifr)
        );
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/metar.json")).unwrap_err();
        assert!(matches!(err, Error::InputRead { .. }));
    }
}
