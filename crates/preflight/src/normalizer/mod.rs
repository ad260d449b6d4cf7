//! Conversion of provider weather records into canonical observations.
//!
//! The briefing engine performs no validation of its own. Everything it
//! relies on is settled here:
//!
//! - **Ceiling**: the lowest broken or overcast base; no ceiling otherwise.
//! - **Flight category**: FAA breakpoints on ceiling and visibility.
//! - **Altimeter**: hectopascal readings (anything above 100) are converted
//!   to inches of mercury, rounded to two decimals.
//! - **Defaults**: missing wind, temperature, dewpoint and altimeter become
//!   0; missing or unreadable visibility becomes 10 SM.

mod category;
mod provider;
mod units;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, warn};

use crate::weather::{
    CloudLayer, CurrentObservation, Forecast, ForecastPeriod, WindDirection,
};

pub use category::{ceiling_from_layers, flight_category};
pub use provider::{
    parse_metars, parse_tafs, select_metar, select_taf, NumberOrText, RawCloud,
    RawForecastPeriod, RawMetar, RawTaf,
};
pub use units::{altimeter_in_hg, parse_visibility, DEFAULT_VISIBILITY_SM};

/// Normalize a provider METAR.
#[must_use]
pub fn normalize_metar(raw: &RawMetar) -> CurrentObservation {
    let cloud_layers = cloud_layers(&raw.clouds);
    let ceiling_ft = ceiling_from_layers(&cloud_layers);
    let visibility_sm = visibility(raw.visib.as_ref());

    let observation = CurrentObservation {
        station: raw.icao_id.clone(),
        flight_category: flight_category(ceiling_ft, visibility_sm),
        raw_text: raw.raw_ob.clone().unwrap_or_default(),
        temperature_c: raw.temp.unwrap_or(0.0),
        dewpoint_c: raw.dewp.unwrap_or(0.0),
        wind_direction: wind_direction(raw.wdir.as_ref()),
        wind_speed_kt: raw.wspd.unwrap_or(0),
        wind_gust_kt: raw.wgst,
        visibility_sm,
        ceiling_ft,
        altimeter_in_hg: altimeter_in_hg(raw.altim.unwrap_or(0.0)),
        present_weather: raw
            .wx_string
            .as_deref()
            .map(str::trim)
            .filter(|wx| !wx.is_empty())
            .map(str::to_string),
        observation_time: observation_time(raw),
        cloud_layers,
    };

    debug!(
        station = %observation.station,
        category = %observation.flight_category,
        ceiling = ?observation.ceiling_ft,
        visibility = observation.visibility_sm,
        "normalized observation"
    );
    observation
}

/// Normalize a provider TAF.
///
/// Periods whose timestamps cannot be represented are dropped.
#[must_use]
pub fn normalize_taf(raw: &RawTaf) -> Forecast {
    let periods = raw
        .fcsts
        .iter()
        .filter_map(|period| {
            let period_out = normalize_period(period);
            if period_out.is_none() {
                warn!(
                    station = %raw.icao_id,
                    time_from = period.time_from,
                    time_to = period.time_to,
                    "dropping forecast period with invalid time range"
                );
            }
            period_out
        })
        .collect();
    Forecast::new(periods)
}

fn normalize_period(raw: &RawForecastPeriod) -> Option<ForecastPeriod> {
    let time_from = DateTime::from_timestamp(raw.time_from, 0)?;
    let time_to = DateTime::from_timestamp(raw.time_to, 0)?;
    let layers = cloud_layers(&raw.clouds);
    let ceiling_ft = ceiling_from_layers(&layers);
    let visibility_sm = visibility(raw.visib.as_ref());

    Some(ForecastPeriod {
        time_from,
        time_to,
        wind_speed_kt: raw.wspd.unwrap_or(0),
        wind_gust_kt: raw.wgst,
        visibility_sm,
        ceiling_ft,
        flight_category: Some(flight_category(ceiling_ft, visibility_sm)),
        wx_string: raw.wx_string.clone().filter(|wx| !wx.trim().is_empty()),
    })
}

fn cloud_layers(clouds: &[RawCloud]) -> Vec<CloudLayer> {
    clouds
        .iter()
        .filter_map(|cloud| cloud.base.map(|base| CloudLayer::new(cloud.cover.as_str(), base)))
        .collect()
}

fn visibility(raw: Option<&NumberOrText>) -> f64 {
    match raw {
        None => DEFAULT_VISIBILITY_SM,
        Some(NumberOrText::Number(value)) => *value,
        Some(NumberOrText::Text(text)) => parse_visibility(text),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wind_direction(raw: Option<&NumberOrText>) -> WindDirection {
    match raw {
        Some(NumberOrText::Number(deg)) if (0.0..=360.0).contains(deg) => {
            WindDirection::Degrees(deg.round() as u16)
        }
        Some(NumberOrText::Text(text)) => text.parse().unwrap_or_default(),
        _ => WindDirection::default(),
    }
}

fn observation_time(raw: &RawMetar) -> DateTime<Utc> {
    if let Some(time) = raw.obs_time.and_then(|secs| DateTime::from_timestamp(secs, 0)) {
        return time;
    }

    let parsed = raw.report_time.as_deref().and_then(|text| {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    });

    parsed.unwrap_or_else(|| {
        warn!(station = %raw.icao_id, "observation has no usable time, using current time");
        Utc::now()
    })
}
