//! Unit conversions and tolerant parsing of provider values.

use std::sync::OnceLock;

use regex::Regex;

/// Visibility assumed when the provider gives none or gives garbage.
pub const DEFAULT_VISIBILITY_SM: f64 = 10.0;

const HPA_TO_IN_HG: f64 = 0.029_53;

/// Values above this are taken to be hectopascals rather than inches.
const HPA_THRESHOLD: f64 = 100.0;

fn fraction_regex() -> &'static Regex {
    static FRACTION: OnceLock<Regex> = OnceLock::new();
    FRACTION.get_or_init(|| {
        Regex::new(r"^(?:(\d+)\s+)?(\d+)/(\d+)$").expect("visibility fraction pattern is valid")
    })
}

/// Convert a provider altimeter reading to inches of mercury, rounded to
/// two decimals.
#[must_use]
pub fn altimeter_in_hg(raw: f64) -> f64 {
    let in_hg = if raw > HPA_THRESHOLD {
        raw * HPA_TO_IN_HG
    } else {
        raw
    };
    (in_hg * 100.0).round() / 100.0
}

/// Parse a textual visibility in statute miles.
///
/// Accepts plain numbers, plus-suffixed values (`10+`), the `P6SM` and
/// `M1/4SM` forms, and whole or mixed fractions (`1/2`, `1 1/2SM`).
/// Anything else yields [`DEFAULT_VISIBILITY_SM`].
#[must_use]
pub fn parse_visibility(raw: &str) -> f64 {
    let mut text = raw.trim().to_ascii_uppercase();
    if let Some(stripped) = text.strip_suffix("SM") {
        text = stripped.trim_end().to_string();
    }
    let text = text
        .trim_start_matches(['P', 'M'])
        .trim_end_matches('+')
        .trim();

    if let Ok(value) = text.parse::<f64>() {
        return if value.is_finite() {
            value
        } else {
            DEFAULT_VISIBILITY_SM
        };
    }

    fraction_regex()
        .captures(text)
        .and_then(|caps| {
            let whole = caps
                .get(1)
                .map_or(Ok(0.0), |m| m.as_str().parse::<f64>())
                .ok()?;
            let numerator: f64 = caps[2].parse().ok()?;
            let denominator: f64 = caps[3].parse().ok()?;
            (denominator > 0.0).then(|| whole + numerator / denominator)
        })
        .unwrap_or(DEFAULT_VISIBILITY_SM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_altimeter_converts_hectopascals() {
        assert!(close(altimeter_in_hg(1013.25), 29.92));
        assert!(close(altimeter_in_hg(1000.0), 29.53));
    }

    #[test]
    fn test_altimeter_keeps_inches() {
        assert!(close(altimeter_in_hg(30.123), 30.12));
        assert!(close(altimeter_in_hg(0.0), 0.0));
    }

    #[test]
    fn test_parse_visibility_plain_numbers() {
        assert!(close(parse_visibility("7"), 7.0));
        assert!(close(parse_visibility("2.5"), 2.5));
        assert!(close(parse_visibility("3SM"), 3.0));
    }

    #[test]
    fn test_parse_visibility_plus_forms() {
        assert!(close(parse_visibility("10+"), 10.0));
        assert!(close(parse_visibility("6+"), 6.0));
        assert!(close(parse_visibility("P6SM"), 6.0));
    }

    #[test]
    fn test_parse_visibility_fractions() {
        assert!(close(parse_visibility("1/2"), 0.5));
        assert!(close(parse_visibility("1 1/2SM"), 1.5));
        assert!(close(parse_visibility("M1/4SM"), 0.25));
    }

    #[test]
    fn test_parse_visibility_garbage_defaults() {
        assert!(close(parse_visibility(""), DEFAULT_VISIBILITY_SM));
        assert!(close(parse_visibility("unknown"), DEFAULT_VISIBILITY_SM));
        assert!(close(parse_visibility("1/0"), DEFAULT_VISIBILITY_SM));
    }

    #[test]
    fn test_parse_visibility_non_finite_defaults() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", "Infinity"] {
            let vis = parse_visibility(raw);
            assert!(close(vis, DEFAULT_VISIBILITY_SM), "{raw} parsed as {vis}");
        }
    }
}
