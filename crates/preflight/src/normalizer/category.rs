//! Flight category and ceiling resolution.

use crate::weather::{CloudLayer, FlightCategory};

const LIFR_CEILING_FT: i32 = 500;
const IFR_CEILING_FT: i32 = 1000;
const MVFR_CEILING_FT: i32 = 3000;

const LIFR_VISIBILITY_SM: f64 = 1.0;
const IFR_VISIBILITY_SM: f64 = 3.0;
const MVFR_VISIBILITY_SM: f64 = 5.0;

/// Resolve the FAA flight category from ceiling and visibility.
///
/// `None` for the ceiling means no broken or overcast layer. Visibility of
/// exactly 5 SM is still MVFR.
#[must_use]
pub fn flight_category(ceiling_ft: Option<i32>, visibility_sm: f64) -> FlightCategory {
    let below = |limit: i32| ceiling_ft.is_some_and(|ft| ft < limit);

    if below(LIFR_CEILING_FT) || visibility_sm < LIFR_VISIBILITY_SM {
        FlightCategory::Lifr
    } else if below(IFR_CEILING_FT) || visibility_sm < IFR_VISIBILITY_SM {
        FlightCategory::Ifr
    } else if below(MVFR_CEILING_FT) || visibility_sm <= MVFR_VISIBILITY_SM {
        FlightCategory::Mvfr
    } else {
        FlightCategory::Vfr
    }
}

/// The lowest base among broken and overcast layers.
#[must_use]
pub fn ceiling_from_layers(layers: &[CloudLayer]) -> Option<i32> {
    layers
        .iter()
        .filter(|layer| layer.cover.is_ceiling())
        .map(|layer| layer.base_ft)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_category_breakpoints() {
        assert_eq!(flight_category(None, 10.0), FlightCategory::Vfr);
        assert_eq!(flight_category(Some(3000), 6.0), FlightCategory::Vfr);
        assert_eq!(flight_category(Some(2999), 10.0), FlightCategory::Mvfr);
        assert_eq!(flight_category(None, 5.0), FlightCategory::Mvfr);
        assert_eq!(flight_category(Some(999), 10.0), FlightCategory::Ifr);
        assert_eq!(flight_category(None, 2.5), FlightCategory::Ifr);
        assert_eq!(flight_category(Some(499), 10.0), FlightCategory::Lifr);
        assert_eq!(flight_category(None, 0.75), FlightCategory::Lifr);
    }

    #[test]
    fn test_flight_category_worst_of_both() {
        assert_eq!(flight_category(Some(4000), 0.5), FlightCategory::Lifr);
        assert_eq!(flight_category(Some(700), 10.0), FlightCategory::Ifr);
    }

    #[test]
    fn test_ceiling_ignores_scattered_layers() {
        let layers = vec![
            CloudLayer::new("FEW", 800),
            CloudLayer::new("SCT", 1500),
            CloudLayer::new("BKN", 4500),
            CloudLayer::new("OVC", 2500),
        ];
        assert_eq!(ceiling_from_layers(&layers), Some(2500));
    }

    #[test]
    fn test_no_ceiling_without_broken_or_overcast() {
        let layers = vec![CloudLayer::new("FEW", 800), CloudLayer::new("SCT", 1500)];
        assert_eq!(ceiling_from_layers(&layers), None);
        assert_eq!(ceiling_from_layers(&[]), None);
    }
}
