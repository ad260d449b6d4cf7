//! The ordered rule stages of a briefing.
//!
//! Every stage runs on every evaluation, in table order, against a context
//! owned by that single evaluation. Stages append hazards and summary
//! sentences and may latch one of two severity flags. Latches only ever go
//! from `false` to `true`.

use chrono::{DateTime, Duration, Utc};

use super::phrases;
use super::summary::{BriefingSummary, Recommendation};
use crate::weather::{CloudCover, CurrentObservation, FlightCategory, Forecast};

const STRONG_GUST_KT: u32 = 35;
const GUSTY_KT: u32 = 25;
const WIDE_GUST_SPREAD_KT: i64 = 15;
const GUST_SPREAD_KT: i64 = 10;
const STRONG_SUSTAINED_KT: u32 = 25;

const VERY_LOW_VISIBILITY_SM: f64 = 1.0;
const LOW_VISIBILITY_SM: f64 = 3.0;

const FOG_FORMING_SPREAD_C: f64 = 1.0;
const FOG_LIKELY_SPREAD_C: f64 = 2.0;

const LIFR_CEILING_FT: i32 = 500;
const IFR_CEILING_FT: i32 = 1000;
const MVFR_CEILING_FT: i32 = 3000;

const LOW_ALTIMETER_IN_HG: f64 = 29.80;

/// Read-only inputs shared by every stage.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StageInput<'a> {
    pub observation: &'a CurrentObservation,
    pub forecast: Option<&'a Forecast>,
    pub now: DateTime<Utc>,
    pub forecast_window: Duration,
}

impl StageInput<'_> {
    fn window_hours(&self) -> i64 {
        self.forecast_window.num_hours()
    }
}

/// Per-evaluation accumulator.
#[derive(Debug, Default)]
pub(crate) struct BriefingContext {
    hazards: Vec<String>,
    sentences: Vec<String>,
    no_go: bool,
    high_caution: bool,
    recommendation: Option<Recommendation>,
}

impl BriefingContext {
    fn hazard(&mut self, text: impl Into<String>) {
        self.hazards.push(text.into());
    }

    fn say(&mut self, sentence: impl Into<String>) {
        self.sentences.push(sentence.into());
    }

    fn latch_no_go(&mut self) {
        self.no_go = true;
    }

    fn latch_high_caution(&mut self) {
        self.high_caution = true;
    }

    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }

    pub fn no_go(&self) -> bool {
        self.no_go
    }

    pub fn high_caution(&self) -> bool {
        self.high_caution
    }

    pub fn finish(self) -> BriefingSummary {
        // Set by the final stage; fall back to the conservative answer.
        let recommendation = self
            .recommendation
            .unwrap_or(Recommendation::Unfavorable);
        BriefingSummary::new(&self.sentences, self.hazards, recommendation)
    }
}

pub(crate) type Stage = fn(&StageInput<'_>, &mut BriefingContext);

/// All stages, in evaluation order.
pub(crate) const STAGES: [(&str, Stage); 10] = [
    ("critical_weather", critical_weather),
    ("flight_category", flight_category),
    ("wind", wind),
    ("visibility", visibility),
    ("fog_risk", fog_risk),
    ("ceiling", ceiling),
    ("present_weather", present_weather),
    ("altimeter", altimeter),
    ("forecast_trend", forecast_trend),
    ("recommendation", recommendation),
];

fn critical_weather(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let Some(wx) = input.observation.present_weather_codes() else {
        return;
    };

    if wx.contains("TS") {
        ctx.hazard("THUNDERSTORMS PRESENT OR IN VICINITY - DO NOT FLY");
        ctx.say("WARNING: Thunderstorms are reported at or near the field.");
        ctx.latch_no_go();
    }
    if wx.contains("FZRA") || wx.contains("FZDZ") {
        ctx.hazard("FREEZING PRECIPITATION reported - severe icing risk - DO NOT FLY");
        ctx.latch_no_go();
    }
    if wx.contains("FC") || wx.contains("SQ") {
        ctx.hazard("FUNNEL CLOUD or SQUALLS reported - DO NOT FLY");
        ctx.latch_no_go();
    }
}

fn flight_category(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    if ctx.no_go {
        return;
    }

    let sentence = match &input.observation.flight_category {
        FlightCategory::Vfr => {
            "VFR conditions - ceilings and visibility are good for visual flight.".to_string()
        }
        FlightCategory::Mvfr => {
            "Marginal VFR conditions - reduced ceilings or visibility.".to_string()
        }
        FlightCategory::Ifr => {
            "IFR conditions - instrument rating and current IFR proficiency required.".to_string()
        }
        FlightCategory::Lifr => {
            "Low IFR conditions - ceilings and visibility are very poor.".to_string()
        }
        FlightCategory::Unknown(code) => format!("Current flight category: {code}."),
    };
    ctx.say(sentence);
}

fn wind(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let obs = input.observation;
    let speed = obs.wind_speed_kt;

    if speed == 0 {
        ctx.say("Winds are calm.");
        return;
    }

    let direction = if obs.wind_direction.is_variable() {
        "variable".to_string()
    } else {
        format!("from {} degrees", obs.wind_direction)
    };
    let mut sentence = format!("Winds {direction} at {speed} kts");

    if let Some(gust) = obs.wind_gust_kt {
        sentence.push_str(&format!(", gusting {gust} kts"));
        let spread = i64::from(gust) - i64::from(speed);

        if gust > STRONG_GUST_KT {
            ctx.hazard(format!(
                "STRONG GUSTS to {gust} kts - exceeds most light aircraft limits"
            ));
            ctx.latch_high_caution();
        } else if gust > GUSTY_KT || spread > WIDE_GUST_SPREAD_KT {
            ctx.hazard(format!(
                "Gusty winds to {gust} kts ({spread} kt gust spread) - expect turbulence and difficult landings"
            ));
        } else if spread > GUST_SPREAD_KT {
            ctx.hazard(format!(
                "Gust spread of {spread} kts - expect mechanical turbulence near the ground"
            ));
        }
    } else if speed > STRONG_SUSTAINED_KT {
        ctx.hazard(format!(
            "Strong sustained winds at {speed} kts - check crosswind component"
        ));
    }

    sentence.push('.');
    ctx.say(sentence);
}

fn visibility(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let obs = input.observation;
    let vis = obs.visibility_sm;

    if vis < VERY_LOW_VISIBILITY_SM {
        ctx.hazard(format!(
            "VERY LOW VISIBILITY {vis} SM - less than 1 statute mile"
        ));
        if obs.flight_category == FlightCategory::Lifr {
            ctx.latch_no_go();
        }
    } else if vis < LOW_VISIBILITY_SM {
        ctx.hazard(format!(
            "Reduced visibility {vis} SM - less than 3 statute miles"
        ));
    }
}

fn fog_risk(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let spread = input.observation.temp_dewpoint_spread();

    if spread <= FOG_FORMING_SPREAD_C {
        ctx.hazard(format!(
            "Temp/dewpoint spread {spread:.1} C - FOG FORMING NOW or imminent"
        ));
        ctx.latch_high_caution();
    } else if spread <= FOG_LIKELY_SPREAD_C {
        ctx.hazard(format!(
            "Temp/dewpoint spread {spread:.1} C - fog or low clouds may form"
        ));
    }
}

fn ceiling(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let obs = input.observation;

    match obs.ceiling_ft {
        None => ctx.say("Skies are clear to scattered."),
        Some(ft) if ft < LIFR_CEILING_FT => {
            ctx.hazard(format!(
                "EXTREMELY LOW CEILING at {ft} ft AGL - LIFR conditions"
            ));
            ctx.latch_no_go();
        }
        Some(ft) if ft < IFR_CEILING_FT => {
            ctx.hazard(format!("Low ceiling at {ft} ft AGL - IFR conditions"));
            ctx.latch_high_caution();
        }
        Some(ft) if ft < MVFR_CEILING_FT => {
            let layer = match obs.layer_at(ft) {
                Some(layer) if layer.cover == CloudCover::Ovc => "overcast",
                _ => "broken",
            };
            ctx.say(format!("Ceiling {layer} at {ft} ft AGL."));
        }
        Some(ft) => ctx.say(format!("Good ceiling at {ft} ft AGL.")),
    }
}

fn present_weather(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    if ctx.no_go {
        return;
    }
    let Some(wx) = input.observation.present_weather_codes() else {
        return;
    };

    let described = phrases::describe(&wx);
    if !described.is_empty() {
        ctx.say(format!(
            "Reporting {} in the vicinity.",
            described.join(", ")
        ));
    }

    if wx.contains("RA") || wx.contains("SN") {
        let raw = input
            .observation
            .present_weather
            .as_deref()
            .unwrap_or_default()
            .trim();
        ctx.hazard(format!("Active precipitation: {raw}"));
    }
}

fn altimeter(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let altimeter = input.observation.altimeter_in_hg;

    if altimeter < LOW_ALTIMETER_IN_HG {
        ctx.hazard(format!(
            "Low altimeter {altimeter:.2} inHg - low pressure system, check density altitude"
        ));
    }
}

fn forecast_trend(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let Some(forecast) = input.forecast.filter(|forecast| !forecast.is_empty()) else {
        return;
    };

    let cutoff = input.now + input.forecast_window;
    let mut considered = 0_usize;
    let mut worst = FlightCategory::Vfr;
    let mut thunderstorms = false;
    let mut freezing = false;

    for period in forecast.starting_by(cutoff) {
        considered += 1;
        if period.category_rank() < worst.rank() {
            if let Some(category) = &period.flight_category {
                worst = category.clone();
            }
        }
        thunderstorms |= period.weather_contains("TS");
        freezing |= period.weather_contains("FZ");
    }

    if considered == 0 {
        return;
    }

    let hours = input.window_hours();
    let current = &input.observation.flight_category;
    let deteriorating = worst.rank() < current.rank();

    if thunderstorms {
        ctx.hazard(format!(
            "Thunderstorms forecast within the next {hours} hours"
        ));
    } else if freezing {
        ctx.hazard(format!(
            "Freezing precipitation forecast within the next {hours} hours"
        ));
    } else if deteriorating {
        ctx.hazard(format!(
            "Conditions forecast to deteriorate to {worst} within the next {hours} hours"
        ));
    }

    if deteriorating {
        ctx.say(format!(
            "Forecast: conditions expected to worsen from {current} to {worst} within the next {hours} hours."
        ));
        ctx.latch_high_caution();
    } else if worst.rank() > current.rank() {
        ctx.say(format!(
            "Forecast: conditions expected to improve from {current} to {worst} within the next {hours} hours."
        ));
    } else {
        ctx.say(format!(
            "Forecast: conditions expected to remain {current} through the next {hours} hours."
        ));
    }
}

fn recommendation(input: &StageInput<'_>, ctx: &mut BriefingContext) {
    let category = &input.observation.flight_category;

    let (recommendation, sentence) = if ctx.no_go {
        (
            Recommendation::Unfavorable,
            "RECOMMENDATION: DO NOT FLY - one or more conditions make this flight unsafe.",
        )
    } else if ctx.high_caution || category.is_instrument() {
        (
            Recommendation::Unfavorable,
            "RECOMMENDATION: Unfavorable - stay on ground unless proficient and current for these conditions.",
        )
    } else if *category == FlightCategory::Mvfr || ctx.hazards.len() >= 2 {
        (
            Recommendation::Caution,
            "RECOMMENDATION: Marginal - proceed with caution and review every hazard before departure.",
        )
    } else if ctx.hazards.len() == 1 {
        (
            Recommendation::Caution,
            "RECOMMENDATION: Conditions are acceptable but stay alert for the noted hazard.",
        )
    } else {
        (
            Recommendation::Favorable,
            "RECOMMENDATION: Favorable - good conditions for flight.",
        )
    };

    ctx.say(sentence);
    ctx.recommendation = Some(recommendation);
}
