//! Plain-language phrases for coded present weather.

/// Weather codes and their phrases, in the order phrases are reported.
const PHRASES: [(&str, &str); 15] = [
    ("RA", "rain"),
    ("SN", "snow"),
    ("FG", "fog"),
    ("BR", "mist"),
    ("HZ", "haze"),
    ("TS", "thunderstorms"),
    ("FZ", "freezing precipitation"),
    ("FZRA", "freezing rain"),
    ("FZSN", "freezing snow"),
    ("GR", "hail"),
    ("SQ", "squalls"),
    ("FC", "funnel cloud"),
    ("DZ", "drizzle"),
    ("FZDZ", "freezing drizzle"),
    ("SH", "showers"),
];

/// Phrases for every code contained anywhere in `codes`.
///
/// Matching is by substring, so `FZDZ` yields freezing precipitation,
/// drizzle and freezing drizzle.
#[must_use]
pub fn describe(codes: &str) -> Vec<&'static str> {
    let upper = codes.to_ascii_uppercase();
    PHRASES
        .iter()
        .filter(|(code, _)| upper.contains(code))
        .map(|(_, phrase)| *phrase)
        .collect()
}
