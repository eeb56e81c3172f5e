// src/core/coords.rs
//
// DMS (degrees-minutes-seconds) coordinate handling.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::sanitize::normalize_quote_marks;

/// `40°45'30.5"N` — degrees, minutes, seconds with optional fraction,
/// optional closing quote, compass direction. Anchored at the start only,
/// so trailing text after the direction letter is tolerated.
fn dms_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(\d{1,3})°(\d{1,2})'(\d{1,2}(?:\.\d+)?)"?([NSEW])"#).unwrap()
    })
}

/// Convert one DMS coordinate string to decimal degrees, rounded to six
/// decimal places. South and west come out negative. Returns `None` when
/// the string is not DMS-shaped; callers leave the target field unset.
pub fn dms_to_decimal(dms: &str) -> Option<f64> {
    let normalized = normalize_quote_marks(dms);
    let caps = dms_re().captures(normalized.trim())?;

    let degrees: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;

    let mut decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if matches!(&caps[4], "S" | "W") {
        decimal = -decimal;
    }
    Some(round6(decimal))
}

/// Round to 6 decimal places — sub-centimeter on the ground, and the
/// precision the decimal-degree columns are defined at.
pub fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Inverse used only to exercise round-trips. Seconds at 4 decimals is
    // well inside the 1e-6 degree tolerance.
    fn decimal_to_dms(value: f64, pos: char, neg: char) -> String {
        let dir = if value < 0.0 { neg } else { pos };
        let abs = value.abs();
        let degrees = abs.floor();
        let minutes = ((abs - degrees) * 60.0).floor();
        let seconds = (abs - degrees - minutes / 60.0) * 3600.0;
        format!("{}°{}'{:.4}\"{}", degrees as u32, minutes as u32, seconds, dir)
    }

    #[test]
    fn converts_plain_dms() {
        assert_eq!(dms_to_decimal("40°45'30\"N"), Some(40.758333));
        assert_eq!(dms_to_decimal("96°40'15\"W"), Some(-96.670833));
    }

    #[test]
    fn converts_fractional_seconds_and_missing_quote() {
        assert_eq!(dms_to_decimal("12°30'7.2\"S"), Some(-12.502));
        // closing quote is optional
        assert_eq!(dms_to_decimal("12°30'7S"), Some(-12.501944));
    }

    #[test]
    fn normalizes_typographic_quotes() {
        assert_eq!(
            dms_to_decimal("40\u{b0}45\u{2019}30\u{2033}N"),
            dms_to_decimal("40°45'30\"N")
        );
    }

    #[test]
    fn trailing_text_tolerated_leading_not() {
        assert_eq!(dms_to_decimal("40°45'30\"N elev 1200 m"), Some(40.758333));
        assert_eq!(dms_to_decimal("lat 40°45'30\"N"), None);
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(dms_to_decimal(""), None);
        assert_eq!(dms_to_decimal("40.758333"), None);
        assert_eq!(dms_to_decimal("40°45'N"), None);
        assert_eq!(dms_to_decimal("40°45'30\"Q"), None);
    }

    #[test]
    fn round_trips_within_tolerance() {
        for &x in &[40.758333, 0.5, 12.502, 89.999722] {
            let n = dms_to_decimal(&decimal_to_dms(x, 'N', 'S')).unwrap();
            assert!((n - x).abs() < 1e-6, "N round-trip {x} -> {n}");
            let e = dms_to_decimal(&decimal_to_dms(x, 'E', 'W')).unwrap();
            assert!((e - x).abs() < 1e-6, "E round-trip {x} -> {e}");
        }
        // southern/western values come back negated
        let s = dms_to_decimal(&decimal_to_dms(-40.758333, 'N', 'S')).unwrap();
        assert!((s + 40.758333).abs() < 1e-6);
        let w = dms_to_decimal(&decimal_to_dms(-96.670833, 'E', 'W')).unwrap();
        assert!((w + 96.670833).abs() < 1e-6);
    }
}
