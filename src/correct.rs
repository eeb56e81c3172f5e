// src/correct.rs
//
// Field corrector: ordered, independent repair rules applied to a parsed
// record with the raw transcription text as context. Every rule degrades
// silently (pattern absent → no-op); the corrector as a whole never fails.
//
// Rule order is fixed and significant: the collector re-split overwrites
// remarks the parser produced, and country normalization runs on whatever
// value is present by the time it fires.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::coords::dms_to_decimal;
use crate::schema::{Record, field};

macro_rules! rule_re {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).unwrap())
        }
    };
}

// Six digits, first in 3-9, as a standalone word.
rule_re!(catalog_re, r"\b[3-9]\d{5}\b");

// Lat then lon, DMS form, separated by non-digits.
rule_re!(
    dms_pair_re,
    r#"(\d{1,3}°\d{1,2}'\d{1,2}(?:\.\d+)?"?[NS])[^\d]+(\d{1,3}°\d{1,2}'\d{1,2}(?:\.\d+)?"?[EW])"#
);

// Signed decimal, up to 3 integer digits, 3+ fractional digits.
rule_re!(decimal_coord_re, r"[-+]?\d{1,3}\.\d{3,}");

// 2-5 digits then optional whitespace then "m"; matched on lowercased text.
rule_re!(elevation_re, r"(\d{2,5})\s?m");

// "Collected by <X> for <Y>" within one line.
rule_re!(collected_for_re, r"Collected by (.+?) for (.+)");

// "No. 1234" / "No 1234" / "#1234".
rule_re!(collector_no_re, r"(?:No\.?|#)\s?(\d+)");

const COUNTRY_ALIASES: [&str; 4] = ["usa", "u.s.a", "united states", ""];
const CANONICAL_COUNTRY: &str = "United States";

/// Apply the full correction pass in its fixed order.
pub fn clean_and_correct(record: &mut Record, raw: &str) {
    rescue_catalog_number(record, raw);
    extract_coordinates(record, raw);
    extract_elevation(record, raw);
    reclassify_substrate(record);
    resplit_collector_remarks(record, raw);
    normalize_country(record);
    backfill_collector_number(record, raw);
}

/// Six-digit accession numbers anywhere in the text are institutional
/// catalog numbers worth carrying alongside the item's own id.
fn rescue_catalog_number(record: &mut Record, raw: &str) {
    if let Some(m) = catalog_re().find(raw) {
        record.insert(
            s!(field::OTHER_CATALOG_NUMBERS),
            format!("NEB Catalog #: {}", m.as_str()),
        );
    }
}

/// Prefer an adjacent DMS pair (lat then lon), converted to decimal and
/// overwriting whatever the parser produced. Without one, fall back to the
/// first two free-standing decimal numbers, taken verbatim.
fn extract_coordinates(record: &mut Record, raw: &str) {
    if let Some(caps) = dms_pair_re().captures(raw) {
        if let Some(lat) = dms_to_decimal(&caps[1]) {
            record.insert(s!(field::VERBATIM_LATITUDE), lat.to_string());
        }
        if let Some(lon) = dms_to_decimal(&caps[2]) {
            record.insert(s!(field::VERBATIM_LONGITUDE), lon.to_string());
        }
        return;
    }

    let mut numbers = decimal_coord_re().find_iter(raw);
    if let (Some(lat), Some(lon)) = (numbers.next(), numbers.next()) {
        record.insert(s!(field::VERBATIM_LATITUDE), s!(lat.as_str()));
        record.insert(s!(field::VERBATIM_LONGITUDE), s!(lon.as_str()));
    }
}

fn extract_elevation(record: &mut Record, raw: &str) {
    let lowered = raw.to_lowercase();
    if let Some(caps) = elevation_re().captures(&lowered) {
        record.insert(s!(field::VERBATIM_ELEVATION), format!("{} m", &caps[1]));
    }
}

/// Habitat text like "On decaying logs" is a substrate statement, not a
/// habitat; move it over wholesale and blank the habitat.
fn reclassify_substrate(record: &mut Record) {
    let moves = record
        .get(field::HABITAT)
        .is_some_and(|h| h.trim().starts_with("On"));
    if moves {
        let habitat = record.insert(s!(field::HABITAT), s!()).unwrap_or_default();
        record.insert(s!(field::SUBSTRATE), habitat);
    }
}

/// "Collected by X for Y" re-splits into collector and remarks, replacing
/// remarks the parser may have produced.
fn resplit_collector_remarks(record: &mut Record, raw: &str) {
    if let Some(caps) = collected_for_re().captures(raw) {
        record.insert(s!(field::COLLECTOR), s!(caps[1].trim()));
        record.insert(
            s!(field::OCCURRENCE_REMARKS),
            format!("for {}", caps[2].trim()),
        );
    }
}

/// US labels write the country a dozen ways or not at all; canonicalize.
fn normalize_country(record: &mut Record) {
    let country = record
        .get(field::COUNTRY)
        .map_or(s!(), |c| c.to_lowercase());
    if COUNTRY_ALIASES.contains(&country.as_str()) {
        record.insert(s!(field::COUNTRY), s!(CANONICAL_COUNTRY));
    }
}

fn backfill_collector_number(record: &mut Record, raw: &str) {
    if record
        .get(field::COLLECTOR_NUMBER)
        .is_some_and(|v| !v.is_empty())
    {
        return;
    }
    if let Some(caps) = collector_no_re().captures(raw) {
        record.insert(s!(field::COLLECTOR_NUMBER), s!(&caps[1]));
    }
}
