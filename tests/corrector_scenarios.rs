// tests/corrector_scenarios.rs
//
// Whole-record behavior of the parse → correct pipeline: the draft
// mapping a parser produced, the raw text it came from, and what the
// corrected record must look like afterwards.

use herb_extract::correct::clean_and_correct;
use herb_extract::parse::parse_structured_response;
use herb_extract::schema::{Record, field};

fn record(pairs: &[(&str, &str)]) -> Record {
    let mut r = Record::new();
    for (k, v) in pairs {
        r.insert((*k).to_string(), (*v).to_string());
    }
    r
}

#[test]
fn collector_resplit_discards_parsed_remarks() {
    let raw = "Collected by Jane Doe for the Nebraska survey";
    let mut rec = record(&[(field::OCCURRENCE_REMARKS, "misc")]);
    clean_and_correct(&mut rec, raw);

    assert_eq!(rec[field::COLLECTOR], "Jane Doe");
    assert_eq!(rec[field::OCCURRENCE_REMARKS], "for the Nebraska survey");
}

#[test]
fn dms_pair_lands_as_decimal_degrees() {
    let raw = "Near Lincoln, 40°45'30\"N 96°40'15\"W, open prairie remnant";
    let mut rec = record(&[]);
    clean_and_correct(&mut rec, raw);

    let lat: f64 = rec[field::VERBATIM_LATITUDE].parse().unwrap();
    let lon: f64 = rec[field::VERBATIM_LONGITUDE].parse().unwrap();
    assert!((lat - 40.758333).abs() < 1e-6);
    assert!((lon + 96.670833).abs() < 1e-6);
}

#[test]
fn six_digit_catalog_number_rescued() {
    let mut rec = record(&[]);
    clean_and_correct(&mut rec, "sheet 412345, det. 1998");
    assert_eq!(rec[field::OTHER_CATALOG_NUMBERS], "NEB Catalog #: 412345");
}

#[test]
fn empty_country_becomes_united_states() {
    let mut rec = record(&[(field::COUNTRY, "")]);
    clean_and_correct(&mut rec, "");
    assert_eq!(rec[field::COUNTRY], "United States");
}

#[test]
fn collector_number_backfilled_from_raw_text() {
    let mut rec = record(&[]);
    clean_and_correct(&mut rec, "No. 1234 collected near creek");
    assert_eq!(rec[field::COLLECTOR_NUMBER], "1234");
}

#[test]
fn country_normalization_is_idempotent() {
    let mut once = record(&[(field::COUNTRY, "u.s.a")]);
    clean_and_correct(&mut once, "");
    let mut twice = once.clone();
    clean_and_correct(&mut twice, "");
    assert_eq!(once, twice);
}

#[test]
fn habitat_kept_when_not_on_prefixed() {
    let mut rec = record(&[(field::HABITAT, "Shaded ravine"), (field::SUBSTRATE, "limestone")]);
    clean_and_correct(&mut rec, "nothing relevant");
    assert_eq!(rec[field::HABITAT], "Shaded ravine");
    assert_eq!(rec[field::SUBSTRATE], "limestone");
}

#[test]
fn decimal_fallback_strings_survive_unvalidated() {
    // Values outside coordinate range are kept verbatim; the corrector
    // does not validate, only extracts.
    let mut rec = record(&[]);
    clean_and_correct(&mut rec, "readings 999.1234 then 888.5678");
    assert_eq!(rec[field::VERBATIM_LATITUDE], "999.1234");
    assert_eq!(rec[field::VERBATIM_LONGITUDE], "888.5678");
}

#[test]
fn unparsable_transcription_still_yields_a_correctable_record() {
    let raw = "Illegible label. Collected by A. Smith for the county flora. No. 88";
    let mut rec = parse_structured_response(raw);
    assert_eq!(rec[field::OCCURRENCE_REMARKS], raw);

    clean_and_correct(&mut rec, raw);
    assert_eq!(rec[field::COLLECTOR], "A. Smith");
    assert_eq!(rec[field::OCCURRENCE_REMARKS], "for the county flora. No. 88");
    assert_eq!(rec[field::COLLECTOR_NUMBER], "88");
}

#[test]
fn rule_order_lets_later_rules_see_earlier_writes() {
    // Habitat moves to substrate first; the collector re-split then
    // rewrites remarks independently of it.
    let raw = "Collected by B. Ruth for dune stabilization study";
    let mut rec = record(&[
        (field::HABITAT, "On loose sand"),
        (field::OCCURRENCE_REMARKS, "from parser"),
    ]);
    clean_and_correct(&mut rec, raw);

    assert_eq!(rec[field::HABITAT], "");
    assert_eq!(rec[field::SUBSTRATE], "On loose sand");
    assert_eq!(rec[field::OCCURRENCE_REMARKS], "for dune stabilization study");
}
