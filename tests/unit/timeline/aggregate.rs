use super::*;

use crate::foundation::core::FrameIndex;

fn record(year: i32, country: &str, population: f64) -> Record {
    Record {
        year: Year(year),
        country: country.to_string(),
        population,
    }
}

#[test]
fn groups_records_under_their_year() {
    let records = vec![
        record(1950, "A", 10.0),
        record(1950, "B", 20.0),
        record(1951, "A", 15.0),
    ];
    let timeline = Timeline::from_records(&records);

    assert_eq!(timeline.len(), 2);
    let f0 = timeline.frame(FrameIndex(0)).unwrap();
    assert_eq!(f0.year, Year(1950));
    assert_eq!(f0.entries.len(), 2);
    assert_eq!(f0.entries[0].country, "A");
    assert_eq!(f0.entries[1].country, "B");
    assert_eq!(f0.total_population(), 30.0);

    let f1 = timeline.frame(FrameIndex(1)).unwrap();
    assert_eq!(f1.year, Year(1951));
    assert_eq!(f1.entries.len(), 1);
    assert_eq!(f1.entries[0].population, 15.0);
}

#[test]
fn frame_order_is_first_occurrence_not_sorted() {
    let records = vec![
        record(1990, "A", 1.0),
        record(1950, "B", 2.0),
        record(1990, "C", 3.0),
        record(1970, "D", 4.0),
    ];
    let timeline = Timeline::from_records(&records);
    let years: Vec<Year> = timeline.years().collect();
    assert_eq!(years, vec![Year(1990), Year(1950), Year(1970)]);
}

#[test]
fn duplicate_year_country_pairs_are_appended_not_merged() {
    let records = vec![record(1950, "A", 10.0), record(1950, "A", 99.0)];
    let timeline = Timeline::from_records(&records);
    let frame = timeline.frame(FrameIndex(0)).unwrap();
    assert_eq!(frame.entries.len(), 2);
    assert_eq!(frame.entries[0].population, 10.0);
    assert_eq!(frame.entries[1].population, 99.0);
}

#[test]
fn empty_records_yield_empty_timeline() {
    let timeline = Timeline::from_records(&[]);
    assert!(timeline.is_empty());
    assert_eq!(timeline.len(), 0);
    assert!(timeline.frame(FrameIndex(0)).is_none());
}

#[test]
fn nan_population_propagates_into_total() {
    let records = vec![record(1950, "A", 10.0), record(1950, "B", f64::NAN)];
    let timeline = Timeline::from_records(&records);
    let frame = timeline.frame(FrameIndex(0)).unwrap();
    assert_eq!(frame.entries.len(), 2);
    assert!(frame.total_population().is_nan());
}

#[test]
fn reaggregation_is_structurally_identical() {
    let records = vec![
        record(1950, "A", 10.0),
        record(1950, "B", 20.0),
        record(1951, "A", 15.0),
    ];
    assert_eq!(Timeline::from_records(&records), Timeline::from_records(&records));
}
