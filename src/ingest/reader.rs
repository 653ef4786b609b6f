use csv::{ReaderBuilder, StringRecord};

use crate::foundation::core::Year;
use crate::foundation::error::{RacelineError, RacelineResult};
use crate::timeline::model::Record;

/// Resolved positions of the three required columns.
///
/// Resolution is header-driven and case-insensitive; column order in the
/// file does not matter and extra columns are ignored.
#[derive(Clone, Copy, Debug)]
struct Columns {
    year: usize,
    country: usize,
    population: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> RacelineResult<Self> {
        let year = find_header_index(headers, "year");
        let country = find_header_index(headers, "country");
        let population = find_header_index(headers, "population");

        let missing: Vec<&str> = [
            ("year", year),
            ("country", country),
            ("population", population),
        ]
        .iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(RacelineError::malformed_input(format!(
                "header row missing required column(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            year: year.unwrap_or_default(),
            country: country.unwrap_or_default(),
            population: population.unwrap_or_default(),
        })
    }
}

fn find_header_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Parse raw delimited text into records.
///
/// Pure transform over the supplied text; no IO happens here. Rows missing
/// `year` or `country` are dropped (counted, logged at debug). Truncated
/// trailing rows are dropped silently. A `population` field that fails
/// numeric coercion becomes NaN and is kept.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_records(text: &str) -> RacelineResult<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| RacelineError::malformed_input(format!("unreadable header row: {e}")))?;
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(RacelineError::malformed_input("header row is absent"));
    }
    let columns = Columns::from_headers(headers)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };

        // A row shorter than the rightmost required column is truncated.
        let (Some(year_raw), Some(country_raw), Some(population_raw)) = (
            row.get(columns.year),
            row.get(columns.country),
            row.get(columns.population),
        ) else {
            dropped += 1;
            continue;
        };

        let Ok(year) = year_raw.parse::<i32>() else {
            dropped += 1;
            continue;
        };
        if country_raw.is_empty() {
            dropped += 1;
            continue;
        }

        records.push(Record {
            year: Year(year),
            country: country_raw.to_string(),
            population: coerce_population(population_raw),
        });
    }

    if dropped > 0 {
        tracing::debug!(dropped, "dropped rows missing year/country");
    }
    Ok(records)
}

/// Numeric coercion for the population field: unparseable input becomes NaN
/// rather than rejecting the row. Thousands separators are accepted.
fn coerce_population(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '_').collect();
    cleaned.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/reader.rs"]
mod tests;
