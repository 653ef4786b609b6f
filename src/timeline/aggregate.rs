use indexmap::IndexMap;

use crate::foundation::core::Year;
use crate::timeline::model::{Entry, Frame, Record, Timeline};

impl Timeline {
    /// Group records into a timeline of per-year frames.
    ///
    /// Single pass over the input. The resulting frame order is the order in
    /// which each year value was first seen, and entries within a frame keep
    /// record order. Re-running on the same record sequence yields a
    /// structurally identical timeline.
    #[tracing::instrument(skip(records), fields(records = records.len()))]
    pub fn from_records(records: &[Record]) -> Timeline {
        let mut by_year: IndexMap<Year, Vec<Entry>> = IndexMap::new();

        for record in records {
            by_year.entry(record.year).or_default().push(Entry {
                country: record.country.clone(),
                population: record.population,
            });
        }

        let frames = by_year
            .into_iter()
            .map(|(year, entries)| Frame { year, entries })
            .collect::<Vec<_>>();

        tracing::debug!(frames = frames.len(), "aggregated timeline");
        Timeline::from_frames(frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/aggregate.rs"]
mod tests;
