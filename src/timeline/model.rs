use crate::foundation::core::{FrameIndex, Year};

/// One parsed input row.
///
/// `population` may be NaN when the source field failed numeric coercion;
/// NaN entries flow through aggregation and totals unchanged.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub year: Year,
    pub country: String,
    pub population: f64,
}

/// One country/population pair inside a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub country: String,
    pub population: f64,
}

/// One year's complete entry list, the atomic unit of playback.
///
/// Entries keep input order. Duplicate countries within a year are kept as
/// separate entries (the aggregator does not merge).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub year: Year,
    pub entries: Vec<Entry>,
}

impl Frame {
    /// Sum of all entry populations. NaN entries make the total NaN.
    pub fn total_population(&self) -> f64 {
        self.entries.iter().map(|e| e.population).sum()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.country.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered sequence of frames derived from one load of the dataset.
///
/// Frame order is first-occurrence order of the year values in the input,
/// not chronological order. Immutable once built; a reload replaces it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    frames: Vec<Frame>,
}

impl Timeline {
    pub(crate) fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: FrameIndex) -> Option<&Frame> {
        self.frames.get(index.0)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.frames.iter().map(|f| f.year)
    }
}
