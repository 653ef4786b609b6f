use crate::foundation::core::{FrameIndex, TickRate, Year};
use crate::foundation::error::RacelineResult;
use crate::palette::assign::Color;

/// One render-ready bar: label, value, persistent color, icon reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    pub color: Color,
    pub icon: &'static str,
}

/// Everything a renderer needs for one tick, rows in frame entry order.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TickFrame {
    pub index: FrameIndex,
    pub year: Year,
    pub rows: Vec<BarRow>,
    /// Sum over the whole frame (before selection filtering); NaN if any
    /// entry coerced to NaN.
    pub total_population: f64,
    /// Loop fraction in `(0, 1]`.
    pub progress: f64,
}

/// Configuration provided to a [`RaceSink`] at the start of a run.
#[derive(Clone, Copy, Debug)]
pub struct SinkConfig {
    pub tick_rate: TickRate,
    /// Timeline length at run start (0 means the run will signal no data).
    pub frames: usize,
}

/// Sink contract for consuming tick output in emission order.
///
/// Ordering contract: `push_frame` is called once per tick, in the order the
/// session emits frames. An empty timeline produces a single `no_data` call
/// instead of any `push_frame`.
pub trait RaceSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> RacelineResult<()>;
    /// Push one tick's frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &TickFrame) -> RacelineResult<()>;
    /// Explicit empty-dataset signal; terminal for the run.
    fn no_data(&mut self) -> RacelineResult<()>;
    /// Called once after the last frame (or the no-data signal).
    fn end(&mut self) -> RacelineResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, TickFrame)>,
    saw_no_data: bool,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, TickFrame)] {
        &self.frames
    }

    pub fn saw_no_data(&self) -> bool {
        self.saw_no_data
    }

    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl RaceSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> RacelineResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.saw_no_data = false;
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &TickFrame) -> RacelineResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn no_data(&mut self) -> RacelineResult<()> {
        self.saw_no_data = true;
        Ok(())
    }

    fn end(&mut self) -> RacelineResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/sink.rs"]
mod tests;
