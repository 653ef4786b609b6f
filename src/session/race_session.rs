use crate::assets::icons::icon_for;
use crate::emit::sink::{BarRow, RaceSink, SinkConfig, TickFrame};
use crate::foundation::core::TickRate;
use crate::foundation::error::RacelineResult;
use crate::palette::assign::{ColorSource, Palette, RandomColorSource};
use crate::playback::clock::PlaybackClock;
use crate::selection::filter::Selection;
use crate::timeline::model::{Record, Timeline};

#[derive(Clone, Copy, Debug)]
pub struct RaceSessionOpts {
    pub tick_rate: TickRate,
}

impl Default for RaceSessionOpts {
    fn default() -> Self {
        Self {
            tick_rate: TickRate::default(),
        }
    }
}

/// Result of one tick.
#[derive(Clone, Debug)]
pub enum TickOutput {
    /// Timeline is empty; renderers show their no-data state.
    NoData,
    Frame(TickFrame),
}

/// Move-only reload token. Holding one means a reload is in flight; it must
/// be spent on `complete_reload` or `abort_reload`.
#[derive(Debug)]
pub struct ReloadTicket {
    _priv: (),
}

/// Owns all playback state and advances it one tick at a time.
///
/// State flows through explicit fields instead of ambient globals: the
/// timeline, the monotone color palette, the selection set, and the looping
/// clock each stay independently testable, with this session as the one
/// imperative driver at the boundary.
///
/// `tick` samples the frame under the cursor, then advances, so a full loop
/// of N ticks emits every frame exactly once, frame 0 first.
pub struct RaceSession {
    timeline: Timeline,
    palette: Palette,
    selection: Selection,
    clock: PlaybackClock,
    source: Box<dyn ColorSource + Send>,
    opts: RaceSessionOpts,
    reload_in_flight: bool,
}

impl RaceSession {
    pub fn new(
        timeline: Timeline,
        source: Box<dyn ColorSource + Send>,
        opts: RaceSessionOpts,
    ) -> Self {
        let mut clock = PlaybackClock::new();
        clock.sync(timeline.len());
        Self {
            timeline,
            palette: Palette::new(),
            selection: Selection::new(),
            clock,
            source,
            opts,
            reload_in_flight: false,
        }
    }

    /// Session with the reference random color strategy.
    pub fn with_random_colors(timeline: Timeline, opts: RaceSessionOpts) -> Self {
        Self::new(
            timeline,
            Box::new(RandomColorSource::from_entropy()),
            opts,
        )
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn opts(&self) -> RaceSessionOpts {
        self.opts
    }

    /// Flip a country's membership in the selection.
    ///
    /// Before the selection is seeded the set is empty, so a toggle inserts
    /// rather than removes; call [`seed_selection`](Self::seed_selection)
    /// first when a toggle must hide a country from the very first frame.
    pub fn toggle(&mut self, country: &str) -> bool {
        self.selection.toggle(country)
    }

    /// Seed the selection from the frame under the cursor without producing
    /// output or advancing the clock.
    ///
    /// `tick` does this implicitly; doing it earlier lets toggles land
    /// before any frame is emitted. No-op once seeded or while the timeline
    /// is empty.
    pub fn seed_selection(&mut self) {
        if let Some(frame) = self.timeline.frame(self.clock.cursor()) {
            self.selection.observe(frame);
        }
    }

    /// Produce the current frame's output and advance the cursor.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self) -> TickOutput {
        let Some(frame) = self.timeline.frame(self.clock.cursor()) else {
            return TickOutput::NoData;
        };

        let added = self.palette.extend_for_frame(frame, self.source.as_mut());
        if added > 0 {
            tracing::debug!(added, "palette grew");
        }
        self.selection.observe(frame);

        let mut rows = Vec::new();
        for entry in &frame.entries {
            if !self.selection.is_active(&entry.country) {
                continue;
            }
            if let Some(color) = self.palette.color_of(&entry.country) {
                rows.push(BarRow {
                    label: entry.country.clone(),
                    value: entry.population,
                    color: color.clone(),
                    icon: icon_for(&entry.country),
                });
            }
        }

        let out = TickFrame {
            index: self.clock.cursor(),
            year: frame.year,
            rows,
            total_population: frame.total_population(),
            progress: self.clock.progress(),
        };

        self.clock.tick();
        TickOutput::Frame(out)
    }

    /// Drive a bounded number of ticks into a sink.
    ///
    /// An empty timeline signals `no_data` once instead of pushing frames.
    pub fn run(&mut self, ticks: usize, sink: &mut dyn RaceSink) -> RacelineResult<()> {
        sink.begin(SinkConfig {
            tick_rate: self.opts.tick_rate,
            frames: self.timeline.len(),
        })?;

        if self.timeline.is_empty() {
            sink.no_data()?;
            return sink.end();
        }

        for _ in 0..ticks {
            match self.tick() {
                TickOutput::Frame(frame) => sink.push_frame(frame.index, &frame)?,
                TickOutput::NoData => {
                    sink.no_data()?;
                    break;
                }
            }
        }
        sink.end()
    }

    /// Start a reload. Returns `None` if one is already in flight
    /// (ignore-while-in-flight single-flight guard).
    pub fn begin_reload(&mut self) -> Option<ReloadTicket> {
        if self.reload_in_flight {
            tracing::debug!("reload already in flight, ignoring");
            return None;
        }
        self.reload_in_flight = true;
        Some(ReloadTicket { _priv: () })
    }

    /// Install freshly loaded records, replacing the timeline.
    ///
    /// The clock restarts at frame 0 and the selection re-seeds from the new
    /// data; assigned colors survive the reload.
    pub fn complete_reload(&mut self, ticket: ReloadTicket, records: &[Record]) {
        let _ = ticket;
        self.timeline = Timeline::from_records(records);
        self.selection.reset();
        self.clock = PlaybackClock::new();
        self.clock.sync(self.timeline.len());
        self.reload_in_flight = false;
    }

    /// Give up on an in-flight reload (e.g. the load failed), keeping the
    /// current timeline.
    pub fn abort_reload(&mut self, ticket: ReloadTicket) {
        let _ = ticket;
        self.reload_in_flight = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/race_session.rs"]
mod tests;
