//! Raceline turns a static population dataset into a bar-chart-race
//! timeline: parse tabular records, group them into per-year frames, and
//! loop a fixed-cadence playback clock over the result while per-country
//! colors stay stable and a user-toggleable selection filters the output.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: raw delimited text -> `Vec<Record>` ([`parse_records`])
//! 2. **Aggregate**: records -> [`Timeline`] of per-year [`Frame`]s in
//!    first-occurrence year order ([`Timeline::from_records`])
//! 3. **Play**: a [`RaceSession`] advances the looping [`PlaybackClock`],
//!    enriches the current frame with persistent colors and the active
//!    selection, and emits render-ready [`TickFrame`]s into a [`RaceSink`]
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No hidden globals**: timeline, palette, selection, and cursor are
//!   explicit owned state behind one driver ([`RaceSession`]).
//! - **No IO in the core**: ingest is a pure transform over supplied text;
//!   file access lives in the binary.
//! - **Rendering is external**: consumers implement [`RaceSink`] and receive
//!   ordered `{label, value, color, icon}` rows once per tick.
#![forbid(unsafe_code)]

pub mod assets;
pub mod emit;
pub mod foundation;
pub mod ingest;
pub mod palette;
pub mod playback;
pub mod selection;
pub mod session;
pub mod timeline;

pub use assets::icons::{FALLBACK_ICON, icon_for};
pub use emit::sink::{BarRow, InMemorySink, RaceSink, SinkConfig, TickFrame};
pub use foundation::core::{DEFAULT_TICK_MILLIS, FrameIndex, TickRate, Year};
pub use foundation::error::{RacelineError, RacelineResult};
pub use ingest::reader::parse_records;
pub use palette::assign::{Color, ColorSource, CyclingColorSource, Palette, RandomColorSource};
pub use playback::clock::{ClockState, PlaybackClock};
pub use selection::filter::Selection;
pub use session::race_session::{RaceSession, RaceSessionOpts, ReloadTicket, TickOutput};
pub use timeline::model::{Entry, Frame, Record, Timeline};
