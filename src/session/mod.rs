//! Session-oriented playback driver.

pub mod race_session;
