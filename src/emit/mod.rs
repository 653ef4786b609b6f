//! Output boundary: per-tick rows and the sink contract renderers implement.

pub mod sink;
