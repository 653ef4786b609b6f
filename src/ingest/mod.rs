//! CSV ingest: raw delimited text in, typed records out.

pub mod reader;
