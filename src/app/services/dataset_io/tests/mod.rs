//! Tests for the tabular I/O layer

pub mod reader_tests;
