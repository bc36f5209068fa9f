//! rhx - Reversed-group hex formatter
//!
//! This library provides the escape decoding, ASCII encoding and hex grouping
//! shared by the rhx CLI tool and its tests.

pub mod encoding;
pub mod escape;
pub mod format;
