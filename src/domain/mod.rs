// ============================================================
// DOMAIN LAYER
// ============================================================
// Core types and value objects for tag extraction
// No I/O, no async, no external dependencies

pub mod error;
pub mod sheet;
pub mod tag;
