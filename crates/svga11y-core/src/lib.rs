//! Core analysis engine for the svga11y SVG accessibility checker.
//!
//! Parses SVG documents into an element tree and evaluates a catalog of
//! accessibility rules against it, producing per-file result sets and
//! aggregated text reports.

pub mod analysis;
pub mod config;
pub mod contrast;
pub mod dom;
pub mod parser;
pub mod report;
pub mod rules;
