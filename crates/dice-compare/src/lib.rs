//! Distribution comparison framework for dice simulations.
//!
//! Provides structured distribution snapshots, diffing with severity
//! classification, and comparison reporting between an empirical (sampled)
//! frequency table and the theoretical one from full enumeration.

pub mod diff;
pub mod report;
pub mod snapshot;
