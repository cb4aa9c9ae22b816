//! Malha Core Library
//!
//! Graph data structure and algorithm suite for analyzing real-world
//! relationship networks (neighborhood adjacency, fight pairings).

pub mod dataset;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod metrics;
pub mod report;
