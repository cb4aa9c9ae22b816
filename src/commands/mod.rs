//! CLI commands for malha

pub mod classify;
pub mod cycle;
pub mod dispatch;
pub mod metrics;
pub mod path;
pub mod rank;
pub mod tree;
