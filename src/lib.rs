//! Period and mood log with cycle-phase derivation and phase-adapted
//! workout plans.

pub mod content;
pub mod core;
pub mod db;
pub mod diagnostics;
pub mod models;
pub mod output;
