//! Read-only workout and tip tables.

pub mod plans;
mod running;
mod strength;
pub mod tips;

pub use plans::{levels, plan};
pub use tips::TipCategory;
