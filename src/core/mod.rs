pub mod export;
pub mod logging;
pub mod phase;
pub mod status;
pub mod store;
pub mod tips;
