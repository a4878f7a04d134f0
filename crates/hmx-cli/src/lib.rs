//! CLI library components for the HMX header-matrix viewer.

pub mod logging;
