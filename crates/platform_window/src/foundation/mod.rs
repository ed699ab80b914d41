//! Foundation module - Core utilities used throughout the window layer

pub mod logging;
