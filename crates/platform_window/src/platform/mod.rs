//! Platform backends
//!
//! One module per desktop OS. Each provides a window type implementing
//! [`crate::window::GenericWindow`] and the application context that owns
//! its windows.

pub mod mac;
