//! # Platform Window
//!
//! Per-platform window shim for the engine's Vulkan renderer.
//!
//! ## Features
//!
//! - **Generic window interface**: the [`GenericWindow`] trait the engine's
//!   rendering and input layers program against
//! - **macOS window**: [`MacWindow`], geometry and state bookkeeping plus the
//!   Vulkan surface entry point
//! - **Application context**: [`MacApplication`] owns the live windows and the
//!   display bounds
//! - **Configuration**: TOML/RON window and display settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platform_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlatformConfig::default();
//!     let app = MacApplication::from_config(&config);
//!     let window = MacApplication::make_window_from_config(&app, &config.window);
//!
//!     window.borrow_mut().move_to(200, 150);
//!     assert!(window.borrow().is_visible());
//!
//!     MacApplication::destroy_all(&app);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod platform;
pub mod window;

pub use config::{Config, ConfigError, DisplayConfig, PlatformConfig, WindowConfig};
pub use platform::mac::{MacApplication, MacWindow};
pub use window::{
    AshSurfaceFactory, GenericWindow, NativeHandles, SurfaceFactory, WindowError, WindowMode,
    WindowRect, WindowResult, WindowState,
};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, DisplayConfig, PlatformConfig, WindowConfig},
        platform::mac::{MacApplication, MacWindow},
        window::{
            GenericWindow, NativeHandles, SurfaceFactory, WindowError, WindowMode, WindowRect,
            WindowResult,
        },
    };
}
