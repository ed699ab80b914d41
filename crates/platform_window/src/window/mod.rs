//! Window management subsystem
//!
//! The window layer is split the same way as the renderer's backends:
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │   Engine render / input layers  │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ GenericWindow   │ ← Platform-neutral trait (generic.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ mac::MacWindow        │ ← Concrete backend
//!   └───────────┬───────────┘
//!               │ Surfaces via
//!      ┌────────▼────────┐
//!      │ SurfaceFactory  │ ← ash / ash-window (surface.rs)
//!      └─────────────────┘
//! ```

pub mod generic;
pub mod surface;
pub mod types;

use ash::vk;
use thiserror::Error;

pub use generic::GenericWindow;
pub use surface::{AshSurfaceFactory, NativeHandles, SurfaceFactory};
pub use types::{WindowMode, WindowRect, WindowState};

/// Window management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The toolkit never attached a native window
    #[error("No native window handle attached")]
    NoNativeHandle,

    /// Operation on a window after `destroy()`
    #[error("Window has been destroyed")]
    Destroyed,

    /// The Vulkan driver refused to create a surface
    #[error("Vulkan surface creation failed: {0:?}")]
    SurfaceCreation(vk::Result),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
