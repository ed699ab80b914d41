//! Vulkan surface plumbing
//!
//! The window layer never talks to a driver directly. Surface creation goes
//! through [`SurfaceFactory`], whose production implementation forwards the
//! native handles to `ash-window`. Tests plug in their own factory.

use std::ffi::{c_char, CStr};

use ash::vk;
use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

use super::{WindowError, WindowResult};

/// Instance extensions a macOS window needs for presentation
///
/// This is a fixed list and does not reflect what the loader actually
/// supports at runtime.
pub static MACOS_INSTANCE_EXTENSIONS: [&CStr; 2] = [c"VK_KHR_surface", c"VK_MVK_macos_surface"];

/// Native handles handed over by the OS windowing toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeHandles {
    /// Handle of the native window (NSWindow/NSView on macOS)
    pub window: RawWindowHandle,
    /// Handle of the display connection
    pub display: RawDisplayHandle,
}

impl NativeHandles {
    /// Bundle a window handle with its display handle
    pub const fn new(window: RawWindowHandle, display: RawDisplayHandle) -> Self {
        Self { window, display }
    }
}

/// Creates a presentation surface for a native window
pub trait SurfaceFactory {
    /// Create a `VkSurfaceKHR` bound to the given native window
    fn create_surface(&self, handles: &NativeHandles) -> WindowResult<vk::SurfaceKHR>;
}

/// Surface factory backed by a live `ash` instance
pub struct AshSurfaceFactory<'a> {
    entry: &'a ash::Entry,
    instance: &'a ash::Instance,
}

impl<'a> AshSurfaceFactory<'a> {
    /// Borrow the loader entry and the instance the surface will belong to
    ///
    /// The instance must have been created with the window's required
    /// instance extensions enabled.
    pub const fn new(entry: &'a ash::Entry, instance: &'a ash::Instance) -> Self {
        Self { entry, instance }
    }
}

impl SurfaceFactory for AshSurfaceFactory<'_> {
    fn create_surface(&self, handles: &NativeHandles) -> WindowResult<vk::SurfaceKHR> {
        // SAFETY: the handles were supplied by the native toolkit for a window
        // that is still alive (destroy() drops them), and the instance outlives
        // this borrow.
        let result = unsafe {
            ash_window::create_surface(
                self.entry,
                self.instance,
                handles.display,
                handles.window,
                None,
            )
        };

        result.map_err(|err| {
            log::error!("Failed to create Vulkan surface: {:?}", err);
            WindowError::SurfaceCreation(err)
        })
    }
}

/// Convert an extension list into pointers for `vk::InstanceCreateInfo`
pub fn extension_name_ptrs(names: &[&'static CStr]) -> Vec<*const c_char> {
    names.iter().map(|name| name.as_ptr()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_extensions_are_fixed() {
        assert_eq!(MACOS_INSTANCE_EXTENSIONS.len(), 2);
        assert_eq!(MACOS_INSTANCE_EXTENSIONS[0].to_str().unwrap(), "VK_KHR_surface");
        assert_eq!(MACOS_INSTANCE_EXTENSIONS[1].to_str().unwrap(), "VK_MVK_macos_surface");
    }

    #[test]
    fn test_extension_ptrs_point_at_names() {
        let ptrs = extension_name_ptrs(&MACOS_INSTANCE_EXTENSIONS);
        assert_eq!(ptrs.len(), 2);
        assert_eq!(ptrs[1], MACOS_INSTANCE_EXTENSIONS[1].as_ptr());
    }
}
