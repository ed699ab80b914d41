//! Backend-agnostic window trait
//!
//! This is the interface the engine's rendering and input layers program
//! against. Each platform provides one implementation; the engine only ever
//! sees `dyn GenericWindow` plus the downcasting hooks.

use std::ffi::CStr;

use ash::vk;
use raw_window_handle::RawWindowHandle;

use super::surface::SurfaceFactory;
use super::types::{WindowMode, WindowRect};
use super::WindowResult;

/// Window interface implemented by every platform backend
///
/// # Design Philosophy
/// - **Bookkeeping only**: implementations track geometry and state; anything
///   that needs a real window-system call is left to the native toolkit
/// - **No events**: geometry and state changes are not broadcast; callers
///   query after they mutate
/// - **Independent flags**: visible, minimized and maximized are separate bits
///   and no combination is rejected
///
/// # Thread Safety
/// Not `Send`: native handles are raw pointers and window-system calls must
/// happen on the main thread anyway.
pub trait GenericWindow {
    /// Current geometry
    fn rect(&self) -> WindowRect;

    /// Current title text
    fn title(&self) -> &str;

    /// Current display mode
    fn window_mode(&self) -> WindowMode;

    /// DPI scale factor of the monitor under a point
    fn dpi_scale_factor_at_point(&self, x: f32, y: f32) -> f32;

    /// DPI scale factor of this window
    fn dpi_scale_factor(&self) -> f32;

    /// Override the DPI scale factor of this window
    fn set_dpi_scale_factor(&mut self, value: f32);

    /// Vulkan instance extensions needed to present to this window
    fn required_instance_extensions(&self) -> &'static [&'static CStr];

    /// Create a presentation surface for this window
    ///
    /// The window never talks to the driver itself. It hands its native
    /// handles to `factory`, which owns the Vulkan entry and instance. The
    /// instance must have been created with
    /// [`required_instance_extensions`](Self::required_instance_extensions)
    /// enabled, and the caller owns the returned surface and must destroy it
    /// before the window's native handles go away.
    ///
    /// # Errors
    /// - [`WindowError::Destroyed`](super::WindowError::Destroyed) after
    ///   [`destroy`](Self::destroy)
    /// - [`WindowError::NoNativeHandle`](super::WindowError::NoNativeHandle)
    ///   when the toolkit never attached a window
    /// - whatever the factory reports, typically
    ///   [`WindowError::SurfaceCreation`](super::WindowError::SurfaceCreation)
    fn create_vk_surface(&self, factory: &dyn SurfaceFactory) -> WindowResult<vk::SurfaceKHR>;

    /// Native window handle, if the toolkit has provided one
    fn os_window_handle(&self) -> Option<RawWindowHandle>;

    /// Width over height
    fn aspect_ratio(&self) -> f32;

    /// Move and resize in one call
    fn reshape(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Bounds the window would cover in fullscreen
    fn fullscreen_info(&self) -> Option<WindowRect>;

    /// Move without resizing
    fn move_to(&mut self, x: i32, y: i32);

    /// Raise above other windows
    fn bring_to_front(&mut self, force: bool);

    /// Tear the window down
    ///
    /// Unregisters the window from its owning application, hides it, and
    /// drops the native handles and the application back-reference. Surface
    /// creation fails afterwards. Calling it again does nothing.
    ///
    /// Other setters keep working on a destroyed window; they only touch
    /// bookkeeping.
    fn destroy(&mut self);

    /// Iconify the window
    fn minimize(&mut self);

    /// Zoom the window
    fn maximize(&mut self);

    /// Undo minimize/maximize
    fn restore(&mut self);

    /// Make the window visible
    fn show(&mut self);

    /// Make the window invisible
    fn hide(&mut self);

    /// Switch display mode
    ///
    /// Entering a fullscreen mode from `Windowed` saves the current geometry
    /// as the restored geometry (a maximized window already saved it) and
    /// resizes to the display bounds when the owning application knows them.
    /// Moving between the two fullscreen flavours keeps that saved geometry.
    ///
    /// Returning to `Windowed` moves back to the restored geometry and clears
    /// the maximized flag, since that geometry is the pre-maximize one.
    /// Setting the current mode again is a no-op.
    fn set_window_mode(&mut self, mode: WindowMode);

    /// Whether the maximized flag is set
    fn is_maximized(&self) -> bool;

    /// Whether the minimized flag is set
    fn is_minimized(&self) -> bool;

    /// Whether the window is shown
    fn is_visible(&self) -> bool;

    /// Geometry the window returns to from maximized or fullscreen
    ///
    /// While maximized or in a fullscreen mode this is the geometry saved on
    /// the way in. Otherwise the window is already restored and the current
    /// [`rect`](Self::rect) is returned.
    fn restored_dimensions(&self) -> WindowRect;

    /// Give keyboard focus to the window
    fn set_window_focus(&mut self);

    /// Window opacity in `[0, 1]`
    fn set_opacity(&mut self, opacity: f32);

    /// Enable or disable input
    fn enable(&mut self, enable: bool);

    /// Whether a screen point lies strictly inside the window
    fn is_point_in_window(&self, x: i32, y: i32) -> bool;

    /// Thickness of the native border
    fn window_border_size(&self) -> i32;

    /// Height of the native title bar
    fn window_title_bar_size(&self) -> i32;

    /// Whether this is the OS foreground window
    fn is_foreground_window(&self) -> bool;

    /// Replace the title text
    fn set_text(&mut self, text: &str);

    /// Get access to the concrete type for downcasting
    fn as_any(&self) -> &dyn std::any::Any;

    /// Get mutable access to the concrete type for downcasting
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
