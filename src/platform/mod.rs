use crate::error::HostError;

/// Everything a window needs to know to present the cubes.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub tick_rate: u32,
    pub max_ticks: Option<u64>,
}

impl WindowConfig {
    pub fn tick_nanos(&self) -> u128 {
        1_000_000_000 / self.tick_rate.max(1) as u128
    }
}

pub trait WindowTrait: Sized {
    fn new(config: &WindowConfig) -> Result<Self, HostError>;

    fn window_dimensions(&self) -> (u32, u32);

    fn run<T>(&mut self, client: &mut T)
    where
        T: WindowClient;
}

pub trait WindowClient: Sized {
    fn handle_event(&mut self, event: WindowEvent);
    /// Runs one tick. Returning `false` ends the run.
    fn frame(&mut self) -> bool;
    fn ticks(&self) -> u64;
    /// Packed RGB pixels of the composited cube screens.
    fn get_pixels(&self) -> &[u8];
}

#[derive(Debug)]
pub enum WindowEvent {
    FocusChanged { focused: bool },
    WindowClose,
}

pub(crate) fn calculate_fit_radii(
    width: f32,
    height: f32,
    container_width: f32,
    container_height: f32,
    margin: f32,
) -> (f32, f32) {
    let margin_units = 2.0 * margin * f32::min(container_width, container_height);
    let remaining_space = (
        container_width - margin_units,
        container_height - margin_units,
    );
    let scaled = (remaining_space.0 / width, remaining_space.1 / height);
    let fit_scale_fac = f32::min(scaled.0, scaled.1);
    (width * fit_scale_fac, height * fit_scale_fac)
}

/// Window size that shows a `width` x `height` image as large as possible
/// on a monitor of the given size, keeping its aspect ratio.
#[cfg_attr(not(feature = "window"), allow(dead_code))]
pub(crate) fn get_window_size(
    width: u32,
    height: u32,
    monitor_width: u32,
    monitor_height: u32,
) -> (f32, f32) {
    calculate_fit_radii(
        width as f32,
        height as f32,
        monitor_width as f32,
        monitor_height as f32,
        0.2,
    )
}

/// Bounding box, in normalized device coordinates, of the largest
/// aspect-preserving rectangle fitting the window with a small margin.
#[cfg_attr(not(feature = "window"), allow(dead_code))]
pub(crate) fn calculate_bounding_box(
    target_width: u32,
    target_height: u32,
    window_width: u32,
    window_height: u32,
) -> (f32, f32, f32, f32) {
    let (window_width, window_height) = (window_width as f32, window_height as f32);
    let window_radii = calculate_fit_radii(
        target_width as f32,
        target_height as f32,
        window_width,
        window_height,
        0.1,
    );
    let radii = (
        window_radii.0 / window_width,
        window_radii.1 / window_height,
    );
    (-radii.0, -radii.1, radii.0, radii.1)
}

mod headless;
pub use headless::HeadlessWindow;

#[cfg(feature = "window")]
mod native;

#[cfg(feature = "window")]
pub type Window = native::GLFWWindow;
#[cfg(not(feature = "window"))]
pub type Window = HeadlessWindow;
