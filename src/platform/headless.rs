use std::{thread, time};

use crate::error::HostError;

use super::{WindowClient, WindowConfig, WindowTrait};

/// Runs the tick cadence without putting anything on screen.
///
/// Without a tick limit it runs until the client asks to stop.
pub struct HeadlessWindow {
    width: u32,
    height: u32,
    tick_nanos: u128,
    max_ticks: Option<u64>,

    presented: u64,
    last_frame: Vec<u8>,
}

impl HeadlessWindow {
    /// Number of frames handed to the (absent) display.
    #[inline]
    pub fn presented(&self) -> u64 {
        self.presented
    }
    /// The last frame presented, as packed RGB.
    #[inline]
    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }

    fn present(&mut self, pixels: &[u8]) {
        debug_assert_eq!(pixels.len(), (self.width * self.height) as usize * 3);
        self.last_frame.clear();
        self.last_frame.extend_from_slice(pixels);
        self.presented += 1;
    }
}

impl WindowTrait for HeadlessWindow {
    fn new(config: &WindowConfig) -> Result<Self, HostError> {
        log::debug!(
            "headless display {}x{} at {} ticks/s",
            config.width,
            config.height,
            config.tick_rate
        );
        Ok(Self {
            width: config.width,
            height: config.height,
            tick_nanos: config.tick_nanos(),
            max_ticks: config.max_ticks,

            presented: 0,
            last_frame: Vec::new(),
        })
    }

    fn window_dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn run<T>(&mut self, client: &mut T)
    where
        T: WindowClient,
    {
        let instant = time::Instant::now();
        let mut next_frame_time = instant.elapsed().as_nanos() + self.tick_nanos;

        self.present(client.get_pixels());

        loop {
            if self.max_ticks.map_or(false, |max| client.ticks() >= max) {
                return;
            }

            let cur_time = instant.elapsed().as_nanos();
            if cur_time < next_frame_time {
                thread::sleep(time::Duration::from_nanos(
                    (next_frame_time - cur_time) as u64,
                ));
            }
            next_frame_time += self.tick_nanos;

            if !client.frame() {
                return;
            }
            self.present(client.get_pixels());
        }
    }
}
