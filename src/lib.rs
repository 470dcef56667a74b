pub mod clock;
pub mod display;
pub mod driver;
pub mod error;
pub mod platform;
pub mod scene;
pub mod surface;

pub use clock::{position_on_circle, random_color, RandomSource};
pub use display::DisplaySet;
pub use driver::{DriverState, FrameDriver};
pub use error::{DriverError, HostError};
pub use surface::{Color, Rect, Surface, CUBE_SCREEN_SIZE};

use platform::{Window, WindowClient, WindowConfig, WindowEvent, WindowTrait};

/// Ticks per second the cubes are animated at unless configured otherwise.
pub const DEFAULT_TICK_RATE: u32 = 20;

pub struct HostBuilder {
    cubes: usize,
    surface_width: u32,
    surface_height: u32,
    tick_rate: u32,
    max_ticks: Option<u64>,

    gap: u32,
    gap_color: Color,

    title: String,
}

impl HostBuilder {
    pub fn with_cubes(cubes: usize) -> Self {
        Self {
            cubes,
            ..Default::default()
        }
    }

    #[inline]
    pub fn cubes(mut self, cubes: usize) -> Self {
        self.cubes = cubes;
        self
    }

    #[inline]
    pub fn surface_dimensions(mut self, width: u32, height: u32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    #[inline]
    pub fn tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Stops the run after `max_ticks` ticks.
    #[inline]
    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    #[inline]
    pub fn gap(mut self, gap: u32, gap_color: Color) -> Self {
        self.gap = gap;
        self.gap_color = gap_color;
        self
    }

    #[inline]
    pub fn title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn build(self) -> Host {
        Host::new(self)
    }
}

impl Default for HostBuilder {
    fn default() -> Self {
        Self {
            cubes: 3,
            surface_width: CUBE_SCREEN_SIZE,
            surface_height: CUBE_SCREEN_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            max_ticks: None,

            gap: 8,
            gap_color: Color::new(24, 24, 24),

            title: String::from("Cubes"),
        }
    }
}

/// Owns the cubes and drives them: setup once, then ticks at the configured
/// rate until the window closes or the tick limit is reached.
pub struct Host {
    displays: DisplaySet,
    driver: FrameDriver,

    tick_rate: u32,
    max_ticks: Option<u64>,
    gap: u32,
    gap_color: Color,
    title: String,

    pixels: Vec<Color>,
}

impl Host {
    fn new(builder: HostBuilder) -> Self {
        let HostBuilder {
            cubes,
            surface_width,
            surface_height,
            tick_rate,
            max_ticks,
            gap,
            gap_color,
            title,
        } = builder;

        Self {
            displays: DisplaySet::new(cubes, surface_width, surface_height),
            driver: FrameDriver::new(),

            tick_rate,
            max_ticks,
            gap,
            gap_color,
            title,

            pixels: Vec::new(),
        }
    }

    #[inline]
    pub fn displays(&self) -> &DisplaySet {
        &self.displays
    }
    #[inline]
    pub fn current_tick(&self) -> u64 {
        self.driver.current_tick()
    }

    /// Runs `setup` on every cube, then calls `handle_tick` on every cube once
    /// per tick. Returns the number of the last tick run.
    pub fn run<S, F>(&mut self, setup: S, handle_tick: F) -> Result<u64, HostError>
    where
        S: FnMut(&mut Surface),
        F: FnMut(&mut Surface, u64),
    {
        let mut window = self.open::<Window, S>(setup)?;
        self.run_in(&mut window, handle_tick);
        Ok(self.driver.current_tick())
    }

    /// Runs setup and opens a window of type `W` sized for the composited
    /// cubes.
    pub fn open<W, S>(&mut self, setup: S) -> Result<W, HostError>
    where
        W: WindowTrait,
        S: FnMut(&mut Surface),
    {
        self.driver.run_setup(&mut self.displays, setup)?;

        let (width, height) = self
            .displays
            .composite(self.gap, self.gap_color, &mut self.pixels);

        W::new(&WindowConfig {
            width,
            height,
            title: self.title.clone(),
            tick_rate: self.tick_rate,
            max_ticks: self.max_ticks,
        })
    }

    pub fn run_in<W, F>(&mut self, window: &mut W, handle_tick: F)
    where
        W: WindowTrait,
        F: FnMut(&mut Surface, u64),
    {
        struct HostRunner<'a, F>
        where
            F: FnMut(&mut Surface, u64),
        {
            host: &'a mut Host,
            handle_tick: F,

            will_exit: bool,
        }

        impl<'a, F> WindowClient for HostRunner<'a, F>
        where
            F: FnMut(&mut Surface, u64),
        {
            fn handle_event(&mut self, event: WindowEvent) {
                match event {
                    WindowEvent::FocusChanged { focused } => {
                        log::debug!("window focus changed: {focused}")
                    }
                    WindowEvent::WindowClose => self.will_exit = true,
                }
            }

            fn frame(&mut self) -> bool {
                if self.will_exit {
                    return false;
                }

                let host = &mut *self.host;
                match host.driver.run_tick(&mut host.displays, &mut self.handle_tick) {
                    Ok(_) => {
                        host.displays
                            .composite(host.gap, host.gap_color, &mut host.pixels);
                        true
                    }
                    Err(err) => {
                        log::error!("{err}");
                        false
                    }
                }
            }

            fn ticks(&self) -> u64 {
                self.host.driver.current_tick()
            }

            fn get_pixels(&self) -> &[u8] {
                bytemuck::cast_slice(&self.host.pixels)
            }
        }

        log::info!(
            "driving {} cubes at {} ticks/s",
            self.displays.len(),
            self.tick_rate
        );
        window.run(&mut HostRunner {
            host: self,
            handle_tick,

            will_exit: false,
        });
        log::info!("stopped after {} ticks", self.driver.current_tick());
    }
}
