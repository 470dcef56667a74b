use crate::{display::DisplaySet, error::DriverError, surface::Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
}

/// Runs the setup pass once, then one tick pass per call, committing every
/// surface after each pass.
#[derive(Debug)]
pub struct FrameDriver {
    state: DriverState,
    current_tick: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Uninitialized,
            current_tick: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }
    #[inline]
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn run_setup<F>(
        &mut self,
        displays: &mut DisplaySet,
        mut setup: F,
    ) -> Result<(), DriverError>
    where
        F: FnMut(&mut Surface),
    {
        if self.state == DriverState::Running {
            return Err(DriverError::AlreadyRunning);
        }

        log::debug!("running setup on {} surfaces", displays.len());
        displays.for_each(|surface, _| {
            setup(surface);
            surface.commit();
        });
        self.state = DriverState::Running;

        Ok(())
    }

    /// Advances the tick counter and draws one frame. Returns the new tick.
    pub fn run_tick<F>(
        &mut self,
        displays: &mut DisplaySet,
        mut tick: F,
    ) -> Result<u64, DriverError>
    where
        F: FnMut(&mut Surface, u64),
    {
        if self.state != DriverState::Running {
            return Err(DriverError::NotInitialized);
        }

        self.current_tick = self.current_tick.wrapping_add(1);
        let current_tick = self.current_tick;

        log::trace!("tick {current_tick}");
        displays.for_each(|surface, _| {
            tick(surface, current_tick);
            surface.commit();
        });

        Ok(current_tick)
    }
}
