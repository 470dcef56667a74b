use thiserror::Error;

/// Lifecycle misuse of a [`crate::FrameDriver`]. Nothing is drawn when one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("tick requested before setup ran")]
    NotInitialized,
    #[error("setup already ran")]
    AlreadyRunning,
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("failed to open window: {0}")]
    Window(String),

    #[error("nothing to display: the host has no cubes")]
    NoCubes,
}
