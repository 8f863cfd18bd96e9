use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the checked collision surface and the driver.
///
/// The raw formula in [`crate::core::collision::post_collision_velocities`] never
/// returns an error; these variants only come out of the validating entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid mass or velocity handed to a validating constructor.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Numerical issue, e.g. masses that sum to zero.
    #[error("numerical error: {0}")]
    MathError(String),

    /// Failure writing results to stdout.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
