use thiserror::Error;

/// Top-level error type for the waypath crate.
#[derive(Debug, Error)]
pub enum WaypathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to curve discretization.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`WaypathError`].
pub type Result<T> = std::result::Result<T, WaypathError>;

/// Rejects a zero sample count for the named parameter.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn require_nonzero(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter,
            value: value as f64,
            min: 1.0,
            max: f64::INFINITY,
        }
        .into());
    }
    Ok(())
}
