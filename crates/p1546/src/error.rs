use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised when a query falls outside the validity domain of the model.
///
/// These are input-contract violations: the computation aborts with no
/// partial result. Out-of-range-but-tolerated inputs (frequency above the
/// tabulated ceiling, distance beyond 1000 km, effective height above
/// 3000 m) extrapolate instead and never produce an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A scalar input left the model's defined operating envelope.
    #[error("{name} = {value} is outside the limits")]
    OutOfRange {
        name: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },

    /// The path has no positive total length.
    #[error("total path length must be positive, got {0} km")]
    EmptyPath(f64),

    /// The low-antenna sea-path method is undefined below 1 m.
    #[error("h1 = {0} m is below 1 m, undefined for sea paths with h1 < 10 m")]
    SeaAntennaTooLow(f64),

    /// Receiving/mobile antenna below the model's minimum height.
    #[error("receiving antenna height h2 = {value} m is below {min} m when adjacent to {side}")]
    ReceiverTooLow {
        value: f64,
        min: f64,
        side: &'static str,
    },

    /// Parallel field-strength and length slices of differing lengths.
    #[error("field-strength and path-length vectors must be of the same length")]
    LengthMismatch,
}

impl ModelError {
    pub(crate) fn out_of_range(name: &'static str, value: f64, low: f64, high: f64) -> Self {
        ModelError::OutOfRange {
            name,
            value,
            low,
            high,
        }
    }
}

/// Check `value` against an inclusive range, mirroring the reference limits.
pub(crate) fn limit(name: &'static str, value: f64, low: f64, high: f64) -> Result<()> {
    if value < low || value > high {
        return Err(ModelError::out_of_range(name, value, low, high));
    }
    Ok(())
}
