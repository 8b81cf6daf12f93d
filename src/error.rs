use thiserror::Error;

/// The wire-compatible error taxonomy of the original sampler.
///
/// `Repeat` and `Delete` are reserved for the advection layer that sits on
/// top of this crate: this core never constructs them, but keeps them in
/// the enum so a caller that passes values through unchanged (e.g. an FFI
/// boundary) can round-trip the full original taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    Repeat = 1,
    Delete = 2,
    Error = 3,
    OutOfBounds = 4,
    TimeExtrapolation = 5,
}

/// The *flowsample* error messaging enumeration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    #[error("point ({x}, {y}, {z}) at t={t} is out of bounds")]
    OutOfBounds { x: f32, y: f32, z: f32, t: f64 },

    #[error("search for the host cell did not converge within {iterations} iterations")]
    SearchNotConverged { iterations: u32 },

    #[error("time {t} is outside [{t0}, {t1}] and extrapolation is not allowed")]
    TimeExtrapolation { t: f64, t0: f64, t1: f64 },

    #[error("unknown grid code")]
    UnknownGrid,

    #[error("unknown interpolation method")]
    UnknownInterpMethod,

    #[error("{0} is NaN")]
    NotANumber(&'static str),

    #[error("malformed grid: {0}")]
    MalformedGrid(&'static str),

    #[error("malformed field: {0}")]
    MalformedField(&'static str),
}

impl SamplerError {
    /// The original numeric `ErrorCode` this error corresponds to.
    pub fn code(&self) -> ErrorCode {
        match self {
            SamplerError::OutOfBounds { .. }
            | SamplerError::SearchNotConverged { .. }
            | SamplerError::NotANumber(_) => ErrorCode::OutOfBounds,
            SamplerError::TimeExtrapolation { .. } => ErrorCode::TimeExtrapolation,
            SamplerError::UnknownGrid
            | SamplerError::UnknownInterpMethod
            | SamplerError::MalformedGrid(_)
            | SamplerError::MalformedField(_) => ErrorCode::Error,
        }
    }
}
