use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures raised at configuration, serialization and backend boundaries.
///
/// Degenerate data (empty input, zero totals, single days) never errors.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid chart style: {0}")]
    InvalidStyle(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
