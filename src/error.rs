use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapyterError {
    /// Bit-matrix value outside `[0, 2^bits)`.
    #[error("value {value} out of range for {bits} bits")]
    Range { value: String, bits: u32 },

    /// Text that is not a decimal or `0x` hex integer.
    #[error("invalid bit-matrix value '{0}'")]
    InvalidValue(String),

    /// Every combination in the pool has been handed out.
    #[error("no shapes left: all {capacity} combinations are assigned")]
    Exhausted { capacity: usize },

    /// Similarity requested between matrices of different widths.
    #[error("bit width mismatch: {left} vs {right}")]
    WidthMismatch { left: u32, right: u32 },

    /// Similarity of zero-width matrices, which would divide by zero.
    #[error("similarity is undefined for zero-width matrices")]
    EmptyWidth,

    /// Invalid palette or other configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
