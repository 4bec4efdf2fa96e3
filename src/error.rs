use thiserror::Error;

/// Errors produced by the raster engine and the surrounding editor shell
#[derive(Debug, Error)]
pub enum Error {
    /// A picture shape that is empty, too large to address, or does not
    /// match its pixel buffer
    #[error("invalid picture dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A pixel read or write addressed a cell outside the grid
    #[error("pixel ({x}, {y}) is outside the {width}x{height} picture")]
    OutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown tool {0:?}")]
    UnknownTool(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser API call failed (web build only)
    #[error("browser error: {0}")]
    Web(String),
}

/// Result type for engine and shell operations
pub type Result<T> = std::result::Result<T, Error>;
