//! Error types for rendering and encoding.

use std::error::Error;
use std::fmt;

/// Errors arising from frame encoding.
#[derive(Debug)]
pub enum RenderError {
    /// There are no frames to encode.
    EmptyAnimation,
    /// A frame dimension exceeds what the GIF container can address.
    FrameTooLarge {
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
        /// Maximum addressable dimension.
        max: u32,
    },
    /// The GIF encoder failed (including underlying I/O failures).
    Encoding(gif::EncodingError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnimation => write!(f, "no frames to encode"),
            Self::FrameTooLarge { width, height, max } => {
                write!(f, "frame {width}x{height} exceeds the {max}-pixel GIF limit")
            }
            Self::Encoding(err) => write!(f, "GIF encoding failed: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<gif::EncodingError> for RenderError {
    fn from(err: gif::EncodingError) -> Self {
        Self::Encoding(err)
    }
}
