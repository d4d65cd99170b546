//! The GIF container boundary.

use crate::error::RenderError;
use crate::palette::{IndexedFrame, StatePalette};
use gif::{Encoder, Frame, Repeat};
use std::borrow::Cow;
use std::io::Write;

/// Frame delay in hundredths of a second used by the reference drivers.
pub const FRAME_DELAY_CS: u16 = 5;

/// GIF dimensions are 16-bit.
const MAX_DIMENSION: u32 = u16::MAX as u32;

fn frame_dimensions(frame: &IndexedFrame) -> Result<(u16, u16), RenderError> {
    if frame.width > MAX_DIMENSION || frame.height > MAX_DIMENSION {
        return Err(RenderError::FrameTooLarge {
            width: frame.width,
            height: frame.height,
            max: MAX_DIMENSION,
        });
    }
    Ok((frame.width as u16, frame.height as u16))
}

/// Write an infinitely looping animation of palette-indexed frames.
///
/// The canvas takes the first frame's dimensions and every frame shares the
/// global palette.
///
/// # Errors
///
/// Returns `Err(RenderError::EmptyAnimation)` for an empty frame sequence,
/// `Err(RenderError::FrameTooLarge)` when a frame exceeds the container's
/// 16-bit dimensions, and `Err(RenderError::Encoding)` for container or
/// I/O failures.
pub fn encode_gif<W: Write>(
    writer: W,
    frames: &[IndexedFrame],
    palette: &StatePalette,
    delay_cs: u16,
) -> Result<(), RenderError> {
    let first = frames.first().ok_or(RenderError::EmptyAnimation)?;
    let (width, height) = frame_dimensions(first)?;

    let mut encoder = Encoder::new(writer, width, height, &palette.gif_palette())?;
    encoder.set_repeat(Repeat::Infinite)?;

    for frame in frames {
        let (frame_width, frame_height) = frame_dimensions(frame)?;
        let mut gif_frame = Frame::default();
        gif_frame.width = frame_width;
        gif_frame.height = frame_height;
        gif_frame.buffer = Cow::Borrowed(&frame.indices);
        gif_frame.delay = delay_cs;
        encoder.write_frame(&gif_frame)?;
    }
    Ok(())
}
