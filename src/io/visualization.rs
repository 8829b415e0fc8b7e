//! Frame capture and GIF export of pattern transitions

use crate::algorithm::session::{FrameStatus, KolamSession};
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{KolamError, Result};
use crate::render::RasterSurface;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Captures every animation frame a session draws
///
/// Frames of consecutive transitions are appended, so one capture can hold
/// several generations played back to back.
#[derive(Debug, Clone, Default)]
pub struct TransitionCapture {
    frames: Vec<RgbaImage>,
}

impl TransitionCapture {
    /// Empty capture
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Play the session's running transition to completion, keeping every frame
    ///
    /// `on_frame` receives the number of frames drawn so far in this transition.
    /// Returns how many frames were added.
    ///
    /// # Errors
    ///
    /// Returns `NothingToRedraw` if the session has not generated anything yet
    pub fn record_transition<F>(
        &mut self,
        session: &mut KolamSession,
        width: u32,
        height: u32,
        mut on_frame: F,
    ) -> Result<usize>
    where
        F: FnMut(usize),
    {
        let mut surface = RasterSurface::new(width, height);
        let mut drawn = 0;
        loop {
            let status = session.render_frame(&mut surface)?;
            self.frames.push(surface.image().clone());
            drawn += 1;
            on_frame(drawn);
            if status == FrameStatus::Complete {
                return Ok(drawn);
            }
        }
    }

    /// Captured frames in drawing order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a looping GIF
    ///
    /// Frame delays below what viewers support are raised to the minimum and
    /// frames are skipped to keep the apparent speed. The settled last frame
    /// is held for longer at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let Some(last) = self.frames.last() else {
            return Err(KolamError::NothingToRedraw);
        };

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let delay = Delay::from_numer_denom_ms(effective_delay_ms, 1);
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .step_by(skip_factor)
            .map(|img| Frame::from_parts(img.clone(), 0, 0, delay))
            .collect();

        // Final frame displays longer for better visibility
        frames.push(Frame::from_parts(
            last.clone(),
            0,
            0,
            Delay::from_numer_denom_ms(effective_delay_ms * FINAL_FRAME_HOLD, 1),
        ));

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| KolamError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .and_then(|()| encoder.encode_frames(frames))
            .map_err(|e| KolamError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}
