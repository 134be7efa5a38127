//! Signature capture - a free-draw raster pad.
//!
//! The pad owns a transparent RGBA raster and accumulates pen strokes while
//! the signature tool is active. Strokes are drawn continuously on pointer
//! moves; the raster is never cleared by the pad itself. A gesture commit
//! snapshots the whole accumulated drawing into one PNG data URL, so several
//! commits during one tool activation all stamp the same image.

use crate::constants::SIGNATURE_STROKE_WIDTH;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

/// Errors from snapshotting the pad into an image payload.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("PNG encode error: {0}")]
    Encode(#[from] image::ImageError),
}

/// Pen color. The original pad draws in plain black.
const STROKE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Spacing between stamped discs along a stroke segment, in pixels.
const STAMP_SPACING: f32 = 0.5;

/// A continuous free-draw surface backed by an owned raster.
///
/// The drawing state machine depends only on this narrow capability:
/// `draw_segment` and `snapshot`.
pub struct SignaturePad {
    raster: RgbaImage,
    /// Previously captured pen position; `None` until the first move.
    last_point: Option<(f32, f32)>,
}

impl SignaturePad {
    /// Create a pad with a transparent raster of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raster: RgbaImage::new(width.max(1), height.max(1)),
            last_point: None,
        }
    }

    /// Continue the stroke to `point`.
    ///
    /// Draws a segment from the previously captured point, then starts the
    /// next segment at `point`. The first call only positions the pen.
    pub fn extend_to(&mut self, point: (f32, f32)) {
        if let Some(last) = self.last_point {
            self.draw_segment(last, point);
        }
        self.last_point = Some(point);
    }

    /// Draw one round-capped line segment onto the raster.
    pub fn draw_segment(&mut self, from: (f32, f32), to: (f32, f32)) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let length = (dx * dx + dy * dy).sqrt();
        let steps = (length / STAMP_SPACING).ceil().max(1.0) as u32;

        // Stamping overlapping discs along the segment gives the rounded
        // caps and joins of a canvas stroke without a line-walking routine.
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(from.0 + dx * t, from.1 + dy * t);
        }
    }

    /// Encode the accumulated raster as a self-describing PNG data URL.
    pub fn snapshot(&self) -> Result<String, SnapshotError> {
        let mut bytes = Vec::new();
        self.raster
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(&bytes)
        ))
    }

    /// Returns true if no stroke has touched the raster yet.
    pub fn is_blank(&self) -> bool {
        self.raster.pixels().all(|p| p.0[3] == 0)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }

    fn stamp_disc(&mut self, cx: f32, cy: f32) {
        let radius = SIGNATURE_STROKE_WIDTH / 2.0;
        let (w, h) = self.raster.dimensions();
        let min_x = (cx - radius).floor().max(0.0) as u32;
        let max_x = (cx + radius).ceil().min(w as f32 - 1.0) as u32;
        let min_y = (cy - radius).floor().max(0.0) as u32;
        let max_y = (cy + radius).ceil().min(h as f32 - 1.0) as u32;

        if cx + radius < 0.0 || cy + radius < 0.0 {
            return;
        }

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist_x = x as f32 + 0.5 - cx;
                let dist_y = y as f32 + 0.5 - cy;
                if dist_x * dist_x + dist_y * dist_y <= radius * radius {
                    self.raster.put_pixel(x, y, STROKE_COLOR);
                }
            }
        }
    }
}
