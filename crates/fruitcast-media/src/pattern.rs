use crate::frame::Frame;
use crate::source::{FrameSource, MediaError, SourceProvider};
use image::codecs::jpeg::JpegEncoder;

/// Geometry and encoding settings for the synthetic pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternConfig {
    pub width: u32,
    pub height: u32,
    pub jpeg_quality: u8,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            jpeg_quality: 80,
        }
    }
}

/// Synthetic moving test pattern.
///
/// Stands in for a real capture backend: a scrolling gradient with a bouncing
/// marker block, JPEG-encoded per frame. Acquires no hardware, so any number
/// of sessions can run concurrently.
pub struct PatternSource {
    config: PatternConfig,
    tick: u64,
}

impl PatternSource {
    pub fn new(config: PatternConfig) -> Self {
        Self { config, tick: 0 }
    }

    fn render(&self) -> Vec<u8> {
        let w = self.config.width as usize;
        let h = self.config.height as usize;
        let tick = self.tick as usize;
        let mut rgb = vec![0u8; w * h * 3];

        let shift = tick * 2;
        let blue = ((tick * 3) % 256) as u8;
        for y in 0..h {
            let green = (y * 255 / h.max(1)) as u8;
            for x in 0..w {
                let i = (y * w + x) * 3;
                rgb[i] = (((x + shift) % w.max(1)) * 255 / w.max(1)) as u8;
                rgb[i + 1] = green;
                rgb[i + 2] = blue;
            }
        }

        // Bouncing marker so motion is obvious even at low frame rates.
        let side = (w.min(h) / 10).max(4);
        if w > side && h > side {
            let bx = bounce(tick * 7, w - side);
            let by = bounce(tick * 5, h - side);
            for y in by..by + side {
                for x in bx..bx + side {
                    let i = (y * w + x) * 3;
                    rgb[i] = 255;
                    rgb[i + 1] = 255;
                    rgb[i + 2] = 255;
                }
            }
        }

        rgb
    }
}

/// Triangle wave over `0..=range`.
fn bounce(t: usize, range: usize) -> usize {
    if range == 0 {
        return 0;
    }
    let phase = t % (range * 2);
    if phase < range { phase } else { range * 2 - phase }
}

impl FrameSource for PatternSource {
    fn next_frame(&mut self) -> Result<Frame, MediaError> {
        let rgb = self.render();
        let mut jpeg = Vec::with_capacity(rgb.len() / 8);
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, self.config.jpeg_quality);
        encoder
            .encode(&rgb, self.config.width, self.config.height, image::ColorType::Rgb8)
            .map_err(|e| MediaError::StreamInterrupted(format!("jpeg encode failed: {e}")))?;

        self.tick = self.tick.wrapping_add(1);
        Ok(Frame::jpeg(jpeg))
    }
}

/// Hands out an independent [`PatternSource`] per session.
pub struct PatternProvider {
    config: PatternConfig,
}

impl PatternProvider {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }
}

impl SourceProvider for PatternProvider {
    fn open(&self) -> Result<Box<dyn FrameSource>, MediaError> {
        Ok(Box::new(PatternSource::new(self.config)))
    }
}
