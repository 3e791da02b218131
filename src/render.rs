use crate::texture::Texture;

/// Tightly packed RGB pixel buffer, 3 bytes per pixel, row-major.
#[derive(Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize * 3],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clears every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}

/// Maps a unit channel value to its 8-bit equivalent, rounding to nearest
/// (0.50 maps to 128).
#[inline]
pub fn channel_to_byte(c: f32) -> u8 {
    (c * 255.0).round() as u8
}

/// Draws the whole grid into `frame`: clears to black, then fills one
/// `scale` x `scale` rectangle per cell at `(col * scale, row * scale)`.
///
/// Pure with respect to its inputs: the same texture and scale always
/// produce a byte-identical frame. Alpha is ignored; rectangles are opaque.
pub fn rasterize(texture: &Texture, scale: u32, frame: &mut FrameBuffer) {
    debug_assert_eq!(frame.width, texture.width() * scale);
    debug_assert_eq!(frame.height, texture.height() * scale);

    frame.clear();

    for row in 0..texture.height() {
        for col in 0..texture.width() {
            let cell = texture.cell(col, row);
            let rgb = [
                channel_to_byte(cell.red),
                channel_to_byte(cell.green),
                channel_to_byte(cell.blue),
            ];

            for y in row * scale..(row + 1) * scale {
                for x in col * scale..(col + 1) * scale {
                    let idx = (y * frame.width + x) as usize * 3;
                    frame.pixels[idx..idx + 3].copy_from_slice(&rgb);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_obeys_window_sizing_law() {
        let frame = FrameBuffer::new(16 * 10, 16 * 10);
        assert_eq!(frame.width(), 160);
        assert_eq!(frame.height(), 160);
        assert_eq!(frame.pixels().len(), 160 * 160 * 3);
    }

    #[test]
    fn rasterize_is_deterministic() {
        let texture = Texture::generate(16, 16, 42);
        let mut a = FrameBuffer::new(160, 160);
        let mut b = FrameBuffer::new(160, 160);

        rasterize(&texture, 10, &mut a);
        rasterize(&texture, 10, &mut b);
        assert_eq!(a.pixels(), b.pixels());

        // Redrawing into a dirty buffer must yield the same bytes.
        rasterize(&texture, 10, &mut a);
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn cell_rectangles_are_solid() {
        let texture = Texture::generate(2, 2, 5);
        let scale = 3;
        let mut frame = FrameBuffer::new(2 * scale, 2 * scale);
        rasterize(&texture, scale, &mut frame);

        for row in 0..2 {
            for col in 0..2 {
                let cell = texture.cell(col, row);
                let expected = [
                    channel_to_byte(cell.red),
                    channel_to_byte(cell.green),
                    channel_to_byte(cell.blue),
                ];
                for y in row * scale..(row + 1) * scale {
                    for x in col * scale..(col + 1) * scale {
                        let idx = (y * frame.width() + x) as usize * 3;
                        assert_eq!(&frame.pixels()[idx..idx + 3], &expected);
                    }
                }
            }
        }
    }

    #[test]
    fn channel_scaling_rounds_to_nearest() {
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(0.50), 128);
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(0.01), 3);
    }
}
