use bevy::math::{Vec2, Vec4};

/// Compositing mode for subsequent draws: normal alpha compositing, or the
/// additive "screen" blend the pointer light is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    SourceOver,
    Screen,
}

/// CPU raster surface the garden draws into every tick. RGBA8, row-major,
/// top-left origin — the same byte layout the backdrop texture is uploaded
/// from each frame.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    blend: BlendMode,
    draw_calls: u64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
            blend: BlendMode::SourceOver,
            draw_calls: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of fill operations issued since creation.
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Resize the surface, dropping all prior content. The next full redraw
    /// repaints every pixel, so nothing stale survives a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize * 4];
    }

    pub fn set_blend(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    /// Fill the whole surface with an opaque color.
    pub fn fill(&mut self, color: Vec4) {
        self.draw_calls += 1;
        let rgba = to_rgba8(color);
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Fill a circle with a radial gradient from `inner` at the center to
    /// `outer` at the rim, composited under the current blend mode. Pixels
    /// are sampled at their centers.
    pub fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, inner: Vec4, outer: Vec4) {
        self.draw_calls += 1;
        if radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }

        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let sample = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = sample.distance(center);
                if distance > radius {
                    continue;
                }

                let src = inner.lerp(outer, distance / radius);
                let i = (y as usize * self.width as usize + x as usize) * 4;
                let dst = from_rgba8(&self.pixels[i..i + 4]);
                let out = to_rgba8(composite(dst, src, self.blend));
                self.pixels[i..i + 4].copy_from_slice(&out);
            }
        }
    }
}

/// Composite `src` over `dst` (both straight alpha) under the given mode.
///
/// Screen follows the CSS compositing model: the channel blend
/// screen(b, s) = b + s - b*s is applied in proportion to the backdrop's
/// alpha, then the result is alpha-composited as usual.
fn composite(dst: Vec4, src: Vec4, mode: BlendMode) -> Vec4 {
    let sa = src.w;
    let da = dst.w;
    let src_rgb = src.truncate();
    let dst_rgb = dst.truncate();

    let blended = match mode {
        BlendMode::SourceOver => src_rgb,
        BlendMode::Screen => {
            let screened = dst_rgb + src_rgb - dst_rgb * src_rgb;
            src_rgb.lerp(screened, da)
        }
    };

    let out_a = sa + da * (1.0 - sa);
    if out_a <= f32::EPSILON {
        return Vec4::ZERO;
    }
    let out_rgb = (blended * sa + dst_rgb * da * (1.0 - sa)) / out_a;
    out_rgb.extend(out_a)
}

/// Convert a straight-alpha color to the RGBA8 bytes stored per pixel.
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    let c = color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0;
    [
        c.x.round() as u8,
        c.y.round() as u8,
        c.z.round() as u8,
        c.w.round() as u8,
    ]
}

fn from_rgba8(bytes: &[u8]) -> Vec4 {
    Vec4::new(
        bytes[0] as f32,
        bytes[1] as f32,
        bytes[2] as f32,
        bytes[3] as f32,
    ) / 255.0
}
