use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas, RenderTarget};

/// Number of halo rings used to approximate a blurred glow.
const GLOW_LAYERS: u32 = 5;
/// Alpha of each halo ring relative to the fill colour's alpha.
const GLOW_LAYER_ALPHA: f32 = 0.06;

/// Immediate-mode 2D raster target the simulation draws into.
///
/// Colours carry their own alpha. A non-zero glow applies to every
/// subsequent `fill_circle` until it is set back to zero.
pub trait Surface {
    fn fill_rect(&mut self, origin: [f32; 2], size: [f32; 2], color: Color);
    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color);
    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color);
    fn set_glow(&mut self, blur: f32, color: Color);
}

/// Converts an opacity in `[0, 1]` to an 8-bit alpha channel.
pub fn alpha(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

fn to_i16(value: f32) -> i16 {
    value.round().clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// [`Surface`] backed by an SDL2 canvas and the `SDL2_gfx` primitives.
pub struct SdlSurface<T: RenderTarget> {
    canvas: Canvas<T>,
    glow_blur: f32,
    glow_color: Color,
}

impl<T: RenderTarget> SdlSurface<T> {
    pub fn new(mut canvas: Canvas<T>) -> SdlSurface<T> {
        canvas.set_blend_mode(BlendMode::Blend);
        SdlSurface {
            canvas,
            glow_blur: 0.0,
            glow_color: Color::BLACK,
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<T> {
        &mut self.canvas
    }

    fn draw_glow(&mut self, center: [f32; 2], radius: f32) {
        let x = to_i16(center[0]);
        let y = to_i16(center[1]);
        let ring_alpha = (self.glow_color.a as f32 * GLOW_LAYER_ALPHA) as u8;
        let Color { r, g, b, .. } = self.glow_color;
        let ring = to_abgr(Color::RGBA(r, g, b, ring_alpha));
        // outermost first so the inner rings stack up brighter
        for layer in (1..=GLOW_LAYERS).rev() {
            let extent = self.glow_blur * layer as f32 / GLOW_LAYERS as f32;
            let _ = self.canvas.filled_circle(x, y, to_i16(radius + extent), ring);
        }
    }
}

impl<T: RenderTarget> Surface for SdlSurface<T> {
    fn fill_rect(&mut self, origin: [f32; 2], size: [f32; 2], color: Color) {
        let x1 = to_i16(origin[0]);
        let y1 = to_i16(origin[1]);
        let x2 = to_i16(origin[0] + size[0]);
        let y2 = to_i16(origin[1] + size[1]);
        let _ = self.canvas.box_(x1, y1, x2, y2, to_abgr(color));
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color) {
        let x1 = to_i16(from[0]);
        let y1 = to_i16(from[1]);
        let x2 = to_i16(to[0]);
        let y2 = to_i16(to[1]);
        let color = to_abgr(color);
        if width <= 1.0 {
            let _ = self.canvas.aa_line(x1, y1, x2, y2, color);
        } else {
            let _ = self.canvas.thick_line(x1, y1, x2, y2, width.round() as u8, color);
        }
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color) {
        if self.glow_blur > 0.0 {
            self.draw_glow(center, radius);
        }
        let x = to_i16(center[0]);
        let y = to_i16(center[1]);
        let _ = self.canvas.filled_circle(x, y, to_i16(radius), to_abgr(color));
    }

    fn set_glow(&mut self, blur: f32, color: Color) {
        self.glow_blur = blur.max(0.0);
        self.glow_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_maps_to_alpha() {
        assert_eq!(alpha(0.0), 0);
        assert_eq!(alpha(1.0), 255);
        assert_eq!(alpha(0.1), 26);
        assert_eq!(alpha(0.05), 13);
        assert_eq!(alpha(3.0), 255);
    }

    #[test]
    fn coordinates_saturate_to_i16() {
        assert_eq!(to_i16(1e9), i16::MAX);
        assert_eq!(to_i16(-1e9), i16::MIN);
        assert_eq!(to_i16(2.6), 3);
    }
}
