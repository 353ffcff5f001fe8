use crate::library::distance;
use crate::particle::Particle;
use crate::surface::{Surface, alpha};
use sdl2::pixels::Color;

/// Opacity of the line between two coincident particles; it falls to zero at the threshold.
pub const MAX_OPACITY: f32 = 0.5;
pub const LINE_WIDTH: f32 = 1.0;
pub const LINE_COLOR: Color = Color::RGB(0x00, 0xd4, 0xff);

/// Opacity of the line between two particles `dist` apart, or `None` when
/// they are too far apart to be connected.
pub fn connection_opacity(dist: f32, threshold: f32) -> Option<f32> {
    if dist >= threshold {
        return None;
    }
    Some((1.0 - dist / threshold) * MAX_OPACITY)
}

/// Draws a line for every unordered pair closer than `threshold` and
/// returns how many were drawn.
pub fn draw_connections<S: Surface + ?Sized>(
    particles: &[Particle],
    threshold: f32,
    surface: &mut S,
) -> usize {
    let mut drawn = 0;
    for (i, first) in particles.iter().enumerate() {
        for second in &particles[i + 1..] {
            let dist = distance(first.position, second.position);
            if let Some(opacity) = connection_opacity(dist, threshold) {
                let Color { r, g, b, .. } = LINE_COLOR;
                let color = Color::RGBA(r, g, b, alpha(opacity));
                surface.stroke_line(first.position, second.position, LINE_WIDTH, color);
                drawn += 1;
            }
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_falls_off_linearly() {
        assert_eq!(connection_opacity(0.0, 100.0), Some(0.5));
        assert_eq!(connection_opacity(50.0, 100.0), Some(0.25));
        let near = connection_opacity(90.0, 100.0).unwrap();
        assert!((near - 0.05).abs() < 1e-6);
    }

    #[test]
    fn opacity_decreases_with_distance() {
        let mut last = f32::INFINITY;
        for step in 0..150 {
            let opacity = connection_opacity(step as f32, 150.0).unwrap();
            assert!(opacity < last);
            assert!(opacity > 0.0 && opacity <= MAX_OPACITY);
            last = opacity;
        }
    }

    #[test]
    fn nothing_at_or_beyond_threshold() {
        assert_eq!(connection_opacity(100.0, 100.0), None);
        assert_eq!(connection_opacity(100.5, 100.0), None);
        // a zero threshold connects nothing, even coincident particles
        assert_eq!(connection_opacity(0.0, 0.0), None);
    }
}
