//! Core of an animated 2D particle field: bouncing, elastically colliding
//! particles joined by proximity lines and pushed around by the pointer.
//!
//! The simulation itself never touches SDL directly; it draws through the
//! [`surface::Surface`] trait so it can run against a recording surface in
//! tests and against an SDL2 canvas in the binary.

pub mod collision;
pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod particle;
pub mod proximity;
pub mod surface;

pub use config::{AppConfig, Config};
pub use error::{Error, Result};
pub use field::{Field, FrameStats};
pub use input::Input;
pub use particle::Particle;
pub use surface::Surface;

pub mod library {
    pub fn dot(vec1: [f32; 2], vec2: [f32; 2]) -> f32 {
        vec1[0] * vec2[0] + vec1[1] * vec2[1]
    }

    pub fn get_magnitude(vec: [f32; 2]) -> f32 {
        dot(vec, vec).sqrt()
    }

    pub fn normalize(vec: [f32; 2]) -> [f32; 2] {
        let mag = get_magnitude(vec);
        if mag == 0.0 {
            return [0.0, 0.0];
        }
        [vec[0] / mag, vec[1] / mag]
    }

    pub fn find_vector(x: [f32; 2], y: [f32; 2]) -> [f32; 2] {
        [y[0] - x[0], y[1] - x[1]]
    }

    pub fn distance(x: [f32; 2], y: [f32; 2]) -> f32 {
        get_magnitude(find_vector(x, y))
    }

    /// Rotates `vec` by the angle whose sine and cosine are given.
    ///
    /// The forward direction (`reverse == false`) rotates by the negative
    /// angle, taking a world-space vector into a frame whose x-axis points
    /// along that angle. `reverse == true` undoes it.
    pub fn rotate(vec: [f32; 2], sin: f32, cos: f32, reverse: bool) -> [f32; 2] {
        let [x, y] = vec;
        if reverse {
            [x * cos - y * sin, y * cos + x * sin]
        } else {
            [x * cos + y * sin, y * cos - x * sin]
        }
    }

}
