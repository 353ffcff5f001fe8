use crate::config::Config;
use crate::surface::Surface;
use rand::Rng;
use rand::seq::IndexedRandom;
use sdl2::pixels::Color;

/// Blur extent of the glow drawn around every particle.
pub const GLOW_BLUR: f32 = 20.0;

pub const PALETTE: [Color; 8] = [
    Color::RGB(0x00, 0xd4, 0xff),
    Color::RGB(0x66, 0x7e, 0xea),
    Color::RGB(0x76, 0x4b, 0xa2),
    Color::RGB(0xf0, 0x93, 0xfb),
    Color::RGB(0x4f, 0xac, 0xfe),
    Color::RGB(0x00, 0xf2, 0xfe),
    Color::RGB(0x43, 0xe9, 0x7b),
    Color::RGB(0x38, 0xf9, 0xd7),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub radius: f32,
    pub mass: f32,
    pub color: Color,
}

impl Particle {
    /// Samples a particle inside `bounds`, or at `position` when one is given.
    pub fn new<R: Rng>(
        position: Option<[f32; 2]>,
        bounds: [f32; 2],
        config: &Config,
        rng: &mut R,
    ) -> Particle {
        let position = position.unwrap_or_else(|| [sample(rng, bounds[0]), sample(rng, bounds[1])]);
        let velocity = [
            (rng.random::<f32>() - 0.5) * config.max_speed,
            (rng.random::<f32>() - 0.5) * config.max_speed,
        ];
        let color = *PALETTE.choose(rng).unwrap_or(&PALETTE[0]);
        Particle {
            position,
            velocity,
            radius: config.particle_size,
            mass: config.particle_size,
            color,
        }
    }

    /// Keeps radius and mass equal.
    pub fn resize(&mut self, size: f32) {
        self.radius = size;
        self.mass = size;
    }

    /// Advances one unit time step, reflecting off the edges of `bounds`.
    pub fn integrate(&mut self, bounds: [f32; 2]) {
        for axis in 0..2 {
            self.position[axis] += self.velocity[axis];
            let limit = bounds[axis];
            let pos = self.position[axis];
            if pos + self.radius > limit || pos - self.radius < 0.0 {
                self.velocity[axis] = -self.velocity[axis];
                // max then min: a surface narrower than the particle pins it to the far edge
                self.position[axis] = pos.max(self.radius).min(limit - self.radius);
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_glow(GLOW_BLUR, self.color);
        surface.fill_circle(self.position, self.radius, self.color);
        surface.set_glow(0.0, self.color);
    }
}

fn sample<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    rng.random::<f32>() * extent
}
