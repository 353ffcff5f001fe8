//! Host events and control changes, applied to a [`Field`] between frames.

use crate::field::Field;
use crate::library::*;
use crate::particle::Particle;
use rand::Rng;

/// Particles closer than this to the pointer are pushed away.
pub const INTERACTION_RADIUS: f32 = 100.0;
/// Impulse given to a particle right under the pointer.
pub const MAX_IMPULSE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    PointerMoved { x: f32, y: f32 },
    Clicked { x: f32, y: f32 },
    Resized { width: f32, height: f32 },
    SetParticleCount(usize),
    SetParticleSize(f32),
    Reset,
}

/// Velocity change for a particle at `position` with the pointer at `pointer`.
pub fn repulsion(position: [f32; 2], pointer: [f32; 2]) -> Option<[f32; 2]> {
    let away = find_vector(pointer, position);
    let dist = get_magnitude(away);
    if dist >= INTERACTION_RADIUS {
        return None;
    }
    let force = (INTERACTION_RADIUS - dist) / INTERACTION_RADIUS * MAX_IMPULSE;
    let dir = normalize(away);
    Some([dir[0] * force, dir[1] * force])
}

impl Field {
    pub fn apply<R: Rng>(&mut self, input: Input, rng: &mut R) {
        match input {
            Input::PointerMoved { x, y } => self.repel([x, y]),
            Input::Clicked { x, y } => self.inject([x, y], rng),
            Input::Resized { width, height } => self.resize(width, height, rng),
            Input::SetParticleCount(count) => self.set_particle_count(count, rng),
            Input::SetParticleSize(size) => self.set_particle_size(size),
            Input::Reset => {
                log::debug!("reset");
                self.reinitialize(rng);
            }
        }
    }

    /// Pushes every particle within [`INTERACTION_RADIUS`] of `pointer` away from it.
    pub fn repel(&mut self, pointer: [f32; 2]) {
        for particle in self.particles.iter_mut() {
            if let Some(impulse) = repulsion(particle.position, pointer) {
                particle.velocity[0] += impulse[0];
                particle.velocity[1] += impulse[1];
            }
        }
    }

    pub fn inject<R: Rng>(&mut self, at: [f32; 2], rng: &mut R) {
        let particle = Particle::new(Some(at), self.bounds(), &self.config, rng);
        log::debug!("injected particle at {at:?}");
        self.push(particle);
    }

    pub fn resize<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        log::info!("surface resized to {width}x{height}");
        self.set_bounds(width, height);
        self.reinitialize(rng);
    }

    pub fn set_particle_count<R: Rng>(&mut self, count: usize, rng: &mut R) {
        log::info!("particle count {} -> {count}", self.config.particle_count);
        self.config.particle_count = count;
        self.reinitialize(rng);
    }

    /// Resizes every live particle in place; positions and velocities are kept.
    pub fn set_particle_size(&mut self, size: f32) {
        if !(size.is_finite() && size > 0.0) {
            log::warn!("ignoring particle size {size}");
            return;
        }
        log::info!("particle size {} -> {size}", self.config.particle_size);
        self.config.particle_size = size;
        for particle in self.particles.iter_mut() {
            particle.resize(size);
        }
    }
}
