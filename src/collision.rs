//! Pairwise elastic collisions, solved in the frame aligned with the line
//! between the two centres.

use crate::library::*;
use crate::particle::Particle;

/// Post-collision velocities along the collision normal for two bodies of
/// mass `m1`, `m2` approaching with normal velocities `v1`, `v2`.
pub fn elastic_1d(m1: f32, v1: f32, m2: f32, v2: f32) -> (f32, f32) {
    let v1_after = ((m1 - m2) * v1 + 2.0 * m2 * v2) / (m1 + m2);
    let v2_after = (v1 - v2) + v1_after;
    (v1_after, v2_after)
}

/// Resolves an overlap between `first` and `second`. Returns whether they were touching.
///
/// Only the velocity components along the line of centres are exchanged.
/// The pair is then pushed apart along that line, each by its share of the
/// combined post-collision normal speed; a pair with no normal speed left is
/// not moved.
pub fn resolve_pair(first: &mut Particle, second: &mut Particle) -> bool {
    let offset = find_vector(first.position, second.position);
    let dist = get_magnitude(offset);
    if dist >= first.radius + second.radius {
        return false;
    }

    let angle = offset[1].atan2(offset[0]);
    let (sin, cos) = angle.sin_cos();

    let mut pos1 = [0.0, 0.0];
    let mut pos2 = rotate(offset, sin, cos, false);
    let mut vel1 = rotate(first.velocity, sin, cos, false);
    let mut vel2 = rotate(second.velocity, sin, cos, false);

    (vel1[0], vel2[0]) = elastic_1d(first.mass, vel1[0], second.mass, vel2[0]);

    let speed = vel1[0].abs() + vel2[0].abs();
    if speed != 0.0 {
        let overlap = first.radius + second.radius - (pos1[0] - pos2[0]).abs();
        pos1[0] += vel1[0] / speed * overlap;
        pos2[0] += vel2[0] / speed * overlap;
    }

    let origin = first.position;
    let pos1 = rotate(pos1, sin, cos, true);
    let pos2 = rotate(pos2, sin, cos, true);
    first.position = [origin[0] + pos1[0], origin[1] + pos1[1]];
    second.position = [origin[0] + pos2[0], origin[1] + pos2[1]];
    first.velocity = rotate(vel1, sin, cos, true);
    second.velocity = rotate(vel2, sin, cos, true);
    true
}

/// Runs [`resolve_pair`] over every unordered pair in sequence order and
/// returns how many pairs were in contact.
pub fn resolve_all(particles: &mut [Particle]) -> usize {
    let mut collisions = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            if resolve_pair(first, second) {
                collisions += 1;
            }
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::PALETTE;

    const EPS: f32 = 1e-4;

    fn particle(position: [f32; 2], velocity: [f32; 2], radius: f32) -> Particle {
        Particle {
            position,
            velocity,
            radius,
            mass: radius,
            color: PALETTE[1],
        }
    }

    fn close(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < EPS && (a[1] - b[1]).abs() < EPS
    }

    #[test]
    fn equal_masses_swap_normal_velocities() {
        assert_eq!(elastic_1d(5.0, 1.5, 5.0, -0.25), (-0.25, 1.5));
        assert_eq!(elastic_1d(3.0, 2.0, 3.0, 0.0), (0.0, 2.0));
    }

    #[test]
    fn heavier_body_keeps_going() {
        let (v1, v2) = elastic_1d(3.0, 2.0, 1.0, 0.0);
        assert!((v1 - 1.0).abs() < EPS);
        assert!((v2 - 3.0).abs() < EPS);
        // momentum conserved along the normal
        assert!((3.0 * v1 + v2 - 6.0).abs() < EPS);
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut a = particle([10.0, 10.0], [1.0, 0.5], 5.0);
        let mut b = particle([20.0, 10.0], [-1.0, 0.0], 5.0);
        let (before_a, before_b) = (a.clone(), b.clone());
        assert!(!resolve_pair(&mut a, &mut b));
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }

    #[test]
    fn head_on_equal_masses_exchange_and_separate() {
        let mut a = particle([10.0, 10.0], [1.0, 0.0], 5.0);
        let mut b = particle([18.0, 10.0], [-1.0, 0.0], 5.0);
        assert!(resolve_pair(&mut a, &mut b));
        assert!(close(a.velocity, [-1.0, 0.0]), "{:?}", a.velocity);
        assert!(close(b.velocity, [1.0, 0.0]), "{:?}", b.velocity);
        // overlap of 2 split evenly between the two
        assert!(close(a.position, [9.0, 10.0]), "{:?}", a.position);
        assert!(close(b.position, [19.0, 10.0]), "{:?}", b.position);
    }

    #[test]
    fn tangential_velocity_is_preserved() {
        // centres along y; the x components are tangential
        let mut a = particle([50.0, 50.0], [0.7, 1.0], 4.0);
        let mut b = particle([50.0, 56.0], [-0.3, -2.0], 4.0);
        resolve_pair(&mut a, &mut b);
        assert!(close(a.velocity, [0.7, -2.0]), "{:?}", a.velocity);
        assert!(close(b.velocity, [-0.3, 1.0]), "{:?}", b.velocity);
    }

    #[test]
    fn diagonal_collision_conserves_momentum() {
        let mut a = particle([0.0, 0.0], [2.0, 1.0], 3.0);
        let mut b = Particle {
            mass: 6.0,
            ..particle([4.0, 3.0], [-1.0, 0.5], 3.0)
        };
        let before = [
            a.mass * a.velocity[0] + b.mass * b.velocity[0],
            a.mass * a.velocity[1] + b.mass * b.velocity[1],
        ];
        resolve_pair(&mut a, &mut b);
        let after = [
            a.mass * a.velocity[0] + b.mass * b.velocity[0],
            a.mass * a.velocity[1] + b.mass * b.velocity[1],
        ];
        assert!(close(before, after), "{before:?} vs {after:?}");
    }

    #[test]
    fn zero_normal_speed_skips_separation() {
        let mut a = particle([10.0, 10.0], [0.0, 0.0], 5.0);
        let mut b = particle([16.0, 10.0], [0.0, 0.0], 5.0);
        assert!(resolve_pair(&mut a, &mut b));
        assert!(close(a.position, [10.0, 10.0]));
        assert!(close(b.position, [16.0, 10.0]));
        assert!(a.velocity.iter().chain(b.velocity.iter()).all(|v| v.is_finite()));
    }

    #[test]
    fn resolve_all_counts_contacts() {
        let mut particles = vec![
            particle([10.0, 10.0], [1.0, 0.0], 5.0),
            particle([18.0, 10.0], [-1.0, 0.0], 5.0),
            particle([80.0, 80.0], [0.0, 0.0], 5.0),
        ];
        assert_eq!(resolve_all(&mut particles), 1);
        assert_eq!(particles[2].position, [80.0, 80.0]);
    }
}
