//! Per-step simulation phases for a system of gravitating bodies.
//!
//! One step of the simulation is:
//! 1. [`force_phase`] rebuilds every body's net gravitational force
//!    from scratch.
//! 2. [`integrate_phase`] advances velocity, then position, of every
//!    body by one explicit Euler step using that force.
//!
//! [`step`] runs both phases in order. Bodies are addressed by index
//! throughout, never through independently held references.

use crate::{body::Body, types::BodyId};
use glam::DVec2;
use log::warn;

/// Gravitational force exerted on body `i` by body `j`.
///
/// Returns `DVec2::ZERO` when the two bodies coincide, so coincident
/// bodies exert no force on each other instead of dividing by zero.
///
/// ### Parameters
/// - `bi` - Body the force acts on.
/// - `bj` - Body exerting the force.
/// - `g` - Gravitational constant.
///
/// ### Returns
/// The force vector, pointing from `bi` towards `bj`.
pub fn pair_force(bi: &Body, bj: &Body, g: f64) -> DVec2 {
    let d = bj.pos - bi.pos;
    let r = d.length();
    if r == 0.0 {
        return DVec2::ZERO;
    }

    let magnitude = g * bi.mass() * bj.mass() / (r * r);
    let angle = d.y.atan2(d.x);
    DVec2::new(angle.cos(), angle.sin()) * magnitude
}

/// Net gravitational force on body `id` from every other body.
///
/// A contribution that overflows to a non-finite value is dropped. If
/// the finite contributions still sum to a non-finite value, the whole
/// force is dropped and `DVec2::ZERO` is returned.
///
/// ### Parameters
/// - `bodies` - All bodies of the system.
/// - `id` - Index of the body the force acts on.
/// - `g` - Gravitational constant.
///
/// ### Panics
/// Panics if `id` is out of bounds.
pub fn net_force(bodies: &[Body], id: BodyId, g: f64) -> DVec2 {
    let mut total = DVec2::ZERO;
    for (j, other) in bodies.iter().enumerate() {
        if j == id {
            continue;
        }
        let f = pair_force(&bodies[id], other, g);
        if !f.is_finite() {
            warn!("dropping non-finite force on body {id} from body {j}: {f}");
            continue;
        }
        total += f;
    }
    if !total.is_finite() {
        warn!("dropping non-finite net force on body {id}: {total}");
        return DVec2::ZERO;
    }
    total
}

/// Accumulates the net gravitational force on every body.
///
/// All force fields are reset to zero first, then every ordered pair
/// `(i, j)` with `i != j` adds the force from `j` into body `i`. Each
/// unordered pair is therefore evaluated twice, once from each side.
///
/// ### Parameters
/// - `bodies` - Bodies whose `force` fields are rewritten.
/// - `g` - Gravitational constant.
pub fn force_phase(bodies: &mut [Body], g: f64) {
    for b in bodies.iter_mut() {
        b.force = DVec2::ZERO;
    }

    for id in 0..bodies.len() {
        let f = net_force(bodies, id, g);
        bodies[id].force += f;
    }
}

/// Advances one body by a single explicit Euler step.
///
/// ```text
/// a  = force / mass
/// v += a * dt
/// x += v * dt
/// ```
///
/// `dt` may differ from call to call. A zero `dt` leaves the body
/// untouched. If the new state would not be finite, the body keeps its
/// position and its velocity is zeroed.
///
/// ### Parameters
/// - `body` - Body with a freshly computed `force`.
/// - `dt` - Elapsed simulated time.
pub fn integrate_body(body: &mut Body, dt: f64) {
    if dt == 0.0 {
        return;
    }
    let acc = body.force / body.mass();
    let vel = body.vel + acc * dt;
    let pos = body.pos + vel * dt;

    if vel.is_finite() && pos.is_finite() {
        body.vel = vel;
        body.pos = pos;
    } else {
        warn!(
            "{} at {} produced a non-finite state, halting it in place",
            body.kind, body.pos
        );
        body.vel = DVec2::ZERO;
    }
}

/// Runs [`integrate_body`] for every body, in index order.
pub fn integrate_phase(bodies: &mut [Body], dt: f64) {
    for body in bodies.iter_mut() {
        integrate_body(body, dt);
    }
}

/// One full simulation step: [`force_phase`] then [`integrate_phase`].
///
/// This form does not own a clock; [`crate::session::Session::step`]
/// wraps it and advances simulated time.
pub fn step(bodies: &mut [Body], dt: f64, g: f64) {
    force_phase(bodies, g);
    integrate_phase(bodies, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, BodyKind};
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn body_at(mass: f64, x: f64, y: f64) -> Body {
        Body::new(
            BodyKind::Planet,
            1.0,
            "white",
            mass,
            DVec2::new(x, y),
            DVec2::ZERO,
        )
        .unwrap()
    }

    #[test]
    fn pair_force_points_towards_the_other_body() {
        let a = body_at(2.0, 0.0, 0.0);
        let b = body_at(3.0, 2.0, 0.0);

        let f = pair_force(&a, &b, 1.0);

        // G * 2 * 3 / 2^2
        assert_relative_eq!(f.x, 1.5, max_relative = 1e-12);
        assert!(f.y.abs() < 1e-12);
    }

    #[test]
    fn single_body_feels_no_force() {
        let mut bodies = vec![body_at(5.0, 10.0, -3.0)];
        force_phase(&mut bodies, 1.0);
        assert_eq!(bodies[0].force, DVec2::ZERO);
    }

    #[test]
    fn two_body_forces_are_equal_and_opposite() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..100 {
            let m1 = rng.random_range(0.1..1000.0);
            let m2 = rng.random_range(0.1..1000.0);
            let mut bodies = vec![
                body_at(m1, rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)),
                body_at(m2, rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)),
            ];

            force_phase(&mut bodies, 1.0);

            let fa = bodies[0].force;
            let fb = bodies[1].force;
            let scale = fa.length().max(1e-300);
            assert_relative_eq!(fa.length(), fb.length(), max_relative = 1e-12);
            assert!(
                (fa + fb).length() / scale < 1e-12,
                "forces not opposite: {fa} vs {fb}"
            );
        }
    }

    #[test]
    fn coincident_bodies_exert_no_force() {
        let mut bodies = vec![body_at(1.0, 4.0, 4.0), body_at(1.0, 4.0, 4.0)];

        force_phase(&mut bodies, 1.0);

        assert_eq!(bodies[0].force, DVec2::ZERO);
        assert_eq!(bodies[1].force, DVec2::ZERO);
        assert!(bodies.iter().all(|b| b.force.is_finite()));
    }

    #[test]
    fn coincident_pair_still_feels_third_body() {
        let mut bodies = vec![
            body_at(1.0, 0.0, 0.0),
            body_at(1.0, 0.0, 0.0),
            body_at(4.0, 2.0, 0.0),
        ];

        force_phase(&mut bodies, 1.0);

        // Only the third body pulls: 1 * 1 * 4 / 2^2 = 1 along +x.
        assert_relative_eq!(bodies[0].force.x, 1.0, max_relative = 1e-12);
        assert_relative_eq!(bodies[1].force.x, 1.0, max_relative = 1e-12);
        assert_relative_eq!(bodies[2].force.x, -2.0, max_relative = 1e-12);
    }

    #[test]
    fn forces_do_not_carry_over_between_steps() {
        let mut bodies = vec![body_at(1.0, 0.0, 0.0), body_at(1.0, 1.0, 0.0)];
        bodies[0].force = DVec2::new(1e9, -1e9);

        force_phase(&mut bodies, 1.0);
        let first = bodies[0].force;
        force_phase(&mut bodies, 1.0);

        assert_eq!(bodies[0].force, first);
        assert_relative_eq!(first.x, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn integrate_uses_updated_velocity_for_position() {
        let mut b = body_at(2.0, 0.0, 0.0);
        b.vel = DVec2::new(1.0, 0.0);
        b.force = DVec2::new(4.0, 0.0);

        integrate_body(&mut b, 0.5);

        // a = 2, v = 1 + 2 * 0.5 = 2, x = 0 + 2 * 0.5 = 1
        assert_eq!(b.vel, DVec2::new(2.0, 0.0));
        assert_eq!(b.pos, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut b = body_at(2.0, 3.0, 4.0);
        b.vel = DVec2::new(-1.0, 1.0);
        b.force = DVec2::new(10.0, 10.0);
        let before = b.clone();

        integrate_body(&mut b, 0.0);

        assert_eq!(b.pos, before.pos);
        assert_eq!(b.vel, before.vel);
    }

    #[test]
    fn non_finite_update_halts_body_in_place() {
        let mut b = body_at(1e-300, 3.0, 4.0);
        b.vel = DVec2::new(1.0, 1.0);
        b.force = DVec2::new(f64::MAX, 0.0);

        integrate_body(&mut b, 1e10);

        assert_eq!(b.pos, DVec2::new(3.0, 4.0));
        assert_eq!(b.vel, DVec2::ZERO);
    }

    #[test]
    fn overflowing_pair_force_is_dropped() {
        let bodies = vec![body_at(1e200, 0.0, 0.0), body_at(1e200, 1.0, 0.0)];

        assert!(!pair_force(&bodies[0], &bodies[1], 1.0).is_finite());
        assert_eq!(net_force(&bodies, 0, 1.0), DVec2::ZERO);
        assert_eq!(net_force(&bodies, 1, 1.0), DVec2::ZERO);
    }

    #[test]
    fn overflowing_sum_of_finite_forces_is_dropped() {
        // Each pair force is finite, but two of them on an end body sum past f64::MAX.
        let mut bodies: Vec<Body> = (0..3)
            .map(|i| {
                let mut b = body_at(1e154, i as f64, 0.0);
                b.vel = DVec2::new(0.0, 3.0);
                b
            })
            .collect();
        assert!(pair_force(&bodies[0], &bodies[1], 1.7).is_finite());
        assert!(pair_force(&bodies[0], &bodies[2], 1.7).is_finite());

        step(&mut bodies, 0.0, 1.7);

        for b in &bodies {
            assert!(b.force.is_finite(), "non-finite force {}", b.force);
            assert_eq!(b.vel, DVec2::new(0.0, 3.0));
        }
        assert_eq!(bodies[0].force, DVec2::ZERO);
        assert_eq!(bodies[2].force, DVec2::ZERO);
    }

    #[test]
    fn zero_dt_is_a_no_op_even_with_infinite_force() {
        let mut b = body_at(1.0, 3.0, 4.0);
        b.vel = DVec2::new(0.0, 3.0);
        b.force = DVec2::new(f64::INFINITY, 0.0);

        integrate_body(&mut b, 0.0);

        assert_eq!(b.pos, DVec2::new(3.0, 4.0));
        assert_eq!(b.vel, DVec2::new(0.0, 3.0));
    }

    #[test]
    fn step_moves_two_bodies_towards_each_other() {
        let mut bodies = vec![body_at(1.0, -1.0, 0.0), body_at(1.0, 1.0, 0.0)];

        step(&mut bodies, 0.1, 1.0);

        assert!(bodies[0].vel.x > 0.0);
        assert!(bodies[1].vel.x < 0.0);
        assert!(bodies[0].pos.x > -1.0);
        assert!(bodies[1].pos.x < 1.0);
    }
}
