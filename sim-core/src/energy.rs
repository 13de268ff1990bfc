//! Mechanical energy diagnostics.
//!
//! Explicit Euler does not conserve energy; these sums are used to
//! bound the drift, not to correct it.

use crate::body::Body;

/// `Σ ½ m |v|²`
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.vel.length_squared())
        .sum()
}

/// `−Σ_{i<j} G m_i m_j / r`, skipping coincident pairs the same way the
/// force phase does.
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let mut total = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let r = bi.pos.distance(bj.pos);
            if r > 0.0 {
                total -= g * bi.mass() * bj.mass() / r;
            }
        }
    }
    total
}

pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}
