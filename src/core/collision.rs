use crate::core::body::Body;
use crate::error::{Error, Result};

/// Post-collision velocities of a one-dimensional elastic collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Velocity of body 1 after impact.
    pub u1: f64,
    /// Velocity of body 2 after impact.
    pub u2: f64,
}

impl From<Outcome> for (f64, f64) {
    fn from(o: Outcome) -> Self {
        (o.u1, o.u2)
    }
}

/// Closed-form velocities after a perfectly elastic 1D collision.
///
/// Inputs are not validated. When `m1 + m2 == 0` the divisions follow IEEE-754 and the
/// returned pair is infinite or NaN; this never panics.
#[inline]
pub fn post_collision_velocities(m1: f64, m2: f64, v1: f64, v2: f64) -> (f64, f64) {
    let u1 = (m1 - m2) / (m1 + m2) * v1 + (2.0 * m2) / (m1 + m2) * v2;
    let u2 = (m2 - m1) / (m1 + m2) * v2 + (2.0 * m1) / (m1 + m2) * v1;
    (u1, u2)
}

/// Validating variant of [`post_collision_velocities`].
///
/// Errors:
/// - `Error::InvalidParam` if any input is NaN/inf.
/// - `Error::MathError` if the masses sum to zero.
pub fn try_post_collision_velocities(m1: f64, m2: f64, v1: f64, v2: f64) -> Result<Outcome> {
    if ![m1, m2, v1, v2].iter().all(|x| x.is_finite()) {
        return Err(Error::InvalidParam(
            "masses and velocities must be finite".into(),
        ));
    }
    let total = m1 + m2;
    if total == 0.0 {
        return Err(Error::MathError(format!(
            "total mass is zero (m1={m1}, m2={m2})"
        )));
    }
    let (u1, u2) = post_collision_velocities(m1, m2, v1, v2);
    if !u1.is_finite() || !u2.is_finite() {
        return Err(Error::MathError(format!(
            "non-finite result u1={u1}, u2={u2}"
        )));
    }
    log::trace!("collision m1={m1} m2={m2} v1={v1} v2={v2} -> u1={u1} u2={u2}");
    Ok(Outcome { u1, u2 })
}

/// Collide two bodies head-on and return them with their post-impact velocities.
pub fn collide(a: &Body, b: &Body) -> Result<(Body, Body)> {
    let out = try_post_collision_velocities(a.mass, b.mass, a.velocity, b.velocity)?;
    let mut a_after = *a;
    let mut b_after = *b;
    a_after.set_velocity(out.u1)?;
    b_after.set_velocity(out.u2)?;
    Ok((a_after, b_after))
}

/// Sum of momenta of `bodies`.
pub fn total_momentum(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::momentum).sum()
}

/// Sum of kinetic energies of `bodies`.
pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}
