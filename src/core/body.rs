use crate::error::{Error, Result};

/// Momentum of a single body: `p = m * v`.
#[inline]
pub fn momentum(mass: f64, velocity: f64) -> f64 {
    mass * velocity
}

/// A point mass moving along a line.
///
/// Fields:
/// - `mass`: body mass (> 0 when built through [`Body::new`])
/// - `velocity`: signed velocity along the line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Mass (> 0).
    pub mass: f64,
    /// Signed velocity.
    pub velocity: f64,
}

impl Body {
    /// Create a new body after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `mass` is non-positive or either value is NaN/inf.
    pub fn new(mass: f64, velocity: f64) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self { mass, velocity })
    }

    /// Returns the body's momentum `m * v`.
    #[inline]
    pub fn momentum(&self) -> f64 {
        momentum(self.mass, self.velocity)
    }

    /// Returns the body's kinetic energy: 1/2 m v^2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }

    /// Set velocity (validated as finite).
    pub fn set_velocity(&mut self, velocity: f64) -> Result<()> {
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        self.velocity = velocity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_ok() -> Result<()> {
        let b = Body::new(2.0, -3.0)?;
        assert_eq!(b.mass, 2.0);
        assert_eq!(b.velocity, -3.0);
        Ok(())
    }

    #[test]
    fn invalid_mass_rejected() {
        let err = Body::new(0.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("mass"));
        let err = Body::new(-1.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("mass"));
        assert!(Body::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn invalid_velocity_rejected() {
        let err = Body::new(1.0, f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn momentum_is_mass_times_velocity() -> Result<()> {
        assert_eq!(momentum(2.0, 3.0), 6.0);
        assert_eq!(momentum(1.5, -4.0), -6.0);
        let b = Body::new(2.0, 3.0)?;
        assert_eq!(b.momentum(), 6.0);
        Ok(())
    }

    #[test]
    fn kinetic_energy_computed() -> Result<()> {
        // v = 5, v^2 = 25; KE = 0.5 * 2 * 25
        let b = Body::new(2.0, -5.0)?;
        assert!((b.kinetic_energy() - 25.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn set_velocity_validates() -> Result<()> {
        let mut b = Body::new(1.0, 0.0)?;
        b.set_velocity(4.0)?;
        assert_eq!(b.velocity, 4.0);
        assert!(b.set_velocity(f64::NAN).is_err());
        assert_eq!(b.velocity, 4.0);
        Ok(())
    }
}
