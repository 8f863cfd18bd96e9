use crate::core::body::Body;
use crate::core::collision::{post_collision_velocities, Outcome};

/// Inputs of a single head-on collision run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub m1: f64,
    pub m2: f64,
    pub v1: f64,
    pub v2: f64,
}

impl Default for Scenario {
    /// A 2 kg body at 3 m/s hitting a resting 1 kg body.
    fn default() -> Self {
        Self {
            m1: 2.0,
            m2: 1.0,
            v1: 3.0,
            v2: 0.0,
        }
    }
}

impl Scenario {
    /// Evaluate the raw formula for this scenario. No validation.
    pub fn run(&self) -> Outcome {
        let (u1, u2) = post_collision_velocities(self.m1, self.m2, self.v1, self.v2);
        Outcome { u1, u2 }
    }

    /// The two bodies before impact, without validation.
    pub fn bodies(&self) -> [Body; 2] {
        [
            Body {
                mass: self.m1,
                velocity: self.v1,
            },
            Body {
                mass: self.m2,
                velocity: self.v2,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_outcome() {
        let out = Scenario::default().run();
        assert!((out.u1 - 1.0).abs() < 1e-12);
        assert!((out.u2 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn bodies_mirror_inputs() {
        let s = Scenario {
            m1: 1.0,
            m2: 4.0,
            v1: -2.0,
            v2: 0.5,
        };
        let [a, b] = s.bodies();
        assert_eq!((a.mass, a.velocity), (1.0, -2.0));
        assert_eq!((b.mass, b.velocity), (4.0, 0.5));
    }
}
