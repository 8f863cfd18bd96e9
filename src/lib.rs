//! Post-collision velocities for a perfectly elastic head-on collision of two point masses.
//!
//! The closed-form solution conserves both momentum and kinetic energy:
//!
//! ```text
//! u1 = (m1 - m2) / (m1 + m2) * v1 + (2*m2) / (m1 + m2) * v2
//! u2 = (m2 - m1) / (m1 + m2) * v2 + (2*m1) / (m1 + m2) * v1
//! ```
//!
//! ```
//! let (u1, u2) = elastic1d::core::post_collision_velocities(2.0, 1.0, 3.0, 0.0);
//! assert!((u1 - 1.0).abs() < 1e-12);
//! assert!((u2 - 4.0).abs() < 1e-12);
//! ```

pub mod core;
pub mod error;

use std::io::Write;

use crate::core::Scenario;
use crate::error::Result;

/// Run `scenario` once and write `u1` then `u2` to `out`, one per line.
pub fn report<W: Write>(scenario: &Scenario, out: &mut W) -> Result<()> {
    let outcome = scenario.run();
    log::debug!("scenario {scenario:?} -> {outcome:?}");
    if log::log_enabled!(log::Level::Debug) {
        let before = scenario.bodies();
        let mut after = before;
        after[0].velocity = outcome.u1;
        after[1].velocity = outcome.u2;
        log::debug!(
            "momentum {} -> {}, kinetic energy {} -> {}",
            crate::core::total_momentum(&before),
            crate::core::total_momentum(&after),
            crate::core::total_kinetic_energy(&before),
            crate::core::total_kinetic_energy(&after),
        );
    }
    writeln!(out, "{:?}", outcome.u1)?;
    writeln!(out, "{:?}", outcome.u2)?;
    Ok(())
}
