//! Core types for one-dimensional elastic collisions of two point masses.

pub mod body;
pub mod collision;
pub mod scenario;

pub use body::{momentum, Body};
pub use collision::{
    collide, post_collision_velocities, total_kinetic_energy, total_momentum,
    try_post_collision_velocities, Outcome,
};
pub use scenario::Scenario;
