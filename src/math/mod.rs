//! Geometry helpers

pub mod aabb;

pub use aabb::Aabb;
