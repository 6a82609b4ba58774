#![deny(unsafe_code)]
//! Core types and traits for aerowave.
//!
//! Provides the `Simulation` trait and the `Scene` it produces, the data model
//! shared by the geometry and field crates (`PointCloud`, `VectorField`,
//! `RaySegment`, `ShapeKind`), the `Xorshift64` PRNG behind the
//! `RandomSource` trait, `Seed` records, and parameter helpers.

pub mod cloud;
pub mod error;
pub mod field;
pub mod params;
pub mod prng;
pub mod ray;
pub mod scene;
pub mod seed;
pub mod shape;

pub use cloud::{Point3, PointCloud};
pub use error::SimError;
pub use field::{Vector3, VectorField};
pub use prng::{RandomSource, Xorshift64};
pub use ray::RaySegment;
pub use scene::{Scene, SceneSink, Simulation};
pub use seed::Seed;
pub use shape::ShapeKind;
