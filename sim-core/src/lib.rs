//! Core library for the growing-circles simulation.
//!
//! Main components:
//! - [`circle`] — the circle entity and the fixed-size set of circles.
//! - [`config`] — simulation constants (population, radii, world size).
//! - [`phases`] — the four per-tick passes: movement, growth, overlap, shrink.
//! - [`simulation`] — the tick driver owning circles and the seeded RNG.
//! - [`entity_store`] — a category/id keyed component registry.
//! - [`types`] — shared type aliases and IDs.

pub mod circle;
pub mod config;
pub mod entity_store;
pub mod phases;
pub mod simulation;
pub mod types;
