//! Functional core for fleetwise.
//!
//! Everything in this crate is a pure computation over in-memory values:
//! fleet generation draws from an injected [`random::RandomSource`], and the
//! scoring, aggregation and recommendation steps are plain functions over
//! slices of [`fleet::TableRecord`].

pub mod assistant;
pub mod fleet;
pub mod random;
pub mod serde;
