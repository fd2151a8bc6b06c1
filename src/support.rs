//! Supporting utilities shared across the engine.
//!
//! These are public because they appear in public signatures (page sizes,
//! magnitudes), but their APIs are not stable.

pub mod constraint;
