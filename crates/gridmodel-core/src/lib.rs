//! Core value types and utilities for gridmodel.
//!
//! This crate provides the foundational types used by `gridmodel-layout`:
//! - Validation predicates for numeric and percent-string inputs
//! - Geometry values ([`Point`], [`Dimensions`], [`Region`])
//! - Relative lengths ([`Length`])
//! - Error types

pub mod dimensions;
pub mod errors;
pub mod point;
pub mod region;
pub mod types;
pub mod validation;

pub use dimensions::*;
pub use errors::*;
pub use point::*;
pub use region::*;
pub use types::*;
