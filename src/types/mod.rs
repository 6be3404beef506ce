//! Shared domain types.

pub mod common;

pub use common::{Money, Shaped};
