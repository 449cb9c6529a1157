//! Bind values and literal translation.

pub mod binding;

pub use binding::{to_literals, Binding};
