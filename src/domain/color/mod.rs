//! Background color and its persisted encoding

pub mod codec;
mod rgba;

pub use rgba::Rgba;
