//! Countdown to the next Valentine's Day.

pub mod calc;
mod component;

pub use calc::{CountdownText, compute};
pub use component::Countdown;
