//! Floating hearts background.
//!
//! A fixed pool of hearts drifts upward across a full-viewport canvas:
//! - Per-frame simulation with in-place recycling at the edges
//! - Bézier heart outlines painted at per-heart opacity
//! - Canvas resizing that never disturbs the hearts in flight
//!
//! # Example
//!
//! ```ignore
//! use valentine_scrapbook::components::hearts::{HeartsCanvas, HeartStyle};
//!
//! view! { <HeartsCanvas style=HeartStyle::default() /> }
//! ```

mod component;
pub mod field;
pub mod render;
pub mod theme;

pub use component::HeartsCanvas;
pub use field::{Heart, HeartField};
pub use theme::{Color, HeartStyle};
