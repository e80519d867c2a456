//! Client-only photo gallery.
//!
//! Photos are kept in page memory as data URLs and disappear on reload.

mod component;
pub mod state;

pub use component::PhotoGallery;
pub use state::Gallery;
