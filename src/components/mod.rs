pub mod countdown;
pub mod gallery;
pub mod hearts;
pub mod music;
pub mod reveal;
pub mod scroll;
pub mod sparkle;
