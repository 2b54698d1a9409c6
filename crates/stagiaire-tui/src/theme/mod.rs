pub mod colors;
pub mod styles;

pub use colors::{palette, Palette, DARK, LIGHT};
pub use styles::*;
