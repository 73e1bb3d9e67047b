pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_debug_keys;
pub use pointer::{PointerGesture, PointerWiring};
