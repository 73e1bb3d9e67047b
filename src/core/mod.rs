pub mod constants;
pub mod context;
pub mod debug;
pub mod elastic;
pub mod error;
pub mod glass;
pub mod noise;
pub mod palette;
pub mod schedule;
pub mod settings;
pub mod shading;
pub mod theme;

pub use context::*;
pub use elastic::*;
pub use error::*;
pub use glass::*;
pub use palette::*;
pub use schedule::*;
pub use shading::*;
pub use theme::*;

// Shaders bundled as string constants
pub static GLASS_WGSL: &str = include_str!("../../shaders/glass.wgsl");
