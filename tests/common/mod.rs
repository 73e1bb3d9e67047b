// Host-side harness for the platform-free core.
// The main crate is wasm-only, so the pure modules are included directly,
// laid out under one parent so their `super::` imports resolve.

pub mod engine {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod theme {
        include!("../../src/core/theme.rs");
    }
    pub mod palette {
        include!("../../src/core/palette.rs");
    }
    pub mod glass {
        include!("../../src/core/glass.rs");
    }
    pub mod context {
        include!("../../src/core/context.rs");
    }
    pub mod noise {
        include!("../../src/core/noise.rs");
    }
    pub mod shading {
        include!("../../src/core/shading.rs");
    }
    pub mod elastic {
        include!("../../src/core/elastic.rs");
    }
    pub mod schedule {
        include!("../../src/core/schedule.rs");
    }
    pub mod debug {
        include!("../../src/core/debug.rs");
    }
    pub mod settings {
        include!("../../src/core/settings.rs");
    }
}

pub const EPS: f32 = 1e-5;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS
}
