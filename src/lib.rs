/*
 * Drift Field - Module Definitions
 *
 * This file defines the module structure for the ambient particle field
 * application. It organizes the code into logical components for better
 * maintainability.
 */

// Re-export key components for easier access
pub use burst::Burst;
pub use clock::FrameClock;
pub use debug::DebugInfo;
pub use field::{Field, Link};
pub use params::FieldParams;
pub use particle::Particle;
pub use theme::Theme;

// Define modules
pub mod app;
pub mod burst;
pub mod clock;
pub mod debug;
pub mod field;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod theme;
pub mod ui;

// Constants
pub const LINK_THRESHOLD: f32 = 120.0;
pub const LINK_DIM: f32 = 0.2;
pub const DEFAULT_PARTICLE_COUNT: usize = 70;
pub const PHYSICS_HZ: f32 = 60.0;
