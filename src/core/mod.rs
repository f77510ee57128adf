pub mod config;
pub mod debounce;
pub mod error;
pub mod layout;
pub mod particles;
pub mod playback;
pub mod render_loop;
pub mod signal;
pub mod surface;
pub mod visualizer;

pub use config::*;
pub use debounce::Debouncer;
pub use error::LandingError;
pub use layout::*;
pub use particles::*;
pub use playback::*;
pub use render_loop::*;
pub use signal::*;
pub use surface::*;
pub use visualizer::*;
