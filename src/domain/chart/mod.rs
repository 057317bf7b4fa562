//! Chart aggregate: viewport state, window resolution, frame geometry and
//! the gesture math that updates the viewport.

pub mod config;
pub mod crosshair;
pub mod frame;
pub mod gestures;
pub mod value_objects;
pub mod viewport;
pub mod window;

pub use config::*;
pub use crosshair::*;
pub use frame::*;
pub use gestures::*;
pub use value_objects::*;
pub use viewport::*;
pub use window::*;
