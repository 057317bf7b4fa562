//! Market data aggregate: candle value objects, the immutable series and the
//! source it is loaded from.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
