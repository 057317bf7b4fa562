pub mod canvas_renderer;
pub mod frame_scheduler;
pub mod surface;

pub use canvas_renderer::CanvasSurface;
pub use frame_scheduler::{AnimationFrameTicks, RedrawScheduler, RedrawTask, TickSource};
pub use surface::{ChartSurface, paint_candles, paint_crosshair};
