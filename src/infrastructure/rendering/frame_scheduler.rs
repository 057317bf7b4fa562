//! Coalesced "repaint on the next frame" scheduling.
//!
//! Each surface owns one [`RedrawScheduler`]. Requests made before the next
//! frame collapse into a single slot: only the newest task runs, so a frame
//! always paints the latest state.

use std::cell::RefCell;
use std::rc::Rc;

pub type RedrawTask = Box<dyn FnOnce() + 'static>;

/// Something that can call back once on the next display refresh
pub trait TickSource {
    fn request_tick(&self, callback: RedrawTask);
}

pub struct RedrawScheduler<T: TickSource> {
    ticks: T,
    slot: Rc<RefCell<Option<RedrawTask>>>,
}

impl<T: TickSource> RedrawScheduler<T> {
    pub fn new(ticks: T) -> Self {
        Self { ticks, slot: Rc::new(RefCell::new(None)) }
    }

    /// Run `task` on the next tick, replacing any task still waiting.
    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        let superseded = self.slot.borrow_mut().replace(Box::new(task)).is_some();
        if superseded {
            return;
        }
        let slot = Rc::clone(&self.slot);
        self.ticks.request_tick(Box::new(move || {
            let task = slot.borrow_mut().take();
            if let Some(task) = task {
                task();
            }
        }));
    }

    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }
}

/// `requestAnimationFrame` tick source
#[derive(Default)]
pub struct AnimationFrameTicks {
    // Dropping an `AnimationFrame` cancels it, so the latest one is kept alive here.
    pending: RefCell<Option<gloo::render::AnimationFrame>>,
}

impl TickSource for AnimationFrameTicks {
    fn request_tick(&self, callback: RedrawTask) {
        let frame = gloo::render::request_animation_frame(move |_timestamp| callback());
        *self.pending.borrow_mut() = Some(frame);
    }
}
