use dioxus::logger::tracing::{debug, trace};
use dioxus::prelude::*;

/// Load state of a single image instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// The image element is mounted, either still loading or loaded.
    #[default]
    Active,
    /// The image failed to load. Terminal.
    Errored,
}

impl LoadState {
    pub fn after_error(self) -> Self {
        LoadState::Errored
    }

    pub fn shows_image(self) -> bool {
        matches!(self, LoadState::Active)
    }
}

/// Per-instance handle to the load state of an image.
#[derive(Clone, Copy, Debug)]
pub struct ImageLoad {
    state: Signal<LoadState>,
}

impl ImageLoad {
    pub fn new(state: Signal<LoadState>) -> Self {
        Self { state }
    }

    pub fn is_errored(&self) -> bool {
        !self.state.read().shows_image()
    }

    /// Forwards a load-success signal to the caller's callback.
    /// Does nothing once the owning component has been dropped.
    pub fn loaded(&self, on_load: Option<EventHandler>) {
        let Ok(current) = self.state.try_peek().map(|state| *state) else {
            return;
        };
        trace!("Image loaded (state: {:?})", current);
        if let Some(on_load) = on_load {
            on_load.call(());
        }
    }

    /// Moves to the errored state. The signal is only written on the first
    /// failure, so subscribers re-render at most once.
    pub fn failed(&mut self) {
        let Ok(current) = self.state.try_peek().map(|state| *state) else {
            return;
        };
        let next = current.after_error();
        if next != current {
            debug!("Image failed to load, showing fallback");
            self.state.set(next);
        }
    }
}

/// Creates the load state for the calling component, starting as [`LoadState::Active`].
pub fn use_image_load() -> ImageLoad {
    let state = use_signal(LoadState::default);
    ImageLoad::new(state)
}
