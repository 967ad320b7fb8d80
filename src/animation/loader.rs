//! One-shot, best-effort loading of the animation engine.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, info};

use super::engine::{AnimationEngine, TweenEngine};

pub type SharedEngine = Arc<dyn AnimationEngine>;

/// What the loader needs to decide whether animations are possible.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Disabled by config or `--no-animation`.
    pub enabled: bool,
    /// Value of `COLORTERM`, if set.
    pub colorterm: Option<String>,
}

impl LoaderOptions {
    pub fn from_env(enabled: bool) -> Self {
        Self {
            enabled,
            colorterm: std::env::var("COLORTERM").ok(),
        }
    }

    /// Fading needs 24-bit colour to blend cells.
    pub fn supports_truecolor(&self) -> bool {
        self.colorterm
            .as_deref()
            .is_some_and(|value| matches!(value, "truecolor" | "24bit"))
    }
}

fn load(options: &LoaderOptions) -> Option<SharedEngine> {
    if !options.enabled {
        info!("animations disabled");
        return None;
    }
    if !options.supports_truecolor() {
        info!(colorterm = ?options.colorterm, "terminal lacks truecolor, animations off");
        return None;
    }
    Some(Arc::new(TweenEngine))
}

enum SlotState {
    Loading(oneshot::Receiver<Option<SharedEngine>>),
    Ready(SharedEngine),
    Unavailable,
}

/// Holds the engine once (and if) it has loaded.
pub struct EngineSlot {
    state: SlotState,
}

impl EngineSlot {
    #[cfg(test)]
    pub fn ready(engine: SharedEngine) -> Self {
        Self {
            state: SlotState::Ready(engine),
        }
    }

    #[cfg(test)]
    pub const fn unavailable() -> Self {
        Self {
            state: SlotState::Unavailable,
        }
    }

    pub const fn loading(rx: oneshot::Receiver<Option<SharedEngine>>) -> Self {
        Self {
            state: SlotState::Loading(rx),
        }
    }

    /// Pick up the loader result if it has arrived. Never blocks.
    pub fn poll(&mut self) {
        let SlotState::Loading(rx) = &mut self.state else {
            return;
        };
        match rx.try_recv() {
            Ok(Some(engine)) => {
                debug!("animation engine loaded");
                self.state = SlotState::Ready(engine);
            }
            Ok(None) | Err(oneshot::error::TryRecvError::Closed) => {
                debug!("animation engine unavailable");
                self.state = SlotState::Unavailable;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
        }
    }

    pub fn engine(&self) -> Option<&dyn AnimationEngine> {
        match &self.state {
            SlotState::Ready(engine) => Some(engine.as_ref()),
            SlotState::Loading(_) | SlotState::Unavailable => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, SlotState::Loading(_))
    }

    pub const fn status(&self) -> &'static str {
        match self.state {
            SlotState::Loading(_) => "loading",
            SlotState::Ready(_) => "on",
            SlotState::Unavailable => "off",
        }
    }
}

/// Spawn the loader task. Called once per process; there is no retry.
pub fn spawn_engine_loader(options: LoaderOptions) -> EngineSlot {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(load(&options));
    });
    EngineSlot::loading(rx)
}
