//! Single-writer container for the current [`GameState`].

use tracing::debug;

use crate::state::{Action, GameState};

type Subscriber = Box<dyn FnMut(&GameState)>;

/// Holds the current snapshot and notifies subscribers whenever an action
/// replaces it.
pub struct Store {
    state: GameState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `action` and returns whether the snapshot changed.
    /// Subscribers only hear about actual changes.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.state.reduce(action);
        if next == self.state {
            debug!(%action, "action ignored");
            return false;
        }

        self.state = next;
        debug!(%action, step = self.state.current_step(), "state replaced");

        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}
