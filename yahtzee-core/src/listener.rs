//! Observer hooks fired by [`YahtzeeGame`](crate::YahtzeeGame).
//!
//! Listeners are shared handles (`Rc`). Registration is by identity: adding the
//! same handle twice keeps one entry. Dispatch is synchronous, in registration
//! order, on the thread that mutated the game.

use std::rc::Rc;

use crate::game::YahtzeeGame;

/// Called after every successful roll or scoring.
pub trait GameUpdateListener {
    fn on_game_updated(&self, game: &YahtzeeGame);
}

/// Called once, after the update notification of the scoring that ended the game.
pub trait GameFinishedListener {
    fn on_game_finished(&self, game: &YahtzeeGame);
}

/// Ordered set of listener handles, compared by address.
pub(crate) struct Listeners<L: ?Sized> {
    entries: Vec<Rc<L>>,
}

impl<L: ?Sized> Listeners<L> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns false if the handle was already registered.
    pub(crate) fn add(&mut self, listener: Rc<L>) -> bool {
        if self.entries.iter().any(|l| same_listener(l, &listener)) {
            return false;
        }
        self.entries.push(listener);
        true
    }

    /// Returns false if the handle was not registered.
    pub(crate) fn remove<M: ?Sized>(&mut self, listener: &Rc<M>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| !same_listener(l, listener));
        self.entries.len() != before
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Rc<L>> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

fn same_listener<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}
