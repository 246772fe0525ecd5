//! Players: a display name plus who makes the decisions.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::policy::TurnPolicy;

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u64);

impl PlayerId {
    fn next() -> Self {
        PlayerId(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Who decides a player's moves.
#[derive(Clone)]
pub enum PlayerKind {
    /// Moves arrive from outside (UI).
    Human,
    /// Moves come from the policy during `play_computer_turns`.
    Computer(Rc<dyn TurnPolicy>),
}

/// A participant. Clones share the identity; two players constructed with the
/// same name are still different players.
#[derive(Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::next(),
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(name: impl Into<String>, policy: impl TurnPolicy + 'static) -> Self {
        Self::computer_shared(name, Rc::new(policy))
    }

    /// Computer player whose policy handle is shared with the caller.
    pub fn computer_shared(name: impl Into<String>, policy: Rc<dyn TurnPolicy>) -> Self {
        Self {
            id: PlayerId::next(),
            name: name.into(),
            kind: PlayerKind::Computer(policy),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer(_))
    }

    pub fn policy(&self) -> Option<&Rc<dyn TurnPolicy>> {
        match &self.kind {
            PlayerKind::Computer(p) => Some(p),
            PlayerKind::Human => None,
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id.0)
            .field("name", &self.name)
            .field("computer", &self.is_computer())
            .finish()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayerKind::Human => write!(f, "HumanPlayer(\"{}\")", self.name),
            PlayerKind::Computer(_) => write!(f, "ComputerPlayer(\"{}\")", self.name),
        }
    }
}
