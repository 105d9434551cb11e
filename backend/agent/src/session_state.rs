//! Per-user conversation session state.

use pantryforge_core::{ChatMessage, PantryState};

/// Active state of one user's session: the tracked pantry and the full,
/// un-compacted conversation history.
///
/// Pantry and history are always created together; a session never exists
/// with one but not the other.
#[derive(Debug, Clone, Default)]
pub struct PantrySession {
    pub pantry: PantryState,
    pub history: Vec<ChatMessage>,
}

impl PantrySession {
    pub fn new() -> Self {
        Self::default()
    }
}
