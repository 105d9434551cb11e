//! In-memory session store.
//!
//! Owns the user-id to session mapping; other components never touch the map
//! directly. Sessions are created lazily, never evicted, and live for the
//! process lifetime. There is no capacity bound on the key space.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use pantryforge_core::{ChatMessage, NormalizedReply, PantryState};

use crate::session_state::PantrySession;

/// Shared map of active sessions.
///
/// A single `apply_turn` is internally consistent (one write lock), but two
/// concurrent turns for the same user are not serialized against each other:
/// both may snapshot the same pre-turn state and their appends interleave in
/// completion order.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, PantrySession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the session for `user_id`, creating an empty one on first
    /// sight. Repeated calls with the same id never create duplicates.
    pub async fn get_or_create(&self, user_id: &str) -> PantrySession {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id.to_string())
            .or_insert_with(PantrySession::new)
            .clone()
    }

    /// Apply one turn's effects: append newly reported ingredients (no
    /// merge-by-name), overwrite the headcount when present, and append the
    /// user message and reply text to the history. Returns the post-turn
    /// pantry snapshot.
    pub async fn apply_turn(
        &self,
        user_id: &str,
        reply: &NormalizedReply,
        user_message: &str,
    ) -> PantryState {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(user_id.to_string())
            .or_insert_with(PantrySession::new);

        session
            .pantry
            .ingredients
            .extend(reply.new_ingredients.iter().cloned());
        if let Some(n) = reply.num_people {
            session.pantry.num_people = Some(n);
        }

        session.history.push(ChatMessage::user(user_message));
        session.history.push(ChatMessage::assistant(&reply.message));

        session.pantry.clone()
    }

    /// Number of sessions currently held.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantryforge_core::{AgentAction, Ingredient};

    fn reply_with(ingredients: Vec<Ingredient>, num_people: Option<u32>) -> NormalizedReply {
        NormalizedReply {
            action: AgentAction::Ask,
            message: "noted".into(),
            new_ingredients: ingredients,
            num_people,
            recipe_names: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_get_or_create_starts_empty() {
        let store = SessionStore::new();
        let session = store.get_or_create("alice").await;
        assert!(session.pantry.ingredients.is_empty());
        assert!(session.pantry.num_people.is_none());
        assert!(session.history.is_empty());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_get_or_create_preserves_state() {
        let store = SessionStore::new();
        store.get_or_create("alice").await;
        store
            .apply_turn("alice", &reply_with(vec![Ingredient::new("pasta")], None), "add pasta")
            .await;

        let again = store.get_or_create("alice").await;
        assert_eq!(again.pantry.ingredients.len(), 1);
        assert_eq!(again.history.len(), 2);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_apply_turn_appends_without_dedup() {
        let store = SessionStore::new();
        store
            .apply_turn("bob", &reply_with(vec![Ingredient::new("eggs")], None), "eggs")
            .await;
        let pantry = store
            .apply_turn("bob", &reply_with(vec![Ingredient::new("eggs")], None), "more eggs")
            .await;

        // Repeated reports of the same name produce duplicate entries.
        assert_eq!(pantry.ingredients.len(), 2);
    }

    #[tokio::test]
    async fn test_apply_turn_overwrites_headcount() {
        let store = SessionStore::new();
        store.apply_turn("carol", &reply_with(vec![], Some(2)), "two of us").await;
        let pantry = store
            .apply_turn("carol", &reply_with(vec![], Some(5)), "actually five")
            .await;
        assert_eq!(pantry.num_people, Some(5));

        // Absent headcount leaves the stored value alone.
        let pantry = store.apply_turn("carol", &reply_with(vec![], None), "hi").await;
        assert_eq!(pantry.num_people, Some(5));
    }

    #[tokio::test]
    async fn test_history_records_both_sides() {
        let store = SessionStore::new();
        store.apply_turn("dave", &reply_with(vec![], None), "hello").await;

        let session = store.get_or_create("dave").await;
        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[0].content, "hello");
        assert_eq!(session.history[1].content, "noted");
    }
}
