//! Prompt assembly for one conversation turn.

use pantryforge_core::ChatMessage;

use crate::session_state::PantrySession;

/// Fixed instructions sent at the head of every turn: the assistant's role,
/// the mandatory JSON output contract, and the domain rules.
const SYSTEM_INSTRUCTIONS: &str = "\
You are an expert kitchen assistant managing the user's pantry.
Rules:
1. Identify ingredients (name, quantity, expiry) and the number of people to cook for from the user's messages.
2. ALWAYS answer with a single JSON object and nothing else.
3. Do not propose recipes until quantities, expiries and the number of people are known; ask for whatever is missing.
4. Once enough is known, set \"action\" to \"generate_recipes\" and put the dish names in \"recipe_names\".
Required JSON shape:
{\"action\": \"ask\" or \"generate_recipes\", \"message\": \"<your reply text>\", \"new_ingredients\": [{\"name\": \"...\", \"quantity\": \"...\", \"expiry\": \"...\"}], \"recipe_names\": [\"...\"], \"num_people\": <number>}";

pub struct PromptBuilder;

impl PromptBuilder {
    /// Builds the role-tagged message list for one turn: system
    /// instructions, the full prior history in order, the new user message,
    /// and a trailing system note carrying the current pantry snapshot.
    pub fn build_turn(session: &PantrySession, user_message: &str) -> Vec<ChatMessage> {
        let snapshot = serde_json::to_string(&session.pantry)
            .unwrap_or_else(|_| "{}".to_string());

        let mut messages = Vec::with_capacity(session.history.len() + 3);
        messages.push(ChatMessage::system(SYSTEM_INSTRUCTIONS));
        messages.extend(session.history.iter().cloned());
        messages.push(ChatMessage::user(user_message));
        messages.push(ChatMessage::system(format!("Current pantry: {}", snapshot)));

        messages
    }
}
