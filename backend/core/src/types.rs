use serde::{Deserialize, Serialize};

/// Sentinel stored when the model reports an ingredient without a
/// quantity or expiry. Never parsed or validated downstream.
pub const UNKNOWN: &str = "unknown";

fn unknown_field() -> String {
    UNKNOWN.to_string()
}

/// A single pantry item as reported by the user.
///
/// All fields are free text. Duplicate names are allowed; the pantry is an
/// append-only log of what the user said, not a deduplicated inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default = "unknown_field")]
    pub quantity: String,
    #[serde(default = "unknown_field")]
    pub expiry: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: unknown_field(),
            expiry: unknown_field(),
        }
    }
}

/// The tracked pantry for one session: ingredient list plus headcount.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PantryState {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_people: Option<u32>,
}

/// Role tag for one conversation turn, in the OpenAI-style wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One role-tagged message, used both for conversation history and for the
/// provider wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// What the model decided to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentAction {
    /// Keep gathering information from the user.
    Ask,
    /// Enough is known; the reply carries recipe names.
    GenerateRecipes,
}

/// Structured result of one turn, after normalizing the raw model output.
///
/// Ephemeral: constructed per turn, applied to the session, then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedReply {
    pub action: AgentAction,
    pub message: String,
    pub new_ingredients: Vec<Ingredient>,
    pub num_people: Option<u32>,
    pub recipe_names: Vec<String>,
}

impl NormalizedReply {
    /// The degraded reply used when the model output carried no usable JSON:
    /// the raw text is surfaced verbatim and the turn asks for more input.
    pub fn fallback(raw_text: &str) -> Self {
        Self {
            action: AgentAction::Ask,
            message: raw_text.to_string(),
            new_ingredients: Vec::new(),
            num_people: None,
            recipe_names: Vec::new(),
        }
    }
}

/// A proposed recipe decorated with an illustrative image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub name: String,
    pub image_url: String,
}

/// Configuration for the model used by the agent.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_name: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_name: "llama-3.1-8b-instant".to_string(),
            max_tokens: 1024,
            temperature: 0.1,
        }
    }
}
