pub mod error;
pub mod traits;
pub mod types;

pub use error::PantryError;
pub use traits::{ImageSearch, LlmProvider, LlmRequest, LlmResponse};
pub use types::{
    AgentAction, ChatMessage, ChatRole, Ingredient, ModelConfig, NormalizedReply, PantryState,
    RecipeCard, UNKNOWN,
};
