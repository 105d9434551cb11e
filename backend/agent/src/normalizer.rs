//! Raw model output to structured reply.
//!
//! The model is instructed to answer with a single JSON object, but language
//! models slip: extra prose around the object, markdown fences, missing
//! fields. Normalization recovers what it can and degrades to a fallback
//! reply instead of erroring, so a turn always produces something to show
//! the user.

use serde::Deserialize;

use pantryforge_core::{AgentAction, Ingredient, NormalizedReply, UNKNOWN};

/// Tolerant mirror of the expected model output: every field optional, so a
/// partially-formed object still yields whatever it did carry.
#[derive(Debug, Deserialize)]
struct RawReply {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    new_ingredients: Vec<RawIngredient>,
    #[serde(default)]
    recipe_names: Vec<String>,
    #[serde(default)]
    num_people: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawIngredient {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    expiry: Option<String>,
}

/// Convert raw model output into a well-formed reply. Never fails.
///
/// Extraction is a greedy match from the first `{` to the last `}`. It is a
/// pragmatic recovery, not a parser: prose that itself contains braces can
/// defeat it, in which case the fallback applies.
pub fn normalize(raw_text: &str) -> NormalizedReply {
    let parsed = extract_object(raw_text)
        .and_then(|candidate| serde_json::from_str::<RawReply>(candidate).ok());

    match parsed {
        Some(raw) => match raw.message {
            Some(message) => NormalizedReply {
                // Anything other than an explicit recipe signal counts as a
                // request for more information.
                action: match raw.action.as_deref() {
                    Some("generate_recipes") => AgentAction::GenerateRecipes,
                    _ => AgentAction::Ask,
                },
                message,
                new_ingredients: raw
                    .new_ingredients
                    .into_iter()
                    .filter_map(|ing| {
                        ing.name.map(|name| Ingredient {
                            name,
                            quantity: ing.quantity.unwrap_or_else(|| UNKNOWN.to_string()),
                            expiry: ing.expiry.unwrap_or_else(|| UNKNOWN.to_string()),
                        })
                    })
                    .collect(),
                num_people: raw.num_people,
                recipe_names: raw.recipe_names,
            },
            None => NormalizedReply::fallback(raw_text),
        },
        None => NormalizedReply::fallback(raw_text),
    }
}

fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prose_falls_back() {
        let reply = normalize("Hi! I'm your kitchen assistant. What's in your pantry?");
        assert_eq!(reply.action, AgentAction::Ask);
        assert_eq!(
            reply.message,
            "Hi! I'm your kitchen assistant. What's in your pantry?"
        );
        assert!(reply.new_ingredients.is_empty());
        assert!(reply.recipe_names.is_empty());
    }

    #[test]
    fn test_object_embedded_in_prose_is_extracted() {
        let raw = r#"Sure! {"action":"ask","message":"How many people?"} thanks"#;
        let reply = normalize(raw);
        assert_eq!(reply.action, AgentAction::Ask);
        assert_eq!(reply.message, "How many people?");
    }

    #[test]
    fn test_fenced_object_is_extracted() {
        let raw = "```json\n{\"action\":\"ask\",\"message\":\"Noted.\"}\n```";
        let reply = normalize(raw);
        assert_eq!(reply.message, "Noted.");
    }

    #[test]
    fn test_full_reply_shape() {
        let raw = r#"{
            "action": "generate_recipes",
            "message": "Here are two ideas.",
            "new_ingredients": [{"name": "pasta", "quantity": "500g", "expiry": "2026-09-01"}],
            "recipe_names": ["Carbonara", "Cacio e Pepe"],
            "num_people": 4
        }"#;
        let reply = normalize(raw);
        assert_eq!(reply.action, AgentAction::GenerateRecipes);
        assert_eq!(reply.new_ingredients.len(), 1);
        assert_eq!(reply.new_ingredients[0].quantity, "500g");
        assert_eq!(reply.recipe_names, vec!["Carbonara", "Cacio e Pepe"]);
        assert_eq!(reply.num_people, Some(4));
    }

    #[test]
    fn test_missing_ingredient_fields_get_sentinels() {
        let raw = r#"{"action":"ask","message":"ok","new_ingredients":[{"name":"milk"}]}"#;
        let reply = normalize(raw);
        assert_eq!(reply.new_ingredients[0].quantity, UNKNOWN);
        assert_eq!(reply.new_ingredients[0].expiry, UNKNOWN);
    }

    #[test]
    fn test_nameless_ingredient_is_dropped() {
        let raw = r#"{"action":"ask","message":"ok","new_ingredients":[{"quantity":"2"},{"name":"rice"}]}"#;
        let reply = normalize(raw);
        assert_eq!(reply.new_ingredients.len(), 1);
        assert_eq!(reply.new_ingredients[0].name, "rice");
    }

    #[test]
    fn test_unrecognized_action_degrades_to_ask() {
        let raw = r#"{"action":"celebrate","message":"Party time"}"#;
        let reply = normalize(raw);
        assert_eq!(reply.action, AgentAction::Ask);
        assert_eq!(reply.message, "Party time");
    }

    #[test]
    fn test_object_without_message_falls_back_verbatim() {
        let raw = r#"{"action":"ask"}"#;
        let reply = normalize(raw);
        assert_eq!(reply.message, raw);
    }

    #[test]
    fn test_unbalanced_braces_fall_back() {
        let reply = normalize("this { is not json");
        assert_eq!(reply.action, AgentAction::Ask);
        assert_eq!(reply.message, "this { is not json");
    }

    #[test]
    fn test_empty_input() {
        let reply = normalize("");
        assert_eq!(reply.message, "");
        assert_eq!(reply.action, AgentAction::Ask);
    }
}
