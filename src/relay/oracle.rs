use super::{AssistanceRelay, ChatMessage, RelayContext, RelayError, Role};
use crate::cipher;

/// Offline guide. Answers from the context snapshot and whatever cipher
/// symbols the player pasted into the question.
#[derive(Debug, Clone)]
pub struct OracleRelay {
    name: String,
}

impl OracleRelay {
    pub fn new(name: impl Into<String>) -> Self {
        OracleRelay { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AssistanceRelay for OracleRelay {
    fn reply(&self, history: &[ChatMessage], context: &RelayContext) -> Result<String, RelayError> {
        let question = history
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.trim())
            .filter(|q| !q.is_empty())
            .ok_or(RelayError::EmptyQuestion)?;

        let mut reply = format!(
            "I see you're working on Trial {}. Let me help you think about this puzzle.",
            context.level_id
        );

        let symbols: String = question.chars().filter(|c| cipher::is_symbol(*c)).collect();
        if let Some(first) = symbols.chars().next() {
            // Name the symbols but only decode the first, the rest is the player's work.
            let plain = cipher::decode(&first.to_string());
            reply.push_str(&format!(
                "\nI count {} symbols: {symbols}. Notice that {first} stands for '{plain}'. \
                 Look for how the others follow the same table.",
                symbols.chars().count()
            ));
        }

        if context.hint.is_empty() {
            reply.push_str("\nAsk the trial for a hint (F1) if the pattern still hides from you.");
        } else {
            reply.push_str(&format!("\nCurrent hint: {}", context.hint));
        }
        reply.push_str("\nWhat specific aspect would you like help with?");

        Ok(reply)
    }
}
