//! Chat turn types.
//!
//! A conversation is an ordered list of turns. The relay never stores one;
//! the caller supplies the history and gets it back extended by exactly two
//! turns per successful exchange.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One exchange turn. Appended to the history, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Renders the turn as the `{"role", "content"}` JSON object appended to
    /// the caller-supplied history.
    pub fn into_value(self) -> serde_json::Value {
        serde_json::json!({
            "role": self.role.to_string(),
            "content": self.content,
        })
    }
}
