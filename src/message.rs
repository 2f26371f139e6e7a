//! Conversation turns and the roles that author them.

use crate::error::ChatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    System,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Assistant, Role::System, Role::User];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assistant" => Ok(Role::Assistant),
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            _ => Err(ChatError::InvalidRole(format!("unrecognized role {}", s))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversation turn. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_roles_round_trip_through_their_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn unknown_role_strings_are_rejected() {
        for bad in ["", "User", "USER", " user", "tool", "function", "assistant "] {
            let err = bad.parse::<Role>().unwrap_err();
            assert!(matches!(err, ChatError::InvalidRole(_)), "{bad:?} -> {err}");
        }
    }

    #[test]
    fn messages_compare_and_hash_structurally() {
        let a = Message::new(Role::User, "hello");
        let b = Message::new(Role::User, String::from("hello"));
        let c = Message::new(Role::System, "hello");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Message> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn message_serializes_as_role_content_record() {
        let json = serde_json::to_value(Message::new(Role::Assistant, "hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));
    }
}
