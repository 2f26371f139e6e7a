use std::io;
use thiserror::Error;

/// Unified error type for the chat client
#[derive(Error, Debug)]
pub enum ChatError {
    /// A role string that names none of `assistant`, `system`, `user`
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// A prompt the controller refuses to forward
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    /// Sampling parameter outside its closed interval
    #[error("{name} not in range, expected <{min}, {max}>, got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("No message provided for the query")]
    EmptyConversation,

    /// Network, authentication and response decoding failures
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input errors
    #[error("Input error: {0}")]
    Input(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Transport(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ChatError::Transport(format!("Connection failed: {}", err))
        } else if err.is_status() {
            ChatError::Transport(format!("API returned error status: {}", err))
        } else {
            ChatError::Transport(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Transport(format!("Malformed completion response: {}", err))
    }
}

impl From<serde_yml::Error> for ChatError {
    fn from(err: serde_yml::Error) -> Self {
        ChatError::Config(format!("YAML error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_parameter_interval_and_value() {
        let err = ChatError::ParameterOutOfRange {
            name: "temperature",
            min: 0.0,
            max: 2.0,
            value: 2.5,
        };
        assert_eq!(
            err.to_string(),
            "temperature not in range, expected <0, 2>, got 2.5"
        );
    }

    #[test]
    fn json_errors_are_transport_errors() {
        let err: ChatError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ChatError::Transport(_)));
    }
}
