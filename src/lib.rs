//! Terminal chat client for OpenAI-style chat completion endpoints.
//!
//! The crate is split along Model / View / Controller lines: [`model`] owns the
//! conversation history, [`view`] is the presentation surface holding the
//! current sampling knobs, and [`controller`] validates submissions and keeps
//! the two in sync. Completion requests go through [`providers`].

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod input;
pub mod message;
pub mod model;
pub mod providers;
pub mod sampling;
pub mod view;

pub use controller::{ChatBotController, Controller};
pub use error::ChatError;
pub use message::{Message, Role};
pub use model::{ChatBotModel, Model};
pub use providers::{CompletionAccessor, CompletionTransport, HttpClient};
pub use sampling::SamplingParameters;
pub use view::{TerminalView, View};
