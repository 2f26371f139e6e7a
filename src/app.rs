use crate::commands::{ChatState, TerminalController, dispatcher::CommandDispatcher};
use crate::controller::Controller;
use crate::display;
use crate::error::ChatError;
use crate::input;
use is_terminal::IsTerminal;
use std::io::{self, Read};
use tracing::warn;

/// Picks the one-shot prompt from the query argument and piped stdin.
/// `None` means there is nothing to send and the session is interactive.
fn single_prompt(
    query: Option<String>,
    piped: Option<String>,
) -> Result<Option<String>, ChatError> {
    match (query, piped) {
        (Some(query), Some(piped)) if !piped.trim().is_empty() => {
            Ok(Some(format!("{}\n\n{}", piped.trim_end(), query)))
        }
        (Some(query), _) => Ok(Some(query)),
        (None, Some(piped)) if !piped.trim().is_empty() => Ok(Some(piped)),
        (None, Some(_)) => Err(ChatError::Input("No query provided".to_string())),
        (None, None) => Ok(None),
    }
}

pub struct Application {
    query: Option<String>,
    state: ChatState,
    command_dispatcher: CommandDispatcher,
}

impl Application {
    pub fn new(
        query: Option<String>,
        controller: TerminalController,
        command_dispatcher: CommandDispatcher,
    ) -> Self {
        Self {
            query,
            state: ChatState::new(controller),
            command_dispatcher,
        }
    }

    pub async fn run(&mut self) -> Result<(), ChatError> {
        let context = if !io::stdin().is_terminal() {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ChatError::Input(format!("Failed to read from stdin: {}", e)))?;
            Some(buffer)
        } else {
            None
        };

        match single_prompt(self.query.take(), context)? {
            Some(prompt) => self.handle_single_prompt(&prompt).await,
            None => self.handle_interactive_mode().await,
        }
    }

    async fn submit(&mut self, content: &str) -> Result<(), ChatError> {
        let role = self.state.controller.view().role();
        self.state
            .controller
            .handle_prompt_message(role.as_str(), content)
            .await
    }

    async fn handle_single_prompt(&mut self, prompt: &str) -> Result<(), ChatError> {
        let content = prompt.trim();
        if content.is_empty() {
            return Err(ChatError::Input("No query provided".to_string()));
        }
        self.submit(content).await
    }

    async fn handle_interactive_mode(&mut self) -> Result<(), ChatError> {
        display::display_info(
            "Entering chat mode. Type '/help' for available commands. Press Ctrl+D or type /quit to exit.",
        );

        let mut editor = input::create_editor(self.command_dispatcher.clone())?;

        while self.state.should_continue {
            let role = self.state.controller.view().role();
            let Some(line) = input::read_input(&mut editor, role)? else {
                break;
            };

            let content = line.trim();
            if content.is_empty() {
                continue;
            }

            if content.starts_with('/') {
                match self.command_dispatcher.dispatch(content, &mut self.state) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => display::display_error(&e),
                }
                continue;
            }

            // Failures are reported here and the session goes on; the
            // unanswered prompt stays in the history.
            if let Err(e) = self.submit(content).await {
                warn!(error = %e, "prompt submission failed");
                display::display_error(&e);
            }
        }

        input::save_history(&mut editor)?;

        Ok(())
    }
}
