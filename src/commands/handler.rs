use super::ChatState;
use crate::controller::Controller;
use crate::display;
use crate::error::ChatError;
use crate::message::Role;
use crate::sampling::Knob;

use console::style;

pub trait CommandHandler: Send + Sync {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError>;
    fn help(&self) -> &'static str;
}

pub struct QuitCommand;
pub struct ClearCommand;
pub struct HistoryCommand;
pub struct RoleCommand;
pub struct SettingsCommand;

/// Shows or moves one sampling slider.
pub struct KnobCommand(pub Knob);

pub struct HelpCommand {
    lines: Vec<&'static str>,
}

impl HelpCommand {
    pub fn new(lines: Vec<&'static str>) -> Self {
        Self { lines }
    }
}

impl CommandHandler for QuitCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.should_continue = false;
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/quit - Exit the chat session"
    }
}

impl CommandHandler for HelpCommand {
    fn execute(&self, _state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        let mut help_text = vec![style("Available Commands").bold().underlined().to_string()];
        help_text.extend(self.lines.iter().map(|line| line.to_string()));
        help_text.push(self.help().to_string());
        Ok(Some(help_text.join("\n")))
    }

    fn help(&self) -> &'static str {
        "/help - Show available commands"
    }
}

impl CommandHandler for ClearCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.controller.clear_history();
        Ok(Some("Chat history cleared.".to_string()))
    }

    fn help(&self) -> &'static str {
        "/clear - Clear conversation history"
    }
}

impl CommandHandler for HistoryCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.controller.update_history();
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/history - Redraw the conversation"
    }
}

impl CommandHandler for RoleCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError> {
        match args.first() {
            None => Ok(Some(format!(
                "Current role: {}",
                state.controller.view().role()
            ))),
            Some(name) => {
                let role: Role = name.parse()?;
                state.controller.view_mut().set_role(role)?;
                Ok(Some(format!("Role changed to: {}", role)))
            }
        }
    }

    fn help(&self) -> &'static str {
        "/role <system|user> - Show or change the role of submitted prompts"
    }
}

impl CommandHandler for SettingsCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        let view = state.controller.view();
        display::display_settings(
            &view.settings(),
            view.role(),
            state.controller.model().accessor().model(),
        );
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/settings - Show the current model, role and sampling values"
    }
}

impl CommandHandler for KnobCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError> {
        let knob = self.0;
        let Some(raw) = args.first() else {
            let value = state.controller.view().settings().get(knob);
            return Ok(Some(format!("{}: {}", knob.label(), value)));
        };

        let value: f64 = raw
            .parse()
            .map_err(|_| ChatError::Input(format!("Not a number: {}", raw)))?;
        state.controller.view_mut().set_knob(knob, value)?;
        Ok(Some(format!("{} set to {}", knob.label(), value)))
    }

    fn help(&self) -> &'static str {
        match self.0 {
            Knob::Temperature => "/temperature <0..2> - Show or set the sampling temperature",
            Knob::TopProbability => "/top_p <0..1> - Show or set the top probability",
            Knob::PresencePenalty => "/presence <-2..2> - Show or set the presence penalty",
            Knob::FrequencyPenalty => "/frequency <-2..2> - Show or set the frequency penalty",
        }
    }
}
