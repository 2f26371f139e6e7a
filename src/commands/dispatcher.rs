use super::{
    ChatState,
    handler::{
        ClearCommand, HelpCommand, HistoryCommand, KnobCommand, QuitCommand, RoleCommand,
        SettingsCommand,
    },
    registry::CommandRegistry,
};
use crate::error::ChatError;
use crate::sampling::Knob;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Runs a `/command arg...` line. The leading slash is optional.
    pub fn dispatch(&self, line: &str, state: &mut ChatState) -> Result<Option<String>, ChatError> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.split_first() {
            Some((command, args)) => self.execute(command, args, state),
            None => Ok(None),
        }
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[&str],
        state: &mut ChatState,
    ) -> Result<Option<String>, ChatError> {
        self.registry.execute(command, args, state)
    }

    pub fn get_command_names(&self) -> Vec<String> {
        self.registry.get_command_names()
    }
}

pub fn create_command_registry() -> CommandDispatcher {
    let mut registry = CommandRegistry::new();

    registry.register("quit", QuitCommand);
    registry.register("clear", ClearCommand);
    registry.register("history", HistoryCommand);
    registry.register("role", RoleCommand);
    registry.register("settings", SettingsCommand);
    registry.register("temperature", KnobCommand(Knob::Temperature));
    registry.register("top_p", KnobCommand(Knob::TopProbability));
    registry.register("presence", KnobCommand(Knob::PresencePenalty));
    registry.register("frequency", KnobCommand(Knob::FrequencyPenalty));

    let help = HelpCommand::new(registry.help_lines());
    registry.register("help", help);

    CommandDispatcher::new(Arc::new(registry))
}
