pub mod dispatcher;
pub mod handler;
pub mod registry;

use crate::controller::ChatBotController;
use crate::model::ChatBotModel;
use crate::view::TerminalView;
pub use dispatcher::create_command_registry;

pub type TerminalController = ChatBotController<ChatBotModel, TerminalView>;

/// Everything a slash command may act on during an interactive session.
pub struct ChatState {
    pub controller: TerminalController,
    pub should_continue: bool,
}

impl ChatState {
    pub fn new(controller: TerminalController) -> Self {
        Self {
            controller,
            should_continue: true,
        }
    }
}
