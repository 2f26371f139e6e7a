use crate::display;
use crate::error::ChatError;
use crate::message::Role;
use crate::sampling::{Knob, SamplingParameters};
use is_terminal::IsTerminal;
use tracing::debug;

/// Presentation surface the controller talks to.
pub trait View: Send {
    fn temperature(&self) -> f64;
    fn top_probability(&self) -> f64;
    fn presence_penalty(&self) -> f64;
    fn frequency_penalty(&self) -> f64;

    fn render_message(&mut self, role: Role, content: &str);
    fn clear_transcript(&mut self);
}

/// Terminal transcript plus the current knob and role selections.
pub struct TerminalView {
    settings: SamplingParameters,
    role: Role,
    interactive: bool,
}

impl TerminalView {
    pub fn new(settings: SamplingParameters, role: Role) -> Result<Self, ChatError> {
        settings.validate()?;
        check_submission_role(role)?;
        Ok(Self {
            settings,
            role,
            interactive: std::io::stdout().is_terminal(),
        })
    }

    pub fn settings(&self) -> SamplingParameters {
        self.settings
    }

    pub fn set_knob(&mut self, knob: Knob, value: f64) -> Result<(), ChatError> {
        self.settings.set(knob, value)
    }

    /// Role attached to the next submitted prompt.
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) -> Result<(), ChatError> {
        check_submission_role(role)?;
        self.role = role;
        Ok(())
    }
}

/// Only `system` and `user` are offered for submission.
fn check_submission_role(role: Role) -> Result<(), ChatError> {
    if role == Role::Assistant {
        return Err(ChatError::InvalidSubmission(
            "prompt message cannot have the assistant as the sender".to_string(),
        ));
    }
    Ok(())
}

impl View for TerminalView {
    fn temperature(&self) -> f64 {
        self.settings.temperature
    }

    fn top_probability(&self) -> f64 {
        self.settings.top_probability
    }

    fn presence_penalty(&self) -> f64 {
        self.settings.presence_penalty
    }

    fn frequency_penalty(&self) -> f64 {
        self.settings.frequency_penalty
    }

    fn render_message(&mut self, role: Role, content: &str) {
        display::display_message(role, content);
    }

    fn clear_transcript(&mut self) {
        if self.interactive {
            if let Err(e) = console::Term::stdout().clear_screen() {
                debug!(error = %e, "could not clear the terminal");
            }
        } else {
            display::display_transcript_separator();
        }
    }
}
