//! Slash commands acting on an interactive session.

mod common;

use common::{MockTransport, completion_body, model_with};
use gptchat::commands::{ChatState, create_command_registry};
use gptchat::{ChatBotController, ChatError, Controller, Model, Role, SamplingParameters, TerminalView};

fn session() -> ChatState {
    let model = model_with(MockTransport::replying(completion_body(&[("assistant", "hi")])));
    let view = TerminalView::new(SamplingParameters::default(), Role::System).unwrap();
    ChatState::new(ChatBotController::new(model, view))
}

#[test]
fn knob_commands_move_the_view_sliders() {
    let dispatcher = create_command_registry();
    let mut state = session();

    dispatcher.dispatch("/temperature 0.4", &mut state).unwrap();
    dispatcher.dispatch("/top_p 0.95", &mut state).unwrap();
    dispatcher.dispatch("/presence -1.25", &mut state).unwrap();
    dispatcher.dispatch("/frequency 2", &mut state).unwrap();

    let settings = state.controller.view().settings();
    assert_eq!(
        settings,
        SamplingParameters {
            temperature: 0.4,
            top_probability: 0.95,
            presence_penalty: -1.25,
            frequency_penalty: 2.0,
        }
    );
}

#[test]
fn knob_command_without_argument_reports_value() {
    let dispatcher = create_command_registry();
    let mut state = session();

    let output = dispatcher.dispatch("/temperature", &mut state).unwrap();
    assert_eq!(output.as_deref(), Some("Temperature: 1"));
}

#[test]
fn knob_command_rejects_bad_values() {
    let dispatcher = create_command_registry();
    let mut state = session();

    assert!(matches!(
        dispatcher.dispatch("/temperature hot", &mut state),
        Err(ChatError::Input(_))
    ));
    assert!(matches!(
        dispatcher.dispatch("/top_p 1.2", &mut state),
        Err(ChatError::ParameterOutOfRange { name: "top_probability", .. })
    ));
    assert_eq!(state.controller.view().settings(), SamplingParameters::default());
}

#[test]
fn role_command_switches_between_system_and_user() {
    let dispatcher = create_command_registry();
    let mut state = session();

    dispatcher.dispatch("/role user", &mut state).unwrap();
    assert_eq!(state.controller.view().role(), Role::User);

    assert!(matches!(
        dispatcher.dispatch("/role assistant", &mut state),
        Err(ChatError::InvalidSubmission(_))
    ));
    assert!(matches!(
        dispatcher.dispatch("/role narrator", &mut state),
        Err(ChatError::InvalidRole(_))
    ));
    assert_eq!(state.controller.view().role(), Role::User);
}

#[tokio::test]
async fn clear_command_empties_history() {
    let dispatcher = create_command_registry();
    let mut state = session();
    state
        .controller
        .handle_prompt_message("user", "hello")
        .await
        .unwrap();
    assert_eq!(state.controller.model().history().len(), 2);

    let output = dispatcher.dispatch("/clear", &mut state).unwrap();

    assert_eq!(output.as_deref(), Some("Chat history cleared."));
    assert!(state.controller.model().history().is_empty());
}

#[test]
fn quit_command_ends_the_session() {
    let dispatcher = create_command_registry();
    let mut state = session();

    dispatcher.dispatch("/quit", &mut state).unwrap();
    assert!(!state.should_continue);
}

#[test]
fn unknown_command_is_an_input_error() {
    let dispatcher = create_command_registry();
    let mut state = session();

    assert!(matches!(
        dispatcher.dispatch("/save out.json", &mut state),
        Err(ChatError::Input(_))
    ));
}

#[test]
fn help_lists_every_command() {
    let dispatcher = create_command_registry();
    let mut state = session();

    let help = dispatcher.dispatch("/help", &mut state).unwrap().unwrap();
    for name in dispatcher.get_command_names() {
        assert!(help.contains(&format!("/{}", name)), "missing /{name} in help");
    }
}
