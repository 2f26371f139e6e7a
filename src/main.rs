use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gptchat::app::Application;
use gptchat::cli::Args;
use gptchat::commands::create_command_registry;
use gptchat::config::Config;
use gptchat::{ChatBotController, ChatBotModel, CompletionAccessor, HttpClient, TerminalView};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load()?.merge_args(&args)?;

    let transport = HttpClient::from_env(&config.base_url, &config.api_key_env)?;
    let accessor = CompletionAccessor::new(Box::new(transport), &config.model);
    let model = ChatBotModel::new(accessor);
    let view = TerminalView::new(config.sampling, config.role)?;
    let controller = ChatBotController::new(model, view);

    let mut app = Application::new(args.query, controller, create_command_registry());
    app.run().await?;

    Ok(())
}
