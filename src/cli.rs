use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Prompt to send once instead of starting an interactive session
    pub query: Option<String>,

    /// Model identifier sent with every request
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the chat completion API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    #[arg(long)]
    pub api_key_env: Option<String>,

    /// Role of submitted prompts [possible values: system, user]
    #[arg(short, long)]
    pub role: Option<String>,

    /// Sampling temperature, 0.0 to 2.0
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Nucleus sampling probability mass, 0.0 to 1.0
    #[arg(long)]
    pub top_p: Option<f64>,

    /// Presence penalty, -2.0 to 2.0
    #[arg(long, allow_negative_numbers = true)]
    pub presence_penalty: Option<f64>,

    /// Frequency penalty, -2.0 to 2.0
    #[arg(long, allow_negative_numbers = true)]
    pub frequency_penalty: Option<f64>,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
