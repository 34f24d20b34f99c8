//! Command-line front end for the tutor page actions.

use clap::{Parser, Subcommand};
use devops_tutor::client::{Action, Controller, TutorApi, TutorPage};
use devops_tutor::config::ClientConfig;
use devops_tutor::init_tracing;

#[derive(Parser)]
#[command(name = "tutor")]
#[command(about = "Talk to the DevOps tutor API")]
#[command(version)]
struct Args {
    /// Base URL of the tutor API (overrides TUTOR_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a chat query
    Chat { query: String },
    /// Explain a code snippet
    Explain { code: String },
    /// Generate an onboarding guide for a topic
    Onboard { topic: String },
    /// List the pre-defined FAQs
    Faqs,
    /// Ask an FAQ question
    Ask { question: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config.base_url = url;
    }

    let page = TutorPage::new(Controller::new(TutorApi::new(&config)?));

    let action = match args.command {
        Command::Chat { query } => Action::Chat(query),
        Command::Explain { code } => Action::ExplainCode(code),
        Command::Onboard { topic } => Action::Onboard(topic),
        Command::Faqs => Action::ListFaqs,
        Command::Ask { question } => Action::AskFaq(question),
    };

    // A failed action still renders its fallback text; print it, then exit
    // non-zero.
    let report = page.run(action).await;
    println!("{}", report.rendered);
    report.result?;
    Ok(())
}
