use anyhow::Context;
use env_logger::Env;
use newsbrief::clients::anthropic::AnthropicClient;
use newsbrief::clients::slack::SlackPublisher;
use newsbrief::config::AppConfig;
use newsbrief::newsletter::{Newsletter, RunOutcome};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse the specified (or default) .env file
    let dotenv_path = env::var("NEWSBRIEF_DOTENV_PATH").unwrap_or_else(|_| ".env".to_string());
    let dotenv_result = dotenvy::from_path(&dotenv_path);

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match dotenv_result {
        Ok(()) => log::info!("Loaded env from {}", dotenv_path),
        Err(err) => log::debug!("No .env loaded from {}: {}", dotenv_path, err),
    }

    let config = AppConfig::from_env().context("Reading configuration")?;
    let source = AnthropicClient::new(config.anthropic.clone())?;
    let publisher = SlackPublisher::from_config(config.slack.clone())?;
    let newsletter = Newsletter::new(source, publisher, config.digest.clone());

    match newsletter.run().await? {
        RunOutcome::Delivered { blocks } => {
            log::info!("digest delivered to slack ({} blocks)", blocks)
        }
        RunOutcome::Preview(blocks) => println!("{}", blocks.join("\n\n")),
    }
    Ok(())
}
