pub mod prompt;

use anyhow::{Context, Error};
use chrono::Local;

use crate::blocks::split_blocks;
use crate::clients::slack::SlackPublisher;
use crate::config::DigestConfig;

const SEARCH_MAX_TOKENS: u32 = 4096;
const CURATE_MAX_TOKENS: u32 = 2048;

/// One completion request to the content source: an instruction plus the
/// constraints it runs under.
#[derive(Debug, Clone)]
pub struct SourceRequest {
    pub instruction: String,
    pub max_tokens: u32,
    pub web_search: bool,
}

/// Narrow seam over the language model so the pipeline can be exercised
/// with a stub.
pub trait ContentSource {
    async fn complete(&self, request: SourceRequest) -> Result<String, Error>;
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Digest posted to the webhook, with the number of blocks delivered.
    Delivered { blocks: usize },
    /// No webhook configured; the block sequence is handed back for stdout.
    Preview(Vec<String>),
}

pub struct Newsletter<S> {
    source: S,
    publisher: Option<SlackPublisher>,
    max_block_chars: usize,
    search_window_days: u32,
}

impl<S: ContentSource> Newsletter<S> {
    pub fn new(source: S, publisher: Option<SlackPublisher>, config: DigestConfig) -> Self {
        Self {
            source,
            publisher,
            max_block_chars: config.max_block_chars.unwrap_or(3000),
            search_window_days: config.search_window_days.unwrap_or(7),
        }
    }

    /// Runs the pipeline once: search, curate, split, deliver. Any failure
    /// aborts the run; nothing is retried and nothing is delivered partially.
    pub async fn run(&self) -> Result<RunOutcome, Error> {
        let today = Local::now().date_naive();

        log::info!(
            "searching for news from the past {} days...",
            self.search_window_days
        );
        let raw_news = self
            .source
            .complete(SourceRequest {
                instruction: prompt::build_search_prompt(today, self.search_window_days),
                max_tokens: SEARCH_MAX_TOKENS,
                web_search: true,
            })
            .await
            .context("Searching for news")?;
        log::info!(
            "found {} characters of news content",
            raw_news.chars().count()
        );

        log::info!("curating digest...");
        let digest = self
            .source
            .complete(SourceRequest {
                instruction: prompt::build_curate_prompt(&raw_news),
                max_tokens: CURATE_MAX_TOKENS,
                web_search: false,
            })
            .await
            .context("Curating digest")?;
        log::info!("digest ready ({} characters)", digest.chars().count());

        let blocks = split_blocks(&digest, self.max_block_chars);

        match &self.publisher {
            Some(publisher) => {
                publisher
                    .post(&blocks, today)
                    .await
                    .context("Posting digest to Slack")?;
                Ok(RunOutcome::Delivered {
                    blocks: blocks.len(),
                })
            }
            None => {
                log::warn!("no slack webhook configured; digest will be printed");
                Ok(RunOutcome::Preview(blocks))
            }
        }
    }
}
