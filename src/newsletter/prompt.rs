use chrono::{Duration, NaiveDate};

pub const SEARCH_PROMPT: &str = r#"Focus on:
- Major model releases or announcements (OpenAI, Anthropic, Google, Meta, etc.)
- Significant research breakthroughs
- AI policy and regulation news
- Notable AI product launches
- Important industry moves (funding, acquisitions, partnerships)

Search multiple times if needed to get comprehensive coverage.
Return a detailed summary of what you find with sources."#;

pub const CURATE_PROMPT: &str = r#"You are curating a weekly AI newsletter. Based on the following news gathered
from the past week, create a concise newsletter with exactly 5-7 of the most important stories."#;

pub const CURATE_FORMAT_RULES: &str = r#"FORMAT REQUIREMENTS:
- Start with a one-line "TLDR" of the week's theme
- Each story should have:
  - A bold headline (use *bold* for Slack)
  - 2-3 sentence summary explaining why it matters
  - Source attribution
- Separate stories with blank lines
- End with a "Worth Watching" section with 1-2 developing stories
- Keep total length under 800 words
- Use plain text with Slack-compatible formatting (*bold*, _italic_, • for bullets)
- No emoji overload - keep it professional"#;

pub fn build_search_prompt(today: NaiveDate, window_days: u32) -> String {
    let window_start = today - Duration::days(i64::from(window_days));
    format!(
        "Search for the most significant AI news and developments from the past {} days\n({} to {}).\n\n{}",
        window_days,
        window_start.format("%B %d"),
        today.format("%B %d, %Y"),
        SEARCH_PROMPT
    )
}

pub fn build_curate_prompt(raw_news: &str) -> String {
    format!(
        "{}\n\nRAW NEWS:\n{}\n\n{}\n\nWrite the newsletter now:",
        CURATE_PROMPT,
        raw_news.trim(),
        CURATE_FORMAT_RULES
    )
}
