use chrono::NaiveDate;
use newsbrief::newsletter::prompt::{
    build_curate_prompt, build_search_prompt, CURATE_PROMPT, SEARCH_PROMPT,
};

#[test]
fn search_prompt_includes_date_window() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let output = build_search_prompt(today, 7);

    assert!(output.contains("past 7 days"));
    assert!(output.contains("June 08 to June 15, 2025"));
    assert!(output.ends_with(SEARCH_PROMPT));
}

#[test]
fn search_prompt_window_crosses_month_boundary() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    let output = build_search_prompt(today, 14);

    assert!(output.contains("past 14 days"));
    assert!(output.contains("February 16 to March 02, 2025"));
}

#[test]
fn curate_prompt_embeds_raw_news() {
    let output = build_curate_prompt("  Some raw findings with sources.  ");

    assert!(output.starts_with(CURATE_PROMPT));
    assert!(output.contains("RAW NEWS:\nSome raw findings with sources."));
    assert!(output.ends_with("Write the newsletter now:"));
}

#[test]
fn curate_prompt_places_raw_news_before_format_rules() {
    let output = build_curate_prompt("Some raw findings.");

    let raw_news = output.find("RAW NEWS:").expect("RAW NEWS section missing");
    let rules = output
        .find("FORMAT REQUIREMENTS:")
        .expect("format rules missing");
    assert!(raw_news < rules);
}

#[test]
fn curate_prompt_keeps_editorial_rules() {
    let output = build_curate_prompt("news");

    assert!(output.contains("exactly 5-7 of the most important stories"));
    assert!(output.contains("Worth Watching"));
    assert!(output.contains("under 800 words"));
}
