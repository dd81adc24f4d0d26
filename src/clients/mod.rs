pub mod anthropic;
pub mod slack;
