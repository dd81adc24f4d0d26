use crate::clients::anthropic::AnthropicConfig;
use crate::clients::slack::SlackConfig;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(flatten)]
    pub anthropic: AnthropicConfig,
    #[serde(flatten)]
    pub slack: SlackConfig,
    #[serde(flatten)]
    pub digest: DigestConfig,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DigestConfig {
    #[serde(
        rename = "max_block_chars",
        default,
        deserialize_with = "deserialize_option_usize"
    )]
    pub max_block_chars: Option<usize>,
    #[serde(
        rename = "search_window_days",
        default,
        deserialize_with = "deserialize_option_u32"
    )]
    pub search_window_days: Option<u32>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(envy::prefixed("NEWSBRIEF_").from_env::<AppConfig>()?)
    }
}

// envy delivers every value as a string when structs are flattened, so
// numeric options are parsed by hand.
pub(crate) fn deserialize_option_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    if let Some(s) = s {
        s.parse::<usize>()
            .map(Some)
            .map_err(serde::de::Error::custom)
    } else {
        Ok(None)
    }
}

pub(crate) fn deserialize_option_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    if let Some(s) = s {
        s.parse::<u64>().map(Some).map_err(serde::de::Error::custom)
    } else {
        Ok(None)
    }
}

pub(crate) fn deserialize_option_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    if let Some(s) = s {
        s.parse::<u32>().map(Some).map_err(serde::de::Error::custom)
    } else {
        Ok(None)
    }
}
