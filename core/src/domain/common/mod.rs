use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::capture::value_objects::FacingMode;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LabelsightConfig {
    pub llm: LLMConfig,
    pub capture: CaptureConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct CaptureConfig {
    pub max_image_bytes: usize,
    pub default_facing_mode: FacingMode,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
