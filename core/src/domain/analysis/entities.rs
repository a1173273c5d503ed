use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{analysis::parser::parse_analysis_text, common::generate_timestamp};

pub const DEFAULT_HARM_SCALE: u8 = 5;

/// Heuristic 1-10 risk score attached to an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
pub struct HarmScale(u8);

impl HarmScale {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Builds a scale from whatever number the model reported, pinned to 1..=10.
    pub fn clamped(value: u32) -> Self {
        let pinned = value.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        Self(pinned as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from(*self)
    }
}

impl Default for HarmScale {
    fn default() -> Self {
        Self(DEFAULT_HARM_SCALE)
    }
}

impl<'de> Deserialize<'de> for HarmScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(HarmScale::clamped)
    }
}

/// Color band used by the capture page: green, yellow, red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl From<HarmScale> for RiskBand {
    fn from(scale: HarmScale) -> Self {
        match scale.value() {
            8.. => RiskBand::High,
            5..=7 => RiskBand::Moderate,
            _ => RiskBand::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub name: String,
    pub harm_scale: HarmScale,
    pub health_concerns: Vec<String>,
    /// Always derived from `harm_scale`.
    pub risk_band: RiskBand,
}

impl AnalysisRecord {
    pub fn new(name: String, harm_scale: HarmScale, health_concerns: Vec<String>) -> Self {
        Self {
            name,
            harm_scale,
            health_concerns,
            risk_band: harm_scale.risk_band(),
        }
    }
}

/// One capture-analyze-display cycle. Not persisted; `id` only ties log
/// lines together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub records: Vec<AnalysisRecord>,
    pub raw_text: String,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(raw_text: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            records: parse_analysis_text(&raw_text),
            raw_text,
            analyzed_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
