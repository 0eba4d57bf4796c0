use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// FlowLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowLevel {
    None,
    Light,
    Medium,
    Heavy,
    VeryHeavy,
}

impl FromStr for FlowLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            "very-heavy" | "very_heavy" => Ok(Self::VeryHeavy),
            other => Err(anyhow::anyhow!(
                "invalid flow: {other} (expected none/light/medium/heavy/very-heavy)"
            )),
        }
    }
}

impl fmt::Display for FlowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Light => write!(f, "light"),
            Self::Medium => write!(f, "medium"),
            Self::Heavy => write!(f, "heavy"),
            Self::VeryHeavy => write!(f, "very-heavy"),
        }
    }
}

// ---------------------------------------------------------------------------
// SymptomTag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymptomTag {
    Cramps,
    Bloating,
    MoodSwings,
    Headaches,
    Fatigue,
}

impl FromStr for SymptomTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cramps" => Ok(Self::Cramps),
            "bloating" => Ok(Self::Bloating),
            "mood-swings" | "mood_swings" => Ok(Self::MoodSwings),
            "headaches" => Ok(Self::Headaches),
            "fatigue" => Ok(Self::Fatigue),
            other => Err(anyhow::anyhow!(
                "invalid symptom: {other} (expected cramps/bloating/mood-swings/headaches/fatigue)"
            )),
        }
    }
}

impl fmt::Display for SymptomTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cramps => write!(f, "cramps"),
            Self::Bloating => write!(f, "bloating"),
            Self::MoodSwings => write!(f, "mood-swings"),
            Self::Headaches => write!(f, "headaches"),
            Self::Fatigue => write!(f, "fatigue"),
        }
    }
}

// ---------------------------------------------------------------------------
// MoodTag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodTag {
    Happy,
    Sad,
    Neutral,
    Angry,
    Overwhelmed,
}

impl FromStr for MoodTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "neutral" => Ok(Self::Neutral),
            "angry" => Ok(Self::Angry),
            "overwhelmed" => Ok(Self::Overwhelmed),
            other => Err(anyhow::anyhow!(
                "invalid mood: {other} (expected happy/sad/neutral/angry/overwhelmed)"
            )),
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Happy => write!(f, "happy"),
            Self::Sad => write!(f, "sad"),
            Self::Neutral => write!(f, "neutral"),
            Self::Angry => write!(f, "angry"),
            Self::Overwhelmed => write!(f, "overwhelmed"),
        }
    }
}

// ---------------------------------------------------------------------------
// PeriodEntry / DayLog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub flow: FlowLevel,
    #[serde(default)]
    pub symptoms: BTreeSet<SymptomTag>,
}

/// Everything recorded for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodTag>,
}

impl DayLog {
    pub fn is_empty(&self) -> bool {
        self.period.is_none() && self.mood.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_from_str_accepts_both_separators() {
        assert_eq!("very-heavy".parse::<FlowLevel>().unwrap(), FlowLevel::VeryHeavy);
        assert_eq!("VERY_HEAVY".parse::<FlowLevel>().unwrap(), FlowLevel::VeryHeavy);
        assert_eq!("none".parse::<FlowLevel>().unwrap(), FlowLevel::None);
    }

    #[test]
    fn flow_from_str_rejects_unknown() {
        let err = "spotting".parse::<FlowLevel>().unwrap_err();
        assert!(err.to_string().contains("invalid flow"));
    }

    #[test]
    fn enum_display_matches_serde() {
        for s in [
            SymptomTag::Cramps,
            SymptomTag::Bloating,
            SymptomTag::MoodSwings,
            SymptomTag::Headaches,
            SymptomTag::Fatigue,
        ] {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{s}\""));
        }
        let json = serde_json::to_string(&FlowLevel::VeryHeavy).unwrap();
        assert_eq!(json, "\"very-heavy\"");
        assert_eq!(MoodTag::Overwhelmed.to_string(), "overwhelmed");
    }

    #[test]
    fn day_log_skips_absent_fields() {
        let d = DayLog {
            period: None,
            mood: Some(MoodTag::Happy),
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"mood":"happy"}"#);
        assert!(DayLog::default().is_empty());
    }
}
