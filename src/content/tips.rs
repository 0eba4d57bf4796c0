use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::PhaseType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipCategory {
    Nutrition,
    Movement,
    SelfCare,
}

impl TipCategory {
    pub const ALL: [TipCategory; 3] = [Self::Nutrition, Self::Movement, Self::SelfCare];
}

impl FromStr for TipCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nutrition" => Ok(Self::Nutrition),
            "movement" => Ok(Self::Movement),
            "self-care" | "self_care" | "selfcare" => Ok(Self::SelfCare),
            other => Err(anyhow::anyhow!(
                "invalid tip category: {other} (expected nutrition/movement/self-care)"
            )),
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nutrition => write!(f, "nutrition"),
            Self::Movement => write!(f, "movement"),
            Self::SelfCare => write!(f, "self-care"),
        }
    }
}

pub fn tips(phase: PhaseType, category: TipCategory) -> &'static [&'static str] {
    use PhaseType::*;
    use TipCategory::*;

    match (phase, category) {
        (Menstrual, Nutrition) => &[
            "Iron-rich foods like lentils, spinach and red meat help replace what you lose.",
            "Warm soups and herbal teas can ease cramping.",
            "Dark chocolate is a reasonable magnesium source if you crave something sweet.",
        ],
        (Menstrual, Movement) => &[
            "Gentle walks and light yoga keep blood moving without draining you.",
            "Lower the intensity today; consistency matters more than load.",
            "If cramps are strong, swap the run for mobility work.",
        ],
        (Menstrual, SelfCare) => &[
            "A heat pad on the lower abdomen can take the edge off cramps.",
            "Aim for an earlier bedtime; energy is usually lowest this week.",
        ],
        (Follicular, Nutrition) => &[
            "Rising energy pairs well with complex carbs before training.",
            "Fermented foods support digestion as hormones shift.",
            "Add lean protein after harder sessions to support recovery.",
        ],
        (Follicular, Movement) => &[
            "A good week to try a new skill or push a little harder.",
            "Strength gains come easier now; consider progressing your loads.",
        ],
        (Follicular, SelfCare) => &[
            "Plan ahead: energy is climbing, so schedule the demanding tasks now.",
            "Social plans feel easier this week. Use the momentum.",
        ],
        (Ovulation, Nutrition) => &[
            "Fibre-rich vegetables help process the oestrogen peak.",
            "Stay well hydrated; higher-intensity sessions raise your needs.",
        ],
        (Ovulation, Movement) => &[
            "Peak power window: intervals and heavy lifts fit well here.",
            "Warm up thoroughly; ligament laxity can be higher around ovulation.",
            "Try a personal best attempt if you feel strong.",
        ],
        (Ovulation, SelfCare) => &[
            "Confidence is often high now. A good time for hard conversations.",
            "Keep an eye on sleep so the high energy does not turn into burnout.",
        ],
        (Luteal, Nutrition) => &[
            "Your calorie needs rise slightly; do not fight reasonable hunger.",
            "Magnesium and B6 sources like bananas and seeds may ease PMS.",
            "Cut back on salt to reduce bloating.",
        ],
        (Luteal, Movement) => &[
            "Steady-state cardio and moderate lifting suit this phase.",
            "Body temperature runs higher; take extra water on runs.",
        ],
        (Luteal, SelfCare) => &[
            "Journaling can help with mood swings before your period.",
            "Protect downtime this week and say no when you need to.",
            "Magnesium-rich baths or stretching before bed can help sleep.",
        ],
    }
}
