use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const WEIGHT_RANGE: (u32, u32) = (30, 250);
pub const HEIGHT_RANGE: (u32, u32) = (100, 250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Fat loss")]
    FatLoss,
    #[serde(rename = "Muscle gain")]
    MuscleGain,
    Maintenance,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Goal::FatLoss => "Fat loss",
            Goal::MuscleGain => "Muscle gain",
            Goal::Maintenance => "Maintenance",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Activity::Low => "Low",
            Activity::Moderate => "Moderate",
            Activity::High => "High",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
}

/// The user's biometric and goal attributes. Replaced wholesale on update;
/// updates that fail validation leave the stored profile untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub weight_kg: u32,
    pub height_cm: u32,
    pub goal: Goal,
    pub activity: Activity,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: 25,
            weight_kg: 70,
            height_cm: 170,
            goal: Goal::FatLoss,
            activity: Activity::Moderate,
        }
    }
}

impl Profile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        in_range("age", self.age, AGE_RANGE)?;
        in_range("weight_kg", self.weight_kg, WEIGHT_RANGE)?;
        in_range("height_cm", self.height_cm, HEIGHT_RANGE)?;
        Ok(())
    }

    /// weight / (height in meters)^2, rounded to one decimal. Derived on
    /// every read, never stored.
    pub fn bmi(&self) -> f64 {
        let meters = self.height_cm as f64 / 100.0;
        let raw = self.weight_kg as f64 / (meters * meters);
        (raw * 10.0).round() / 10.0
    }
}

fn in_range(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), ProfileError> {
    if value < min || value > max {
        return Err(ProfileError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_source_defaults() {
        let p = Profile::default();
        assert_eq!(p.age, 25);
        assert_eq!(p.weight_kg, 70);
        assert_eq!(p.height_cm, 170);
        assert_eq!(p.goal, Goal::FatLoss);
        assert_eq!(p.activity, Activity::Moderate);
    }

    #[test]
    fn bmi_of_default_profile() {
        assert_eq!(Profile::default().bmi(), 24.2);
    }

    #[test]
    fn bmi_rounds_to_one_decimal() {
        let p = Profile {
            weight_kg: 90,
            height_cm: 180,
            ..Profile::default()
        };
        // 90 / 1.8^2 = 27.777…
        assert_eq!(p.bmi(), 27.8);
    }

    #[test]
    fn validate_accepts_bounds() {
        for (age, weight, height) in [(10, 30, 100), (100, 250, 250)] {
            let p = Profile {
                age,
                weight_kg: weight,
                height_cm: height,
                ..Profile::default()
            };
            assert_eq!(p.validate(), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_out_of_range_age() {
        let p = Profile {
            age: 150,
            ..Profile::default()
        };
        assert_eq!(
            p.validate(),
            Err(ProfileError::OutOfRange {
                field: "age",
                min: 10,
                max: 100,
                value: 150,
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_weight_and_height() {
        let too_light = Profile {
            weight_kg: 29,
            ..Profile::default()
        };
        assert!(too_light.validate().is_err());

        let too_tall = Profile {
            height_cm: 251,
            ..Profile::default()
        };
        assert!(too_tall.validate().is_err());
    }

    #[test]
    fn goal_and_activity_use_display_labels() {
        assert_eq!(Goal::FatLoss.to_string(), "Fat loss");
        assert_eq!(Goal::MuscleGain.to_string(), "Muscle gain");
        assert_eq!(Activity::Moderate.to_string(), "Moderate");
    }

    #[test]
    fn goal_serde_uses_human_labels() {
        let g: Goal = serde_json::from_str("\"Fat loss\"").unwrap();
        assert_eq!(g, Goal::FatLoss);
        assert_eq!(serde_json::to_string(&Goal::MuscleGain).unwrap(), "\"Muscle gain\"");
    }
}
