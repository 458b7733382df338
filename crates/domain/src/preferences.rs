use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::PreferenceError;

/// The choices a user makes before requesting a plan.
///
/// A snapshot is copied into every generation request, so later changes to a
/// form never affect a plan that is already being generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preferences {
    pub level: Level,
    pub goal: Goal,
    pub duration: SessionDuration,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn from_form_value(value: &str) -> Result<Self, PreferenceError> {
        Self::from_str(value).map_err(|_| PreferenceError::InvalidLevel(value.to_string()))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub fn sets(self) -> u32 {
        match self {
            Level::Advanced => 4,
            Level::Beginner | Level::Intermediate => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.into())
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Strength,
    Hypertrophy,
    Endurance,
    Flexibility,
}

impl Goal {
    pub fn from_form_value(value: &str) -> Result<Self, PreferenceError> {
        Self::from_str(value).map_err(|_| PreferenceError::InvalidGoal(value.to_string()))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Goal::Strength => "Build Strength",
            Goal::Hypertrophy => "Build Muscle",
            Goal::Endurance => "Endurance / Cardio",
            Goal::Flexibility => "Mobility & Recovery",
        }
    }

    #[must_use]
    pub fn reps(self) -> &'static str {
        match self {
            Goal::Strength => "5-8",
            Goal::Hypertrophy | Goal::Endurance | Goal::Flexibility => "12-15",
        }
    }

    #[must_use]
    pub fn rest(self) -> &'static str {
        match self {
            Goal::Endurance => "30s",
            Goal::Strength | Goal::Hypertrophy | Goal::Flexibility => "90s",
        }
    }

    /// The plan title, e.g. "Strength Focus Routine".
    #[must_use]
    pub fn title(self) -> String {
        let value: &'static str = self.into();
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => format!("{}{} Focus Routine", first.to_uppercase(), chars.as_str()),
            None => "Focus Routine".to_string(),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.into())
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    Minutes15,
    #[default]
    Minutes30,
    Minutes45,
    Minutes60,
}

impl SessionDuration {
    pub fn from_form_value(value: &str) -> Result<Self, PreferenceError> {
        value.parse()
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        match self {
            SessionDuration::Minutes15 => 15,
            SessionDuration::Minutes30 => 30,
            SessionDuration::Minutes45 => 45,
            SessionDuration::Minutes60 => 60,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SessionDuration::Minutes15 => "15 Minutes",
            SessionDuration::Minutes30 => "30 Minutes",
            SessionDuration::Minutes45 => "45 Minutes",
            SessionDuration::Minutes60 => "60 Minutes",
        }
    }

    /// Number of exercises a session of this length should contain.
    #[must_use]
    pub fn exercise_count(self) -> usize {
        (self.minutes() / 10).max(3) as usize
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = PreferenceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            15 => Ok(SessionDuration::Minutes15),
            30 => Ok(SessionDuration::Minutes30),
            45 => Ok(SessionDuration::Minutes45),
            60 => Ok(SessionDuration::Minutes60),
            _ => Err(PreferenceError::UnsupportedDuration(value)),
        }
    }
}

impl From<SessionDuration> for u32 {
    fn from(value: SessionDuration) -> Self {
        value.minutes()
    }
}

impl FromStr for SessionDuration {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes = s
            .trim()
            .parse::<u32>()
            .map_err(|_| PreferenceError::InvalidDuration(s.to_string()))?;
        Self::try_from(minutes)
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}
