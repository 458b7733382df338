use std::time::Duration;

use workout_planner_domain::Preferences;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Simulated time a plan takes to generate.
    pub latency_ms: u32,
    /// Initial selections of the preference form.
    pub defaults: Preferences,
}

impl Settings {
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(u64::from(self.latency_ms))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            defaults: Preferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use workout_planner_domain::{Goal, Level, SessionDuration};

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.latency(), Duration::from_millis(1500));
        assert_eq!(settings.defaults, Preferences::default());
    }

    #[test]
    fn test_settings_deserialize() {
        assert_eq!(
            serde_json::from_str::<Settings>(
                r#"{"latency_ms": 0, "defaults": {"level": "advanced", "goal": "endurance", "duration": 45}}"#
            )
            .unwrap(),
            Settings {
                latency_ms: 0,
                defaults: Preferences {
                    level: Level::Advanced,
                    goal: Goal::Endurance,
                    duration: SessionDuration::Minutes45,
                },
            }
        );
    }

    #[test]
    fn test_settings_deserialize_partial() {
        assert_eq!(
            serde_json::from_str::<Settings>(r#"{"latency_ms": 250}"#).unwrap(),
            Settings {
                latency_ms: 250,
                defaults: Preferences::default(),
            }
        );
    }

    #[test]
    fn test_settings_deserialize_unsupported_duration() {
        assert!(
            serde_json::from_str::<Settings>(
                r#"{"defaults": {"level": "beginner", "goal": "strength", "duration": 20}}"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_settings_serialize() {
        assert_eq!(
            serde_json::to_string(&Settings::default()).unwrap(),
            r#"{"latency_ms":1500,"defaults":{"level":"beginner","goal":"strength","duration":30}}"#
        );
    }
}
