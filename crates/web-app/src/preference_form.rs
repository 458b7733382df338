use rand::Rng;
use workout_planner_domain::{Goal, Level, Plan, PreferenceError, Preferences, SessionDuration};

use crate::{Latency, Planner, RequestError, Settings};

/// Current selections of the preference form.
///
/// Every selection is always one of the offered choices. Raw form values that
/// are not leave the previous selection in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceForm {
    preferences: Preferences,
}

impl PreferenceForm {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            preferences: settings.defaults,
        }
    }

    pub fn set_level(&mut self, level: Level) {
        self.preferences.level = level;
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.preferences.goal = goal;
    }

    pub fn set_duration(&mut self, duration: SessionDuration) {
        self.preferences.duration = duration;
    }

    pub fn select_level(&mut self, value: &str) -> Result<(), PreferenceError> {
        self.set_level(Level::from_form_value(value)?);
        Ok(())
    }

    pub fn select_goal(&mut self, value: &str) -> Result<(), PreferenceError> {
        self.set_goal(Goal::from_form_value(value)?);
        Ok(())
    }

    pub fn select_duration(&mut self, value: &str) -> Result<(), PreferenceError> {
        self.set_duration(SessionDuration::from_form_value(value)?);
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> Preferences {
        self.preferences
    }

    pub async fn submit<L: Latency, R: Rng>(
        &self,
        planner: &Planner<L, R>,
    ) -> Result<Plan, RequestError> {
        planner.request_plan(self.snapshot()).await
    }
}
