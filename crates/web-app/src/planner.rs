use std::cell::RefCell;

use chrono::Utc;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use workout_planner_domain::{Catalog, Plan, Preferences, generate};

use crate::{Latency, Settings, TimerLatency};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanState {
    /// No plan requested yet, or the last plan was cleared.
    Idle,
    Generating(Preferences),
    Ready(Plan),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("a plan is already being generated")]
    Busy,
}

/// Turns plan requests into plans, one request at a time.
///
/// Transitions: `Idle -> Generating -> Ready`, `Ready -> Generating` on a new
/// request and `Ready -> Idle` on clear. A request made while another one is
/// generating is rejected. A started request is never cancelled, its plan
/// always replaces the previous one. If the request future is dropped before
/// the plan is ready, the planner returns to `Idle`.
pub struct Planner<L, R> {
    catalog: Catalog,
    latency: L,
    rng: RefCell<R>,
    state: RefCell<PlanState>,
}

impl Planner<TimerLatency, StdRng> {
    #[must_use]
    pub fn from_settings(settings: &Settings, catalog: Catalog) -> Self {
        let seed = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        Self::new(
            catalog,
            TimerLatency::from(settings),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<L: Latency, R: Rng> Planner<L, R> {
    pub fn new(catalog: Catalog, latency: L, rng: R) -> Self {
        Self {
            catalog,
            latency,
            rng: RefCell::new(rng),
            state: RefCell::new(PlanState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> PlanState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(*self.state.borrow(), PlanState::Generating(_))
    }

    #[must_use]
    pub fn plan(&self) -> Option<Plan> {
        match *self.state.borrow() {
            PlanState::Ready(ref plan) => Some(plan.clone()),
            PlanState::Idle | PlanState::Generating(_) => None,
        }
    }

    pub async fn request_plan(&self, preferences: Preferences) -> Result<Plan, RequestError> {
        {
            let mut state = self.state.borrow_mut();
            if let PlanState::Generating(ref pending) = *state {
                warn!(
                    "rejected plan request for {}/{}/{}, still generating plan for {}/{}/{}",
                    preferences.level,
                    preferences.goal,
                    preferences.duration,
                    pending.level,
                    pending.goal,
                    pending.duration
                );
                return Err(RequestError::Busy);
            }
            info!(
                "generating plan for {}/{}/{}",
                preferences.level, preferences.goal, preferences.duration
            );
            *state = PlanState::Generating(preferences);
        }
        let mut pending = PendingRequest {
            state: &self.state,
            completed: false,
        };

        self.latency.wait().await;

        let plan = generate(preferences, &self.catalog, &mut *self.rng.borrow_mut());
        info!(
            "generated plan {} \"{}\" with {} exercises",
            plan.id,
            plan.title,
            plan.exercises.len()
        );
        *self.state.borrow_mut() = PlanState::Ready(plan.clone());
        pending.completed = true;

        Ok(plan)
    }

    /// Discards the current plan. Has no effect while a plan is generating.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        match *state {
            PlanState::Generating(_) => debug!("ignored clear while generating"),
            PlanState::Ready(ref plan) => {
                debug!("cleared plan {}", plan.id);
                *state = PlanState::Idle;
            }
            PlanState::Idle => {}
        }
    }
}

/// Resets the state of a request whose future was dropped while generating.
struct PendingRequest<'a> {
    state: &'a RefCell<PlanState>,
    completed: bool,
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        if let Ok(mut state) = self.state.try_borrow_mut() {
            if let PlanState::Generating(ref preferences) = *state {
                warn!(
                    "dropped plan request for {}/{}/{} before completion",
                    preferences.level, preferences.goal, preferences.duration
                );
                *state = PlanState::Idle;
            }
        }
    }
}
