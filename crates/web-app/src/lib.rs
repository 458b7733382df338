#![warn(clippy::pedantic)]

mod latency;
pub mod log;
mod planner;
mod preference_form;
mod settings;

pub use latency::*;
pub use planner::*;
pub use preference_form::*;
pub use settings::*;
