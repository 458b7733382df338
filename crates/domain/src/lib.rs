#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod plan;
mod preferences;

pub use catalog::{Catalog, Category, Equipment, ExerciseTemplate};
pub use error::*;
pub use plan::*;
pub use preferences::*;
