use derive_more::Deref;
use serde::Serialize;

use crate::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub category: Category,
    pub level: Level,
    pub equipment: &'static [Equipment],
}

/// A read-only collection of exercise templates.
///
/// The plan generator only ever borrows a catalog, so the same catalog can be
/// shared by any number of requests.
#[derive(Deref, Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Vec<ExerciseTemplate>);

impl Catalog {
    #[must_use]
    pub fn new(exercises: Vec<ExerciseTemplate>) -> Self {
        Self(exercises)
    }

    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }
}

impl Default for Catalog {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl From<Vec<ExerciseTemplate>> for Catalog {
    fn from(value: Vec<ExerciseTemplate>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strength,
    Cardio,
    Core,
    Mobility,
}

impl Category {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Core => "Core",
            Category::Mobility => "Mobility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    Barbell,
    Bench,
    Box,
    Dumbbell,
    JumpRope,
    Kettlebell,
    Mat,
    PullUpBar,
}

impl Equipment {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Box => "Box",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::JumpRope => "Jump Rope",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Mat => "Mat",
            Equipment::PullUpBar => "Pull-Up Bar",
        }
    }
}

static BUILTIN: std::sync::LazyLock<Catalog> =
    std::sync::LazyLock::new(|| Catalog(EXERCISES.to_vec()));

const EXERCISES: [ExerciseTemplate; 22] = [
    ExerciseTemplate {
        name: "Barbell Back Squat",
        category: Category::Strength,
        level: Level::Intermediate,
        equipment: &[Equipment::Barbell],
    },
    ExerciseTemplate {
        name: "Barbell Deadlift",
        category: Category::Strength,
        level: Level::Advanced,
        equipment: &[Equipment::Barbell],
    },
    ExerciseTemplate {
        name: "Bench Dip",
        category: Category::Strength,
        level: Level::Beginner,
        equipment: &[Equipment::Bench],
    },
    ExerciseTemplate {
        name: "Bodyweight Squat",
        category: Category::Strength,
        level: Level::Beginner,
        equipment: &[],
    },
    ExerciseTemplate {
        name: "Box Jump",
        category: Category::Cardio,
        level: Level::Intermediate,
        equipment: &[Equipment::Box],
    },
    ExerciseTemplate {
        name: "Burpee",
        category: Category::Cardio,
        level: Level::Intermediate,
        equipment: &[],
    },
    ExerciseTemplate {
        name: "Cat-Cow Stretch",
        category: Category::Mobility,
        level: Level::Beginner,
        equipment: &[Equipment::Mat],
    },
    ExerciseTemplate {
        name: "Dumbbell Bench Press",
        category: Category::Strength,
        level: Level::Intermediate,
        equipment: &[Equipment::Bench, Equipment::Dumbbell],
    },
    ExerciseTemplate {
        name: "Dumbbell Row",
        category: Category::Strength,
        level: Level::Beginner,
        equipment: &[Equipment::Bench, Equipment::Dumbbell],
    },
    ExerciseTemplate {
        name: "Glute Bridge",
        category: Category::Strength,
        level: Level::Beginner,
        equipment: &[Equipment::Mat],
    },
    ExerciseTemplate {
        name: "Hip Flexor Stretch",
        category: Category::Mobility,
        level: Level::Beginner,
        equipment: &[Equipment::Mat],
    },
    ExerciseTemplate {
        name: "Jump Rope",
        category: Category::Cardio,
        level: Level::Beginner,
        equipment: &[Equipment::JumpRope],
    },
    ExerciseTemplate {
        name: "Jumping Jack",
        category: Category::Cardio,
        level: Level::Beginner,
        equipment: &[],
    },
    ExerciseTemplate {
        name: "Kettlebell Swing",
        category: Category::Strength,
        level: Level::Intermediate,
        equipment: &[Equipment::Kettlebell],
    },
    ExerciseTemplate {
        name: "Mountain Climber",
        category: Category::Cardio,
        level: Level::Intermediate,
        equipment: &[],
    },
    ExerciseTemplate {
        name: "Muscle-Up",
        category: Category::Strength,
        level: Level::Advanced,
        equipment: &[Equipment::PullUpBar],
    },
    ExerciseTemplate {
        name: "Pistol Squat",
        category: Category::Strength,
        level: Level::Advanced,
        equipment: &[],
    },
    ExerciseTemplate {
        name: "Plank",
        category: Category::Core,
        level: Level::Beginner,
        equipment: &[Equipment::Mat],
    },
    ExerciseTemplate {
        name: "Pull-Up",
        category: Category::Strength,
        level: Level::Intermediate,
        equipment: &[Equipment::PullUpBar],
    },
    ExerciseTemplate {
        name: "Push-Up",
        category: Category::Strength,
        level: Level::Beginner,
        equipment: &[],
    },
    ExerciseTemplate {
        name: "Walking Lunge",
        category: Category::Strength,
        level: Level::Beginner,
        equipment: &[],
    },
    ExerciseTemplate {
        name: "World's Greatest Stretch",
        category: Category::Mobility,
        level: Level::Intermediate,
        equipment: &[Equipment::Mat],
    },
];
