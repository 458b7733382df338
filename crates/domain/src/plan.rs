use derive_more::{Deref, Display, Into};
use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::{Catalog, ExerciseTemplate, Level, Preferences};

pub const TIP: &str = "Focus on form over speed.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: PlanID,
    pub title: String,
    pub exercises: Vec<PlannedExercise>,
}

impl Plan {
    pub const PRO_TIP: &'static str =
        "Stay hydrated and ensure you warm up for at least 5 minutes before starting this routine.";
}

/// Creation time of a plan in milliseconds since the Unix epoch.
///
/// Only used to tell plans apart in a list. Two plans generated within the same
/// millisecond share an ID.
#[derive(
    Deref, Display, Into, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct PlanID(i64);

impl PlanID {
    #[must_use]
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }
}

impl From<i64> for PlanID {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedExercise {
    #[serde(flatten)]
    pub exercise: ExerciseTemplate,
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
    pub tip: &'static str,
}

/// Builds a plan from a randomly ordered sample of the eligible exercises.
#[must_use]
pub fn generate<R: Rng + ?Sized>(
    preferences: Preferences,
    catalog: &Catalog,
    rng: &mut R,
) -> Plan {
    generate_at(preferences, catalog, rng, PlanID::now())
}

#[must_use]
pub fn generate_at<R: Rng + ?Sized>(
    preferences: Preferences,
    catalog: &Catalog,
    rng: &mut R,
    id: PlanID,
) -> Plan {
    let mut selected = candidates(preferences.level, catalog);

    if selected.is_empty() {
        warn!(
            "no exercises available for level {} in catalog of {} exercises",
            preferences.level,
            catalog.len()
        );
    }

    let count = preferences.duration.exercise_count();
    debug!(
        "selecting {count} of {} candidate exercises for {}/{}/{}",
        selected.len(),
        preferences.level,
        preferences.goal,
        preferences.duration
    );

    selected.shuffle(rng);
    selected.truncate(count);

    Plan {
        id,
        title: preferences.goal.title(),
        exercises: selected
            .into_iter()
            .map(|exercise| PlannedExercise {
                exercise: *exercise,
                sets: preferences.level.sets(),
                reps: preferences.goal.reps(),
                rest: preferences.goal.rest(),
                tip: TIP,
            })
            .collect(),
    }
}

/// Exercises eligible for the given level, in catalog order.
///
/// Beginner exercises are eligible for every level.
#[must_use]
pub fn candidates(level: Level, catalog: &Catalog) -> Vec<&ExerciseTemplate> {
    catalog
        .iter()
        .filter(|e| e.level == level || e.level == Level::Beginner)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{Category, Equipment, Goal, SessionDuration};

    fn exercise(name: &'static str, level: Level) -> ExerciseTemplate {
        ExerciseTemplate {
            name,
            category: Category::Strength,
            level,
            equipment: &[],
        }
    }

    fn catalog(levels: &[(&'static str, Level)]) -> Catalog {
        Catalog::new(
            levels
                .iter()
                .map(|(name, level)| exercise(name, *level))
                .collect(),
        )
    }

    fn preferences(level: Level, goal: Goal, duration: SessionDuration) -> Preferences {
        Preferences {
            level,
            goal,
            duration,
        }
    }

    #[rstest]
    #[case(Level::Beginner, vec!["A", "D"])]
    #[case(Level::Intermediate, vec!["A", "B", "D"])]
    #[case(Level::Advanced, vec!["A", "C", "D"])]
    fn test_candidates(#[case] level: Level, #[case] expected: Vec<&str>) {
        let catalog = catalog(&[
            ("A", Level::Beginner),
            ("B", Level::Intermediate),
            ("C", Level::Advanced),
            ("D", Level::Beginner),
        ]);
        assert_eq!(
            candidates(level, &catalog)
                .iter()
                .map(|e| e.name)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_candidates_include_all_beginner_exercises() {
        let catalog = Catalog::builtin();
        let beginner = catalog
            .iter()
            .filter(|e| e.level == Level::Beginner)
            .collect::<Vec<_>>();

        for level in Level::iter() {
            let candidates = candidates(level, catalog);
            for exercise in &beginner {
                assert!(candidates.contains(exercise), "{} missing", exercise.name);
            }
        }
    }

    #[test]
    fn test_generate_beginner_strength() {
        let catalog = catalog(&[
            ("A", Level::Beginner),
            ("B", Level::Beginner),
            ("C", Level::Beginner),
            ("D", Level::Beginner),
            ("E", Level::Advanced),
        ]);
        let plan = generate_at(
            preferences(Level::Beginner, Goal::Strength, SessionDuration::Minutes30),
            &catalog,
            &mut StdRng::seed_from_u64(0),
            PlanID::from(1),
        );

        assert_eq!(plan.id, PlanID::from(1));
        assert_eq!(plan.title, "Strength Focus Routine");
        assert_eq!(plan.exercises.len(), 3);
        for e in &plan.exercises {
            assert_eq!(e.exercise.level, Level::Beginner);
            assert_eq!(e.sets, 3);
            assert_eq!(e.reps, "5-8");
            assert_eq!(e.rest, "90s");
            assert_eq!(e.tip, "Focus on form over speed.");
        }
    }

    #[test]
    fn test_generate_fewer_candidates_than_requested() {
        let catalog = catalog(&[
            ("A", Level::Beginner),
            ("B", Level::Intermediate),
            ("C", Level::Advanced),
            ("D", Level::Beginner),
            ("E", Level::Intermediate),
            ("F", Level::Advanced),
            ("G", Level::Intermediate),
        ]);
        let plan = generate(
            preferences(Level::Advanced, Goal::Hypertrophy, SessionDuration::Minutes60),
            &catalog,
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(plan.exercises.len(), 4);
        assert_eq!(
            plan.exercises
                .iter()
                .map(|e| e.exercise.name)
                .collect::<HashSet<_>>(),
            HashSet::from(["A", "C", "D", "F"])
        );
        assert!(plan.exercises.iter().all(|e| e.sets == 4));
    }

    #[test]
    fn test_plan_serialization() {
        let catalog = Catalog::new(vec![ExerciseTemplate {
            name: "Pull-Up",
            category: Category::Strength,
            level: Level::Beginner,
            equipment: &[Equipment::PullUpBar],
        }]);
        let plan = generate_at(
            preferences(Level::Beginner, Goal::Endurance, SessionDuration::Minutes15),
            &catalog,
            &mut StdRng::seed_from_u64(0),
            PlanID::from(1),
        );

        assert_eq!(
            serde_json::to_string(&plan).unwrap(),
            concat!(
                r#"{"id":1,"title":"Endurance Focus Routine","exercises":[{"#,
                r#""name":"Pull-Up","type":"strength","level":"beginner","#,
                r#""equipment":["pull-up-bar"],"sets":3,"reps":"12-15","rest":"30s","#,
                r#""tip":"Focus on form over speed."}]}"#
            )
        );
    }

    #[test]
    fn test_serialized_labels_are_lowercase() {
        let json = serde_json::to_value(generate_at(
            Preferences::default(),
            Catalog::builtin(),
            &mut StdRng::seed_from_u64(0),
            PlanID::from(1),
        ))
        .unwrap();

        for exercise in json["exercises"].as_array().unwrap() {
            for label in [&exercise["type"], &exercise["level"]]
                .into_iter()
                .chain(exercise["equipment"].as_array().unwrap())
            {
                let label = label.as_str().unwrap();
                assert_eq!(label, label.to_lowercase());
            }
        }
    }

    #[test]
    fn test_plan_pro_tip() {
        assert_eq!(
            Plan::PRO_TIP,
            "Stay hydrated and ensure you warm up for at least 5 minutes before starting this routine."
        );
    }

    #[test]
    fn test_generate_empty_catalog() {
        let plan = generate(
            Preferences::default(),
            &Catalog::new(vec![]),
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(plan.title, "Strength Focus Routine");
        assert!(plan.exercises.is_empty());
    }

    #[test]
    fn test_generate_all_preferences() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);

        for level in Level::iter() {
            for goal in Goal::iter() {
                for duration in SessionDuration::iter() {
                    let plan = generate(preferences(level, goal, duration), catalog, &mut rng);
                    let candidates = candidates(level, catalog);

                    assert!(!plan.exercises.is_empty());
                    assert_eq!(
                        plan.exercises.len(),
                        duration.exercise_count().min(candidates.len())
                    );
                    assert_eq!(plan.title, goal.title());

                    let names = plan
                        .exercises
                        .iter()
                        .map(|e| e.exercise.name)
                        .collect::<HashSet<_>>();
                    assert_eq!(names.len(), plan.exercises.len(), "duplicate exercise");

                    for e in &plan.exercises {
                        assert!(candidates.contains(&&e.exercise));
                        assert_eq!(e.sets == 4, level == Level::Advanced);
                        assert_eq!(e.reps == "5-8", goal == Goal::Strength);
                        assert_eq!(e.rest == "30s", goal == Goal::Endurance);
                    }
                }
            }
        }
    }

    #[test]
    fn test_generate_same_seed() {
        let preferences = preferences(
            Level::Intermediate,
            Goal::Endurance,
            SessionDuration::Minutes45,
        );

        assert_eq!(
            generate_at(
                preferences,
                Catalog::builtin(),
                &mut StdRng::seed_from_u64(7),
                PlanID::from(1)
            ),
            generate_at(
                preferences,
                Catalog::builtin(),
                &mut StdRng::seed_from_u64(7),
                PlanID::from(1)
            )
        );
    }

    #[test]
    fn test_generate_varies_selection() {
        let preferences = preferences(
            Level::Intermediate,
            Goal::Strength,
            SessionDuration::Minutes60,
        );
        let mut rng = StdRng::seed_from_u64(3);

        let selections = (0..20)
            .map(|_| {
                generate(preferences, Catalog::builtin(), &mut rng)
                    .exercises
                    .iter()
                    .map(|e| e.exercise.name)
                    .collect::<Vec<_>>()
            })
            .collect::<HashSet<_>>();

        assert!(selections.len() > 1);
    }

    #[test]
    fn test_generate_does_not_modify_catalog() {
        let catalog = Catalog::default();
        let _ = generate(
            Preferences::default(),
            &catalog,
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(&catalog, Catalog::builtin());
    }
}
