use crate::shared::*;

fn objective(id: &str, title: &str, reward: u32, kind: ObjectiveKind) -> ObjectiveConfig {
    ObjectiveConfig {
        id: id.into(),
        title: title.into(),
        description: None,
        reward,
        kind,
    }
}

fn follow_up(trigger: &str, next: ObjectiveConfig) -> FollowUpRule {
    FollowUpRule {
        trigger_objective_id: trigger.into(),
        new_objective: next,
    }
}

/// Starting goals, one of each kind, and the chain that follows each.
pub fn populate_objectives(db: &mut ObjectiveDatabase) {
    db.initial = vec![
        objective("first_earnings", "Pocket Money", 25, ObjectiveKind::Money { target: 100 }),
        objective("first_harvest", "First Harvest", 20, ObjectiveKind::Crop { target: 5 }),
        objective("green_thumb", "Green Thumb", 15, ObjectiveKind::Planting { target: 5 }),
        objective("hydration", "Keep Them Wet", 10, ObjectiveKind::Watering { target: 3 }),
    ];

    db.follow_ups = vec![
        follow_up(
            "first_earnings",
            objective("savings", "Nest Egg", 100, ObjectiveKind::Money { target: 500 }),
        ),
        follow_up(
            "savings",
            objective("fortune", "Market Baron", 250, ObjectiveKind::Money { target: 2_000 }),
        ),
        follow_up(
            "first_harvest",
            objective("bumper_crop", "Bumper Crop", 60, ObjectiveKind::Crop { target: 20 }),
        ),
        follow_up(
            "green_thumb",
            ObjectiveConfig {
                description: Some("Fill the whole field".into()),
                ..objective("full_field", "Full Field", 50, ObjectiveKind::Planting { target: 20 })
            },
        ),
        follow_up(
            "hydration",
            objective("rain_maker", "Rain Maker", 40, ObjectiveKind::Watering { target: 15 }),
        ),
    ];
}
