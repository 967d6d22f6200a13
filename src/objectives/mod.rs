//! Objectives for Sproutvale.
//!
//! Active objectives accumulate progress from gameplay events, are checked
//! every frame during Playing, pay their reward once on completion, and may
//! queue a follow-up objective from the `ObjectiveDatabase`.

use bevy::prelude::*;
use crate::shared::*;

pub struct ObjectivesPlugin;

impl Plugin for ObjectivesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), seed_initial_objectives)
            // Progress drains in every state so items bought in the market
            // still count; completions wait for Playing.
            .add_systems(
                Update,
                (
                    track_objective_progress,
                    check_objectives.run_if(in_state(GameState::Playing)),
                )
                    .chain(),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PROGRESS
// ═══════════════════════════════════════════════════════════════════════

/// A gameplay happening that count objectives care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSignal {
    CropsAdded(u32),
    SeedPlanted,
    PlantsWatered,
}

impl Objective {
    /// Builds a fresh objective, filling in a description when the config has none.
    pub fn from_config(config: &ObjectiveConfig) -> Self {
        let description = config
            .description
            .clone()
            .unwrap_or_else(|| default_description(&config.kind));
        Self {
            id: config.id.clone(),
            title: config.title.clone(),
            description,
            reward: config.reward,
            kind: config.kind,
            progress: 0,
            completed: false,
        }
    }

    /// The one accumulation function. Returns true if progress moved.
    pub fn apply_signal(&mut self, signal: ProgressSignal) -> bool {
        if self.completed {
            return false;
        }
        let gained = match (self.kind, signal) {
            (ObjectiveKind::Crop { .. }, ProgressSignal::CropsAdded(quantity)) => quantity,
            (ObjectiveKind::Planting { .. }, ProgressSignal::SeedPlanted) => 1,
            (ObjectiveKind::Watering { .. }, ProgressSignal::PlantsWatered) => 1,
            _ => 0,
        };
        if gained == 0 {
            return false;
        }
        self.progress = self.progress.saturating_add(gained);
        true
    }

    pub fn check_completion(&self, wallet: &Wallet) -> bool {
        match self.kind {
            ObjectiveKind::Money { target } => wallet.gold >= target,
            ObjectiveKind::Crop { target }
            | ObjectiveKind::Planting { target }
            | ObjectiveKind::Watering { target } => self.progress >= target,
        }
    }

    /// Pays the reward and marks the objective done. Only the first call
    /// does anything; returns whether it fired.
    pub fn complete(&mut self, wallet: &mut Wallet) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        wallet.credit(self.reward);
        true
    }

    /// Description with a "(progress/target)" suffix for count objectives.
    pub fn display_description(&self) -> String {
        match self.kind {
            ObjectiveKind::Money { .. } => self.description.clone(),
            kind => format!("{} ({}/{})", self.description, self.progress, kind.target()),
        }
    }
}

pub fn default_description(kind: &ObjectiveKind) -> String {
    match *kind {
        ObjectiveKind::Money { target } => format!("Earn {}", format_money(target)),
        ObjectiveKind::Crop { target } => format!("Harvest {} crops", target),
        ObjectiveKind::Planting { target } => format!("Plant {} seeds", target),
        ObjectiveKind::Watering { target } => format!("Water plants {} times", target),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LOG OPERATIONS
// ═══════════════════════════════════════════════════════════════════════

/// Appends a new active objective and announces it.
pub fn add_objective(
    log: &mut ObjectiveLog,
    config: &ObjectiveConfig,
    added: &mut EventWriter<ObjectiveAddedEvent>,
) {
    let objective = Objective::from_config(config);
    info!("[Objectives] New objective: {}: {}", objective.title, objective.display_description());
    added.send(ObjectiveAddedEvent {
        objective_id: objective.id.clone(),
        title: objective.title.clone(),
    });
    log.active.push(objective);
}

/// Completes every satisfied objective, newest first. Each completion pays
/// out, moves to `completed`, and adds the first matching follow-up.
/// Returns the completed objectives in the order they fired.
pub fn complete_ready_objectives(
    log: &mut ObjectiveLog,
    wallet: &mut Wallet,
    database: &ObjectiveDatabase,
) -> (Vec<Objective>, Vec<ObjectiveConfig>) {
    let mut finished = Vec::new();
    let mut follow_ups = Vec::new();

    for i in (0..log.active.len()).rev() {
        if !log.active[i].check_completion(wallet) {
            continue;
        }
        let mut objective = log.active.remove(i);
        if !objective.complete(wallet) {
            continue;
        }
        log.completed.push(objective.clone());
        if let Some(next) = database.follow_up_for(&objective.id) {
            follow_ups.push(next.clone());
        }
        finished.push(objective);
    }

    (finished, follow_ups)
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn seed_initial_objectives(
    database: Res<ObjectiveDatabase>,
    mut log: ResMut<ObjectiveLog>,
    mut added: EventWriter<ObjectiveAddedEvent>,
) {
    if log.seeded {
        return;
    }
    log.seeded = true;
    for config in &database.initial {
        add_objective(&mut log, config, &mut added);
    }
}

/// Drains gameplay events into the active objectives.
pub fn track_objective_progress(
    mut item_added: EventReader<ItemAddedEvent>,
    mut planted: EventReader<PlantingCompleteEvent>,
    mut watered: EventReader<WateringCompleteEvent>,
    mut log: ResMut<ObjectiveLog>,
    mut progress_writer: EventWriter<ObjectiveProgressEvent>,
) {
    let mut signals: Vec<ProgressSignal> = item_added
        .read()
        .filter(|ev| ev.item.kind == ItemKind::Crop)
        .map(|ev| ProgressSignal::CropsAdded(ev.item.quantity))
        .collect();
    signals.extend(planted.read().map(|_| ProgressSignal::SeedPlanted));
    signals.extend(watered.read().map(|_| ProgressSignal::PlantsWatered));

    for signal in signals {
        for objective in log.active.iter_mut() {
            if objective.apply_signal(signal) {
                progress_writer.send(ObjectiveProgressEvent {
                    objective_id: objective.id.clone(),
                    progress: objective.progress,
                    target: objective.kind.target(),
                });
            }
        }
    }
}

pub fn check_objectives(
    database: Res<ObjectiveDatabase>,
    mut log: ResMut<ObjectiveLog>,
    mut wallet: ResMut<Wallet>,
    mut completed_writer: EventWriter<ObjectiveCompletedEvent>,
    mut added: EventWriter<ObjectiveAddedEvent>,
    mut money_writer: EventWriter<MoneyChangedEvent>,
) {
    let (finished, follow_ups) = complete_ready_objectives(&mut log, &mut wallet, &database);

    for objective in &finished {
        info!(
            "[Objectives] Completed '{}', reward {}",
            objective.title,
            format_money(objective.reward)
        );
        money_writer.send(MoneyChangedEvent {
            balance: wallet.gold,
            delta: objective.reward as i64,
            reason: format!("Objective reward: {}", objective.title),
        });
        completed_writer.send(ObjectiveCompletedEvent {
            objective_id: objective.id.clone(),
            title: objective.title.clone(),
            reward: objective.reward,
        });
    }

    for config in &follow_ups {
        add_objective(&mut log, config, &mut added);
    }
}
