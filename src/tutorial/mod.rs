//! First-run tutorial: a timed sequence of hints shown once.
//!
//! Completion is stored in `UserSettings`, which the settings domain
//! persists whenever it changes.

use bevy::prelude::*;
use crate::shared::*;

pub struct TutorialPlugin;

impl Plugin for TutorialPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TutorialState>()
            .add_event::<TutorialResetEvent>()
            .add_systems(
                Update,
                (handle_tutorial_reset, start_tutorial, advance_tutorial)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Forget that the tutorial was seen; it plays again.
#[derive(Event, Debug, Clone, Default)]
pub struct TutorialResetEvent;

#[derive(Resource, Debug, Clone, Default)]
pub struct TutorialState {
    pub started: bool,
    /// Step on screen, None once the sequence is over.
    pub current: Option<usize>,
    pub remaining_secs: f32,
}

impl TutorialState {
    /// Moves to `index`, or finishes if the script has no such step.
    /// Returns the step now showing.
    pub fn show<'a>(&mut self, script: &'a TutorialScript, index: usize) -> Option<&'a TutorialStep> {
        match script.steps.get(index) {
            Some(step) => {
                self.current = Some(index);
                self.remaining_secs = step.display_time;
                Some(step)
            }
            None => {
                self.current = None;
                self.remaining_secs = 0.0;
                None
            }
        }
    }
}

fn handle_tutorial_reset(
    mut resets: EventReader<TutorialResetEvent>,
    mut settings: ResMut<UserSettings>,
    mut state: ResMut<TutorialState>,
) {
    if resets.read().count() == 0 {
        return;
    }
    settings.tutorial_completed = false;
    *state = TutorialState::default();
    info!("[Tutorial] Reset");
}

fn start_tutorial(
    settings: Res<UserSettings>,
    script: Res<TutorialScript>,
    mut state: ResMut<TutorialState>,
    mut step_events: EventWriter<TutorialStepEvent>,
) {
    if state.started || settings.tutorial_completed {
        return;
    }
    state.started = true;
    if let Some(step) = state.show(&script, 0) {
        info!("[Tutorial] {}", step.message);
        step_events.send(TutorialStepEvent {
            index: 0,
            message: step.message.clone(),
        });
    }
}

/// Counts down the current hint; the skip key cuts it short.
fn advance_tutorial(
    time: Res<Time>,
    input: Res<PlayerInput>,
    script: Res<TutorialScript>,
    mut state: ResMut<TutorialState>,
    mut settings: ResMut<UserSettings>,
    mut step_events: EventWriter<TutorialStepEvent>,
    mut completed_events: EventWriter<TutorialCompletedEvent>,
) {
    if !state.started || settings.tutorial_completed {
        return;
    }
    let Some(index) = state.current else {
        // An empty script finishes on the first tick.
        settings.tutorial_completed = true;
        completed_events.send(TutorialCompletedEvent);
        return;
    };

    state.remaining_secs -= time.delta_secs();
    if state.remaining_secs > 0.0 && !input.skip_tutorial {
        return;
    }

    let next = index + 1;
    match state.show(&script, next) {
        Some(step) => {
            info!("[Tutorial] {}", step.message);
            step_events.send(TutorialStepEvent {
                index: next,
                message: step.message.clone(),
            });
        }
        None => {
            settings.tutorial_completed = true;
            info!("[Tutorial] Completed");
            completed_events.send(TutorialCompletedEvent);
        }
    }
}
