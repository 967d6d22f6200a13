//! Clock domain: the heartbeat of Sproutvale.
//!
//! Responsible for:
//! - Advancing the in-game hour and day from elapsed real time
//! - Sending HourChangedEvent, DayChangedEvent and TimeOfDayChangedEvent
//! - Easing the day/night light intensity
//! - Pausing / unpausing time based on GameState
//! - Accelerated sleep at home (see `sleep`)

pub mod sleep;

use bevy::prelude::*;

use crate::shared::*;
use sleep::{advance_sleep, handle_sleep_request, SleepConfig, SleepState};

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SleepConfig>()
            .init_resource::<SleepState>()
            .add_systems(OnEnter(GameState::Playing), resume_time)
            .add_systems(OnExit(GameState::Playing), pause_time)
            // Core time tick: only runs while Playing, so the pause menu and
            // the market both freeze the clock.
            .add_systems(
                Update,
                (tick_clock, handle_sleep_request, advance_sleep, update_day_night_tint)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, toggle_pause);
    }
}

// ─── State transition hooks ───────────────────────────────────────────────────

fn resume_time(clock: Res<GameClock>) {
    info!(
        "[Clock] Time resumed at {} on Day {} ({:?})",
        format_clock(clock.hour),
        clock.day,
        clock.time_of_day()
    );
}

fn pause_time() {
    info!("[Clock] Time paused");
}

/// Escape toggles between Playing and the pause menu.
fn toggle_pause(
    input: Res<PlayerInput>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match state.get() {
        GameState::Playing if input.pause => next_state.set(GameState::Paused),
        GameState::Paused if input.pause || input.ui_cancel => next_state.set(GameState::Playing),
        _ => {}
    }
}

// ─── Main time-tick system ────────────────────────────────────────────────────

/// What a single clock advance crossed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockAdvance {
    pub hour_changed: bool,
    pub days_passed: u32,
    pub time_of_day_changed: Option<TimeOfDay>,
}

/// Advances the clock by `delta_secs` of real time.
///
/// One in-game day lasts `real_minutes_per_day` real minutes. The hour wraps
/// at 24 into the next day; several days can pass in one call while sleeping.
pub fn advance_clock(clock: &mut GameClock, delta_secs: f32) -> ClockAdvance {
    let mut advance = ClockAdvance::default();
    let per_day = clock.real_seconds_per_day();
    if per_day <= 0.0 || delta_secs <= 0.0 {
        return advance;
    }

    let previous_hour = clock.hour.floor();
    clock.hour += delta_secs / per_day * HOURS_PER_DAY;

    while clock.hour >= HOURS_PER_DAY {
        clock.hour -= HOURS_PER_DAY;
        clock.day += 1;
        advance.days_passed += 1;
    }

    advance.hour_changed = advance.days_passed > 0 || clock.hour.floor() != previous_hour;

    let time_of_day = clock.time_of_day();
    if time_of_day != clock.last_time_of_day {
        clock.last_time_of_day = time_of_day;
        advance.time_of_day_changed = Some(time_of_day);
    }

    advance
}

fn tick_clock(
    time: Res<Time>,
    mut clock: ResMut<GameClock>,
    mut hour_events: EventWriter<HourChangedEvent>,
    mut day_events: EventWriter<DayChangedEvent>,
    mut tod_events: EventWriter<TimeOfDayChangedEvent>,
) {
    let advance = advance_clock(&mut clock, time.delta_secs());

    if advance.hour_changed {
        hour_events.send(HourChangedEvent { hour: clock.hour });
    }

    // Days that were skipped over still get their own event each.
    let first_new_day = clock.day + 1 - advance.days_passed;
    for day in first_new_day..=clock.day {
        info!("[Clock] New day: Day {}", day);
        day_events.send(DayChangedEvent { day });
    }

    if let Some(time_of_day) = advance.time_of_day_changed {
        info!("[Clock] {:?} at {}", time_of_day, format_clock(clock.hour));
        tod_events.send(TimeOfDayChangedEvent { time_of_day });
    }
}

// ─── Day/night light ──────────────────────────────────────────────────────────

pub const TINT_REFRESH_SECS: f32 = 0.5;
pub const TINT_EASE_RATE: f32 = 2.0;
pub const MIN_LIGHT_INTENSITY: f32 = 0.1;
pub const MAX_LIGHT_INTENSITY: f32 = 1.0;

/// Light intensity for an hour of the day: darkest at midnight, brightest at noon.
pub fn target_light_intensity(hour: f32) -> f32 {
    let t = hour / HOURS_PER_DAY;
    let wave = ((t * 2.0 - 0.5) * std::f32::consts::PI).sin();
    let blend = (wave + 1.0) * 0.5;
    MIN_LIGHT_INTENSITY + (MAX_LIGHT_INTENSITY - MIN_LIGHT_INTENSITY) * blend
}

fn update_day_night_tint(time: Res<Time>, clock: Res<GameClock>, mut tint: ResMut<DayNightTint>) {
    let dt = time.delta_secs();

    tint.next_refresh_secs -= dt;
    if tint.next_refresh_secs <= 0.0 {
        tint.target_intensity = target_light_intensity(clock.hour);
        tint.next_refresh_secs = TINT_REFRESH_SECS;
    }

    let step = (dt * TINT_EASE_RATE).min(1.0);
    tint.intensity += (tint.target_intensity - tint.intensity) * step;
}

/// "06:30"-style readout.
pub fn format_clock(hour: f32) -> String {
    let whole = hour.floor() as u32;
    let minute = ((hour - hour.floor()) * 60.0).floor() as u32;
    format!("{:02}:{:02}", whole, minute)
}
