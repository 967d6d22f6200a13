//! Sleeping at home: the clock runs fast until enough in-game hours pass.

use bevy::prelude::*;

use crate::shared::*;

#[derive(Resource, Debug, Clone)]
pub struct SleepConfig {
    /// In-game hours slept per rest.
    pub duration_hours: f32,
    /// Factor the day length is divided by while asleep.
    pub time_acceleration: f32,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            duration_hours: 6.0,
            time_acceleration: 1000.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SleepState {
    pub asleep: Option<Slumber>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slumber {
    pub saved_minutes_per_day: f32,
    pub wake_day: u32,
    pub wake_hour: f32,
}

impl SleepState {
    pub fn is_asleep(&self) -> bool {
        self.asleep.is_some()
    }
}

/// Puts the player to sleep. Returns false if already asleep.
pub fn begin_sleep(clock: &mut GameClock, state: &mut SleepState, config: &SleepConfig) -> bool {
    if state.is_asleep() {
        return false;
    }

    let mut wake_day = clock.day;
    let mut wake_hour = clock.hour + config.duration_hours;
    while wake_hour >= HOURS_PER_DAY {
        wake_hour -= HOURS_PER_DAY;
        wake_day += 1;
    }

    state.asleep = Some(Slumber {
        saved_minutes_per_day: clock.real_minutes_per_day,
        wake_day,
        wake_hour,
    });
    if config.time_acceleration > 0.0 {
        clock.real_minutes_per_day /= config.time_acceleration;
    }
    true
}

/// Restores the normal day length once the wake time is reached.
/// Returns true on the tick the player wakes.
pub fn try_wake(clock: &mut GameClock, state: &mut SleepState) -> bool {
    let Some(slumber) = &state.asleep else {
        return false;
    };

    let reached = clock.day > slumber.wake_day
        || (clock.day == slumber.wake_day && clock.hour >= slumber.wake_hour);
    if !reached {
        return false;
    }

    clock.real_minutes_per_day = slumber.saved_minutes_per_day;
    state.asleep = None;
    true
}

pub fn handle_sleep_request(
    mut requests: EventReader<SleepRequestEvent>,
    config: Res<SleepConfig>,
    mut clock: ResMut<GameClock>,
    mut state: ResMut<SleepState>,
) {
    for _ in requests.read() {
        if begin_sleep(&mut clock, &mut state, &config) {
            info!(
                "[Clock] Sleeping for {} hours from Day {} {:.1}h",
                config.duration_hours, clock.day, clock.hour
            );
        } else {
            info!("[Clock] Already asleep");
        }
    }
}

pub fn advance_sleep(
    mut clock: ResMut<GameClock>,
    mut state: ResMut<SleepState>,
    mut wake_events: EventWriter<WakeUpEvent>,
) {
    if try_wake(&mut clock, &mut state) {
        info!("[Clock] Woke up on Day {} at {:.1}h", clock.day, clock.hour);
        wake_events.send(WakeUpEvent {
            day: clock.day,
            hour: clock.hour,
        });
    }
}
