//! Farming domain: planting, watering, growth and harvest.
//!
//! Crops live in `FarmState` keyed by tile. Growth runs off the game clock,
//! so sleeping speeds it up and pausing freezes it.

use bevy::prelude::*;
use crate::shared::*;

pub mod crops;
pub mod harvest;
pub mod tools;
pub mod watering;

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                tools::handle_tool_use,
                harvest::handle_harvest_attempt,
                crops::tick_crop_growth,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
