mod interaction;
mod tools;

pub use interaction::{interaction_at, FarmInteraction};
pub use tools::{equip_from_hotbar, tick_action_gate, tool_use};

use bevy::prelude::*;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Place the player when play first begins --
        app.add_systems(OnEnter(GameState::Playing), place_player);

        // -- Systems that run every frame while Playing --
        app.add_systems(
            Update,
            (
                tick_action_gate,
                equip_from_hotbar,
                interaction::player_movement,
                // Tool use reads the facing that movement just set.
                tool_use,
                interaction::interact,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Puts the player on the layout's start tile, once.
fn place_player(
    layout: Res<FarmLayout>,
    mut player: ResMut<PlayerState>,
    mut placed: Local<bool>,
) {
    if *placed {
        return;
    }
    *placed = true;
    player.tile = layout.player_start;
    info!("[Player] Starting at {:?}", player.tile);
}
