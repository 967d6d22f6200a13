use bevy::prelude::*;
use crate::shared::*;

/// What an empty-handed interact does at a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmInteraction {
    OpenMarket,
    Sleep,
    Harvest((i32, i32)),
}

/// Buildings win over crops; a crop only counts once it is ripe.
pub fn interaction_at(layout: &FarmLayout, farm: &FarmState, tile: (i32, i32)) -> Option<FarmInteraction> {
    if tile == layout.market_tile {
        return Some(FarmInteraction::OpenMarket);
    }
    if tile == layout.home_tile {
        return Some(FarmInteraction::Sleep);
    }
    farm.crops
        .get(&tile)
        .filter(|crop| crop.is_fully_grown())
        .map(|_| FarmInteraction::Harvest(tile))
}

/// One tile per key press. The first press in a new direction only turns.
pub fn player_movement(
    input: Res<PlayerInput>,
    layout: Res<FarmLayout>,
    mut player: ResMut<PlayerState>,
) {
    let Some(dir) = input.move_dir else {
        return;
    };
    if player.facing != dir {
        player.facing = dir;
        return;
    }
    let next = player.target_tile();
    // Buildings are solid.
    if next == layout.market_tile || next == layout.home_tile {
        return;
    }
    player.tile = next;
}

pub fn interact(
    input: Res<PlayerInput>,
    hotbar: Res<Hotbar>,
    layout: Res<FarmLayout>,
    farm: Res<FarmState>,
    player: Res<PlayerState>,
    mut market_events: EventWriter<MarketOpenRequestEvent>,
    mut sleep_events: EventWriter<SleepRequestEvent>,
    mut harvest_events: EventWriter<HarvestAttemptEvent>,
) {
    if !input.interact || hotbar.equipped.is_some() {
        return;
    }
    match interaction_at(&layout, &farm, player.target_tile()) {
        Some(FarmInteraction::OpenMarket) => {
            market_events.send(MarketOpenRequestEvent);
        }
        Some(FarmInteraction::Sleep) => {
            sleep_events.send(SleepRequestEvent);
        }
        Some(FarmInteraction::Harvest(tile)) => {
            harvest_events.send(HarvestAttemptEvent { tile });
        }
        None => {}
    }
}
