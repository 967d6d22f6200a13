//! Data layer: populates all registries at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills every registry
//! (CropRegistry, ToolRegistry, ObjectiveDatabase, StartingItems,
//! MarketStock, TutorialScript, FarmLayout) from the hard-coded game-design
//! data defined in submodules, then transitions the game into
//! GameState::Playing.
//!
//! No other domain needs to seed these resources. All domain plugins can
//! safely read them once GameState has advanced past Loading.

mod crops;
mod farm;
mod objectives;
mod stock;
mod tools;
mod tutorial;

pub use crops::{populate_crops, validate_crop};
pub use farm::populate_farm_layout;
pub use objectives::populate_objectives;
pub use stock::{populate_market_stock, populate_starting_items};
pub use tools::populate_tools;
pub use tutorial::populate_tutorial;

use bevy::prelude::*;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates every registry and then transitions to Playing.
///
/// Tables refer to each other by string id only, so population order does
/// not matter; unknown ids are reported where they are resolved.
fn load_all_data(
    mut crop_registry: ResMut<CropRegistry>,
    mut tool_registry: ResMut<ToolRegistry>,
    mut objective_db: ResMut<ObjectiveDatabase>,
    mut starting_items: ResMut<StartingItems>,
    mut market_stock: ResMut<MarketStock>,
    mut tutorial_script: ResMut<TutorialScript>,
    mut farm_layout: ResMut<FarmLayout>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: populating registries…");

    populate_crops(&mut crop_registry);
    info!("  Crops loaded: {}", crop_registry.crops.len());

    populate_tools(&mut tool_registry);
    info!("  Tools loaded: {}", tool_registry.tools.len());

    populate_objectives(&mut objective_db);
    info!(
        "  Objectives loaded: {} initial, {} follow-ups",
        objective_db.initial.len(),
        objective_db.follow_ups.len()
    );

    populate_starting_items(&mut starting_items);
    populate_market_stock(&mut market_stock);
    info!(
        "  Starting items: {}, market stock entries: {}",
        starting_items.items.len(),
        market_stock.entries.len()
    );

    populate_tutorial(&mut tutorial_script);
    info!("  Tutorial steps loaded: {}", tutorial_script.steps.len());

    populate_farm_layout(&mut farm_layout);
    info!("  Farm plots: {}", farm_layout.plots.len());

    info!("DataPlugin: all registries populated. Transitioning to Playing.");
    next_state.set(GameState::Playing);
}
