//! Crop planting and growth-stage management.

use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Growth
// ─────────────────────────────────────────────────────────────────────────────

/// A fresh, dry, stage-0 crop. The tool's attributes scale how long each
/// stage takes and how fast water drains.
pub fn new_crop_instance(def: &CropDef, attributes: &ToolAttributes) -> CropInstance {
    CropInstance {
        crop_id: def.id.clone(),
        name: def.name.clone(),
        base_value: def.base_value,
        sell_multiplier: def.sell_multiplier,
        growth_stages: def.growth_stages.max(1),
        time_per_stage: def.time_per_stage * attributes.growth_time_multiplier,
        water_consumption_per_day: def.water_consumption_per_day
            * attributes.water_consumption_multiplier,
        current_stage: 0,
        stage_elapsed: 0.0,
        water_level: 0.0,
    }
}

/// Advances one crop by `delta_days` of game time.
///
/// Only a watered crop grows, and it drinks while it does. At most one
/// stage is gained per call. Returns true if the stage advanced.
pub fn grow_crop(crop: &mut CropInstance, delta_days: f32) -> bool {
    if !crop.is_watered() || delta_days <= 0.0 {
        return false;
    }

    crop.stage_elapsed += delta_days;
    crop.water_level = (crop.water_level - crop.water_consumption_per_day * delta_days).max(0.0);

    if crop.stage_elapsed < crop.time_per_stage {
        return false;
    }

    crop.stage_elapsed = 0.0;
    let last_stage = crop.growth_stages.saturating_sub(1);
    if crop.current_stage >= last_stage {
        return false;
    }
    crop.current_stage += 1;
    true
}

/// Grows every planted crop. Returns positions whose stage advanced.
pub fn advance_crop_growth(farm_state: &mut FarmState, delta_days: f32) -> Vec<(i32, i32)> {
    let mut advanced = Vec::new();
    for (pos, crop) in farm_state.crops.iter_mut() {
        if grow_crop(crop, delta_days) {
            advanced.push(*pos);
        }
    }
    advanced
}

/// Per-frame growth. Only scheduled while Playing, so the pause menu and
/// the market freeze it.
pub fn tick_crop_growth(
    time: Res<Time>,
    clock: Res<GameClock>,
    mut farm_state: ResMut<FarmState>,
) {
    let delta_days = clock.days_from_real_seconds(time.delta_secs());
    for pos in advance_crop_growth(&mut farm_state, delta_days) {
        if let Some(crop) = farm_state.crops.get(&pos) {
            if crop.is_fully_grown() {
                info!("[Farming] {} at {:?} is ready to harvest", crop.name, pos);
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Planting
// ─────────────────────────────────────────────────────────────────────────────

/// Plants the selected seed on `tile`. Consumes one seed.
///
/// Needs a free farmland plot, a selected seed still in the inventory, and
/// a crop definition for that seed.
pub fn try_plant_at(
    tile: (i32, i32),
    attributes: &ToolAttributes,
    layout: &FarmLayout,
    crops: &CropRegistry,
    farm_state: &mut FarmState,
    inventory: &mut Inventory,
    writers: &mut InventoryWriters,
    planted: &mut EventWriter<PlantingCompleteEvent>,
) -> bool {
    if !layout.is_plot(tile) || farm_state.crops.contains_key(&tile) {
        return false;
    }

    let Some(seed_id) = inventory.selected_seed().map(|s| s.item_id.clone()) else {
        info!("[Farming] No seed selected");
        return false;
    };
    let Some(def) = crops.for_seed(&seed_id) else {
        warn!("[Farming] No crop definition for seed '{}'", seed_id);
        return false;
    };

    if writers.remove(inventory, &seed_id, 1).is_none() {
        return false;
    }
    farm_state
        .crops
        .insert(tile, new_crop_instance(def, attributes));

    info!(
        "[Farming] Planted {} at {:?}, ripe after {:.1} watered game hours",
        def.name,
        tile,
        def.total_growth_days() * attributes.growth_time_multiplier * HOURS_PER_DAY
    );
    planted.send(PlantingCompleteEvent {
        crop_id: def.id.clone(),
        tile,
    });
    true
}
