//! Harvest system: ripe crops become inventory items.

use bevy::prelude::*;
use crate::shared::*;

/// Try to harvest the crop at `pos`. Returns true if a harvest occurred.
///
/// The crop is only removed once the inventory has taken the produce, so a
/// full inventory leaves it in the ground for another try.
pub fn try_harvest_at(
    pos: (i32, i32),
    attributes: &ToolAttributes,
    farm_state: &mut FarmState,
    inventory: &mut Inventory,
    writers: &mut InventoryWriters,
    harvested: &mut EventWriter<CropHarvestedEvent>,
) -> bool {
    let Some(crop) = farm_state.crops.get(&pos) else {
        return false;
    };
    if !crop.is_fully_grown() {
        return false;
    }

    let quantity = attributes.harvest_quantity();
    let produce = crop.harvest_item(quantity);
    if !writers.add(inventory, produce) {
        info!("[Farming] No room for {} at {:?}; left in the ground", crop.name, pos);
        return false;
    }

    let Some(crop) = farm_state.crops.remove(&pos) else {
        return false;
    };
    info!("[Farming] Harvested {} × {} at {:?}", quantity, crop.name, pos);
    harvested.send(CropHarvestedEvent {
        crop_id: crop.crop_id,
        quantity,
        tile: pos,
    });
    true
}

/// Bare-handed harvest from the interaction path.
pub fn handle_harvest_attempt(
    mut attempts: EventReader<HarvestAttemptEvent>,
    mut farm_state: ResMut<FarmState>,
    mut inventory: ResMut<Inventory>,
    mut writers: InventoryWriters,
    mut harvested: EventWriter<CropHarvestedEvent>,
) {
    for ev in attempts.read() {
        try_harvest_at(
            ev.tile,
            &ToolAttributes::default(),
            &mut farm_state,
            &mut inventory,
            &mut writers,
            &mut harvested,
        );
    }
}
