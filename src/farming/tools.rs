//! Tool-use dispatch: each tool kind maps onto a farming action.

use bevy::prelude::*;
use crate::shared::*;

use super::crops::try_plant_at;
use super::harvest::try_harvest_at;
use super::watering::water_around;

/// What a tool does at a tile, given what is growing there.
pub fn resolve_action(kind: ToolKind, crop_at_target: Option<&CropInstance>) -> ToolAction {
    match kind {
        ToolKind::Spade => ToolAction::Plant,
        ToolKind::WateringCan => ToolAction::Water,
        ToolKind::Scythe => ToolAction::Harvest,
        ToolKind::Hoe => match crop_at_target {
            Some(crop) if crop.is_fully_grown() => ToolAction::Harvest,
            _ => ToolAction::Plant,
        },
    }
}

/// Runs tool uses through the action gate. A use that does something
/// closes the gate for the tool's use delay.
pub fn handle_tool_use(
    mut uses: EventReader<ToolUseEvent>,
    tools: Res<ToolRegistry>,
    crops: Res<CropRegistry>,
    layout: Res<FarmLayout>,
    mut gate: ResMut<ActionGate>,
    mut farm_state: ResMut<FarmState>,
    mut inventory: ResMut<Inventory>,
    mut writers: InventoryWriters,
    mut planted: EventWriter<PlantingCompleteEvent>,
    mut watered: EventWriter<WateringCompleteEvent>,
    mut harvested: EventWriter<CropHarvestedEvent>,
) {
    for ev in uses.read() {
        if !gate.is_idle() {
            continue;
        }
        let Some(tool) = tools.get(&ev.tool_id) else {
            warn!("[Farming] Unknown tool '{}'", ev.tool_id);
            continue;
        };

        let action = resolve_action(tool.kind, farm_state.crops.get(&ev.target));
        let success = match action {
            ToolAction::Plant => try_plant_at(
                ev.target,
                &tool.attributes,
                &layout,
                &crops,
                &mut farm_state,
                &mut inventory,
                &mut writers,
                &mut planted,
            ),
            ToolAction::Water => {
                let count = water_around(&mut farm_state, ev.target, tool.watering_radius);
                if count > 0 {
                    info!("[Farming] Watered {} crops around {:?}", count, ev.target);
                    watered.send(WateringCompleteEvent {
                        tile: ev.target,
                        crops_watered: count,
                    });
                }
                count > 0
            }
            ToolAction::Harvest => try_harvest_at(
                ev.target,
                &tool.attributes,
                &mut farm_state,
                &mut inventory,
                &mut writers,
                &mut harvested,
            ),
        };

        if success {
            gate.begin(action, tool.use_delay);
        }
    }
}
