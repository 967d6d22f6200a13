//! Inventory domain: the player's item stacks and seed selection.
//!
//! `Inventory` and `InventoryWriters` (shared) hold the rules and the event
//! side. This plugin grants the starting items and cycles the selected seed.

use bevy::prelude::*;

use crate::shared::*;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), grant_starting_items)
            .add_systems(
                Update,
                cycle_seed_selection.run_if(in_state(GameState::Playing)),
            )
            // Tools bought or sold in the market follow the inventory.
            .add_systems(Update, sync_hotbar_on_change);
    }
}

/// The seed after the current one in inventory order, wrapping to none.
pub fn next_seed(inventory: &Inventory) -> Option<ItemId> {
    let seeds: Vec<&InventoryItem> = inventory.seeds().collect();
    let next_index = match inventory.selected_seed.as_deref() {
        None => 0,
        Some(current) => seeds
            .iter()
            .position(|s| s.item_id == current)
            .map(|i| i + 1)
            .unwrap_or(0),
    };
    seeds.get(next_index).map(|s| s.item_id.clone())
}

fn cycle_seed_selection(
    input: Res<PlayerInput>,
    mut inventory: ResMut<Inventory>,
    mut writers: InventoryWriters,
) {
    if !input.cycle_seed {
        return;
    }
    match next_seed(&inventory) {
        Some(id) => {
            writers.select(&mut inventory, Some(&id));
        }
        None if inventory.selected_seed.is_some() => {
            writers.select(&mut inventory, None);
        }
        None => {}
    }
}

/// Keeps the hotbar in step with the tools actually held: new tools are
/// appended while there is room, tools no longer held drop out. The
/// equipped tool stays equipped if it is still held. Returns true on change.
pub fn sync_hotbar(hotbar: &mut Hotbar, inventory: &Inventory) -> bool {
    let equipped = hotbar.equipped_tool().map(str::to_string);
    let before = hotbar.tools.clone();

    hotbar.tools.retain(|id| inventory.has_item(id, 1));
    for item in inventory.items.iter().filter(|i| i.kind == ItemKind::Tool) {
        if hotbar.tools.len() >= MAX_HOTBAR_SLOTS {
            break;
        }
        if !hotbar.tools.contains(&item.item_id) {
            hotbar.tools.push(item.item_id.clone());
        }
    }

    hotbar.equipped = equipped.and_then(|id| hotbar.tools.iter().position(|t| *t == id));
    hotbar.tools != before
}

fn sync_hotbar_on_change(
    mut changes: EventReader<InventoryChangedEvent>,
    inventory: Res<Inventory>,
    mut hotbar: ResMut<Hotbar>,
    mut equipped_events: EventWriter<ToolEquippedEvent>,
) {
    if changes.read().count() == 0 {
        return;
    }
    let was_equipped = hotbar.equipped.is_some();
    if sync_hotbar(&mut hotbar, &inventory) {
        info!("[Inventory] Hotbar: {:?}", hotbar.tools);
        if was_equipped && hotbar.equipped.is_none() {
            equipped_events.send(ToolEquippedEvent { tool_id: None });
        }
    }
}

/// Fills the inventory and hotbar from the starting-item table the first
/// time play begins.
pub fn grant_starting_items(
    mut starting: ResMut<StartingItems>,
    crops: Res<CropRegistry>,
    tools: Res<ToolRegistry>,
    mut inventory: ResMut<Inventory>,
    mut hotbar: ResMut<Hotbar>,
    mut writers: InventoryWriters,
) {
    if starting.granted {
        return;
    }
    starting.granted = true;

    for entry in &starting.items {
        let Some(item) = entry.source.resolve(&entry.id, &crops, &tools) else {
            warn!("[Inventory] Unknown starting item {:?} '{}'", entry.source, entry.id);
            continue;
        };
        writers.add(&mut inventory, item.with_quantity(entry.quantity));
    }
    sync_hotbar(&mut hotbar, &inventory);

    info!(
        "[Inventory] Starting items granted: {} stacks, {} tools on the hotbar",
        inventory.items.len(),
        hotbar.tools.len()
    );
}
