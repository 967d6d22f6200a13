use bevy::prelude::*;
use crate::shared::*;

/// Number keys pick a hotbar slot. The equipped slot or an empty one unequips.
pub fn equip_from_hotbar(
    input: Res<PlayerInput>,
    mut hotbar: ResMut<Hotbar>,
    mut equipped_events: EventWriter<ToolEquippedEvent>,
) {
    let Some(slot) = input.tool_slot else {
        return;
    };
    if !hotbar.select_slot(slot as usize) {
        return;
    }
    let tool_id = hotbar.equipped_tool().map(str::to_string);
    match &tool_id {
        Some(id) => info!("[Player] Equipped {}", id),
        None => info!("[Player] Unequipped tool"),
    }
    equipped_events.send(ToolEquippedEvent { tool_id });
}

/// Swing the equipped tool at the tile the player is facing.
/// The farming domain decides what happens and closes the action gate.
pub fn tool_use(
    input: Res<PlayerInput>,
    hotbar: Res<Hotbar>,
    gate: Res<ActionGate>,
    player: Res<PlayerState>,
    mut tool_events: EventWriter<ToolUseEvent>,
) {
    if !input.tool_use {
        return;
    }
    let Some(tool_id) = hotbar.equipped_tool() else {
        return;
    };
    if !gate.is_idle() {
        return;
    }
    tool_events.send(ToolUseEvent {
        tool_id: tool_id.to_string(),
        target: player.target_tile(),
    });
}

pub fn tick_action_gate(time: Res<Time>, mut gate: ResMut<ActionGate>) {
    if gate.is_idle() {
        return;
    }
    gate.tick(time.delta_secs());
}
