use bevy::prelude::*;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            (reset_and_read_input, manage_input_context).chain(),
        );
    }
}

const SLOT_KEYS: [KeyCode; MAX_HOTBAR_SLOTS] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// The single point where hardware input becomes game actions.
fn reset_and_read_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    context: Res<InputContext>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    match *context {
        InputContext::Disabled => {}

        InputContext::Gameplay => {
            // One tile per press; first match wins when several are held.
            input.move_dir = [
                (bindings.move_up, KeyCode::ArrowUp, Facing::Up),
                (bindings.move_down, KeyCode::ArrowDown, Facing::Down),
                (bindings.move_left, KeyCode::ArrowLeft, Facing::Left),
                (bindings.move_right, KeyCode::ArrowRight, Facing::Right),
            ]
            .into_iter()
            .find(|(key, arrow, _)| keys.just_pressed(*key) || keys.just_pressed(*arrow))
            .map(|(_, _, facing)| facing);

            input.tool_use = keys.just_pressed(bindings.tool_use);
            input.interact = keys.just_pressed(bindings.interact);
            input.cycle_seed = keys.just_pressed(bindings.cycle_seed);
            input.pause = keys.just_pressed(bindings.pause);
            input.skip_tutorial = keys.just_pressed(bindings.skip_tutorial);

            input.tool_slot = SLOT_KEYS
                .iter()
                .position(|key| keys.just_pressed(*key))
                .map(|i| i as u8);
        }

        InputContext::Menu => {
            input.ui_up =
                keys.just_pressed(bindings.move_up) || keys.just_pressed(KeyCode::ArrowUp);
            input.ui_down =
                keys.just_pressed(bindings.move_down) || keys.just_pressed(KeyCode::ArrowDown);
            input.ui_confirm =
                keys.just_pressed(bindings.ui_confirm) || keys.just_pressed(bindings.interact);
            input.ui_cancel = keys.just_pressed(bindings.ui_cancel);
            input.pause = keys.just_pressed(bindings.pause);
            input.tab_pressed = keys.just_pressed(KeyCode::Tab);
            input.sell_stack = keys.pressed(bindings.sell_stack);
        }
    }
}

/// Derives InputContext from GameState. ONE system, replaces all per-domain guards.
fn manage_input_context(
    game_state: Res<State<GameState>>,
    mut context: ResMut<InputContext>,
) {
    *context = match *game_state.get() {
        GameState::Loading => InputContext::Disabled,
        GameState::Playing => InputContext::Gameplay,
        GameState::Paused | GameState::Market => InputContext::Menu,
    };
}
