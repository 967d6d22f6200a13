use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use sproutvale::shared::*;
use sproutvale::{
    clock, data, economy, farming, input, inventory, objectives, player, settings, tutorial,
};

const SCREEN_WIDTH: f32 = 960.0;
const SCREEN_HEIGHT: f32 = 540.0;

/// Field green at full daylight; the day/night intensity scales it.
const DAYLIGHT_CLEAR: [f32; 3] = [0.42, 0.68, 0.33];

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sproutvale".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<GameClock>()
        .init_resource::<DayNightTint>()
        .init_resource::<Inventory>()
        .init_resource::<Wallet>()
        .init_resource::<FarmState>()
        .init_resource::<FarmLayout>()
        .init_resource::<PlayerState>()
        .init_resource::<Hotbar>()
        .init_resource::<ActionGate>()
        .init_resource::<ObjectiveLog>()
        .init_resource::<UserSettings>()
        .init_resource::<PlayerInput>()
        .init_resource::<KeyBindings>()
        .init_resource::<InputContext>()
        // Registries
        .init_resource::<CropRegistry>()
        .init_resource::<ToolRegistry>()
        .init_resource::<ObjectiveDatabase>()
        .init_resource::<StartingItems>()
        .init_resource::<MarketStock>()
        .init_resource::<TutorialScript>()
        // Events
        .add_event::<HourChangedEvent>()
        .add_event::<DayChangedEvent>()
        .add_event::<TimeOfDayChangedEvent>()
        .add_event::<ItemAddedEvent>()
        .add_event::<InventoryChangedEvent>()
        .add_event::<SeedSelectedEvent>()
        .add_event::<ItemSoldEvent>()
        .add_event::<MoneyChangedEvent>()
        .add_event::<PlantingCompleteEvent>()
        .add_event::<WateringCompleteEvent>()
        .add_event::<CropHarvestedEvent>()
        .add_event::<ToolUseEvent>()
        .add_event::<HarvestAttemptEvent>()
        .add_event::<ToolEquippedEvent>()
        .add_event::<ObjectiveAddedEvent>()
        .add_event::<ObjectiveProgressEvent>()
        .add_event::<ObjectiveCompletedEvent>()
        .add_event::<MarketOpenRequestEvent>()
        .add_event::<VolumeChangeEvent>()
        .add_event::<SleepRequestEvent>()
        .add_event::<WakeUpEvent>()
        .add_event::<TutorialStepEvent>()
        .add_event::<TutorialCompletedEvent>()
        // Domain plugins
        .add_plugins(settings::SettingsPlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(clock::ClockPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(farming::FarmingPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(objectives::ObjectivesPlugin)
        .add_plugins(tutorial::TutorialPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        // Camera and sky
        .add_systems(Startup, setup_camera)
        .add_systems(Update, apply_day_night_tint)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn apply_day_night_tint(tint: Res<DayNightTint>, mut clear: ResMut<ClearColor>) {
    if !tint.is_changed() {
        return;
    }
    let [r, g, b] = DAYLIGHT_CLEAR;
    let i = tint.intensity;
    clear.0 = Color::srgb(r * i, g * i, b * i);
}
