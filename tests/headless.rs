//! Headless integration tests for Sproutvale.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, register only the
//! pure-logic plugins (no input, no settings file access), and verify that
//! the core game loops work correctly.
//!
//! Run with: `cargo test --test headless`

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use sproutvale::clock::sleep::SleepState;
use sproutvale::clock::ClockPlugin;
use sproutvale::data::{
    populate_crops, populate_farm_layout, populate_tools, DataPlugin,
};
use sproutvale::economy::market::{BuyRequestEvent, CatalogEntry, MarketState, SellRequestEvent};
use sproutvale::economy::EconomyPlugin;
use sproutvale::farming::crops::{advance_crop_growth, new_crop_instance};
use sproutvale::farming::FarmingPlugin;
use sproutvale::inventory::InventoryPlugin;
use sproutvale::objectives::ObjectivesPlugin;
use sproutvale::player::PlayerPlugin;
use sproutvale::shared::*;
use sproutvale::tutorial::{TutorialPlugin, TutorialResetEvent, TutorialState};

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a minimal Bevy app with all shared resources and events registered
/// but NO rendering, windowing, or input. Plugins must be added per-test
/// depending on what's being exercised.
fn build_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    // Every frame advances exactly 100ms of game time.
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));

    // ── Game State ───────────────────────────────────────────────────────
    app.init_state::<GameState>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<GameClock>()
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
        .init_resource::<CropRegistry>()
        .init_resource::<ToolRegistry>()
        .init_resource::<ObjectiveDatabase>()
        .init_resource::<StartingItems>()
        .init_resource::<MarketStock>()
        .init_resource::<TutorialScript>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<HourChangedEvent>()
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
        .add_event::<TutorialCompletedEvent>();

    app
}

/// Fills the crop, tool and layout registries from the game data.
fn load_farm_data(app: &mut App) {
    let world = app.world_mut();
    populate_crops(&mut world.resource_mut::<CropRegistry>());
    populate_tools(&mut world.resource_mut::<ToolRegistry>());
    populate_farm_layout(&mut world.resource_mut::<FarmLayout>());
}

/// Transitions the test app to Playing state and ticks once to process it.
fn enter_playing_state(app: &mut App) {
    set_state(app, GameState::Playing);
}

fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn count_events<E: Event>(app: &App) -> usize {
    let events = app.world().resource::<Events<E>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).count()
}

fn carrot_def(app: &App) -> CropDef {
    app.world().resource::<CropRegistry>().crops["carrot"].clone()
}

fn ripe_carrot(app: &App) -> CropInstance {
    let mut crop = new_crop_instance(&carrot_def(app), &ToolAttributes::default());
    crop.current_stage = crop.growth_stages - 1;
    crop
}

fn give_selected_seeds(app: &mut App, quantity: u32) {
    let seed = carrot_def(app).seed_item().with_quantity(quantity);
    let mut inventory = app.world_mut().resource_mut::<Inventory>();
    inventory.add_item(seed);
    inventory.select_seed(Some("carrot_seed"));
}

fn send_tool_use(app: &mut App, tool_id: &str, target: (i32, i32)) {
    app.world_mut().send_event(ToolUseEvent {
        tool_id: tool_id.into(),
        target,
    });
    app.update();
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_headless_boot_reaches_playing_with_starting_kit() {
    let mut app = build_test_app();
    app.add_plugins((
        DataPlugin,
        InventoryPlugin,
        EconomyPlugin,
        ObjectivesPlugin,
        PlayerPlugin,
    ));

    // First update enters Loading and populates registries; the next applies NextState.
    app.update();
    app.update();
    app.update();

    assert_eq!(current_state(&app), GameState::Playing);

    let world = app.world();
    assert!(!world.resource::<CropRegistry>().crops.is_empty());
    assert!(!world.resource::<ToolRegistry>().tools.is_empty());

    let inventory = world.resource::<Inventory>();
    assert_eq!(inventory.count("carrot_seed"), 5);
    assert!(inventory.has_item("spade", 1));

    let hotbar = world.resource::<Hotbar>();
    assert_eq!(hotbar.tools, vec!["spade", "watering_can", "scythe"]);
    assert!(hotbar.equipped.is_none());

    let market = world.resource::<MarketState>();
    assert!(market.stocked);
    assert!(market.find("carrot_seed").is_some());
    assert_eq!(market.find("pumpkin_seed").map(|e| e.item.value), Some(35));

    let log = world.resource::<ObjectiveLog>();
    assert_eq!(log.active.len(), 4);
    assert!(log.completed.is_empty());

    let layout = world.resource::<FarmLayout>();
    assert_eq!(world.resource::<PlayerState>().tile, layout.player_start);
}

// ─────────────────────────────────────────────────────────────────────────────
// Crops
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_crop_growth_advances_when_watered() {
    let mut app = build_test_app();
    load_farm_data(&mut app);
    let mut farm = FarmState::default();
    let mut crop = new_crop_instance(&carrot_def(&app), &ToolAttributes::default());
    crop.water();
    farm.crops.insert((0, 0), crop);
    farm.crops
        .insert((1, 0), new_crop_instance(&carrot_def(&app), &ToolAttributes::default()));

    let advanced = advance_crop_growth(&mut farm, 0.25);
    assert_eq!(advanced, vec![(0, 0)]);
    assert_eq!(farm.crops[&(0, 0)].current_stage, 1);
    // The dry crop did not move.
    assert_eq!(farm.crops[&(1, 0)].current_stage, 0);
    assert_eq!(farm.crops[&(1, 0)].stage_elapsed, 0.0);
}

#[test]
fn test_growth_runs_only_while_playing() {
    let mut app = build_test_app();
    app.add_plugins(FarmingPlugin);
    load_farm_data(&mut app);
    // 0.6 real seconds per game day: 100ms frames are a sixth of a day.
    app.world_mut().resource_mut::<GameClock>().real_minutes_per_day = 0.01;

    let mut crop = new_crop_instance(&carrot_def(&app), &ToolAttributes::default());
    crop.water();
    app.world_mut()
        .resource_mut::<FarmState>()
        .crops
        .insert((0, 0), crop);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<FarmState>().crops[&(0, 0)].stage_elapsed, 0.0);

    set_state(&mut app, GameState::Market);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<FarmState>().crops[&(0, 0)].stage_elapsed, 0.0);

    enter_playing_state(&mut app);
    for _ in 0..12 {
        // Keep it topped up so only time matters.
        app.world_mut()
            .resource_mut::<FarmState>()
            .crops
            .get_mut(&(0, 0))
            .unwrap()
            .water();
        app.update();
    }
    let crop = &app.world().resource::<FarmState>().crops[&(0, 0)];
    assert!(crop.is_fully_grown(), "stage {} of {}", crop.current_stage, crop.growth_stages);
}

#[test]
fn test_harvest_requires_ripe_crop_and_inventory_room() {
    let mut app = build_test_app();
    app.add_plugins(FarmingPlugin);
    load_farm_data(&mut app);
    enter_playing_state(&mut app);

    let mut unripe = ripe_carrot(&app);
    unripe.current_stage = 0;
    app.world_mut()
        .resource_mut::<FarmState>()
        .crops
        .insert((2, 2), unripe);

    app.world_mut().send_event(HarvestAttemptEvent { tile: (2, 2) });
    app.update();
    assert!(app.world().resource::<FarmState>().crops.contains_key(&(2, 2)));
    assert_eq!(app.world().resource::<Inventory>().count("carrot"), 0);

    // Ripe, but the only slot is taken.
    let ripe = ripe_carrot(&app);
    app.world_mut()
        .resource_mut::<FarmState>()
        .crops
        .insert((2, 2), ripe);
    {
        let mut inventory = app.world_mut().resource_mut::<Inventory>();
        inventory.max_slots = 1;
        inventory.add_item(InventoryItem::new("rock", "Rock", ItemKind::Upgrade, "", 1));
    }
    app.world_mut().send_event(HarvestAttemptEvent { tile: (2, 2) });
    app.update();
    assert!(app.world().resource::<FarmState>().crops.contains_key(&(2, 2)));
    assert_eq!(app.world().resource::<Inventory>().count("carrot"), 0);

    // Room again: the same crop can be retried.
    app.world_mut().resource_mut::<Inventory>().max_slots = MAX_INVENTORY_SLOTS;
    app.world_mut().send_event(HarvestAttemptEvent { tile: (2, 2) });
    app.update();
    assert!(!app.world().resource::<FarmState>().crops.contains_key(&(2, 2)));
    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.count("carrot"), 1);
    assert_eq!(inventory.get("carrot").map(|i| i.value), Some(10));
    assert_eq!(count_events::<CropHarvestedEvent>(&app), 1);
}

#[test]
fn test_failed_add_raises_no_inventory_events() {
    let mut app = build_test_app();
    app.add_plugins(FarmingPlugin);
    load_farm_data(&mut app);
    enter_playing_state(&mut app);

    let ripe = ripe_carrot(&app);
    app.world_mut()
        .resource_mut::<FarmState>()
        .crops
        .insert((3, 3), ripe);
    {
        let mut inventory = app.world_mut().resource_mut::<Inventory>();
        inventory.max_slots = 1;
        inventory.add_item(InventoryItem::new("rock", "Rock", ItemKind::Upgrade, "", 1));
    }

    app.world_mut().send_event(HarvestAttemptEvent { tile: (3, 3) });
    app.update();

    assert!(app.world().resource::<FarmState>().crops.contains_key(&(3, 3)));
    assert_eq!(count_events::<ItemAddedEvent>(&app), 0);
    assert_eq!(count_events::<InventoryChangedEvent>(&app), 0);
    assert_eq!(count_events::<CropHarvestedEvent>(&app), 0);
}

#[test]
fn test_tool_use_plants_then_gate_blocks_repeat() {
    let mut app = build_test_app();
    app.add_plugins(FarmingPlugin);
    load_farm_data(&mut app);
    give_selected_seeds(&mut app, 2);
    enter_playing_state(&mut app);

    send_tool_use(&mut app, "spade", (0, 0));
    assert!(app.world().resource::<FarmState>().crops.contains_key(&(0, 0)));
    assert_eq!(app.world().resource::<Inventory>().count("carrot_seed"), 1);
    assert!(!app.world().resource::<ActionGate>().is_idle());
    assert_eq!(count_events::<PlantingCompleteEvent>(&app), 1);

    // Nothing ticks the gate without the player plugin, so it stays closed.
    send_tool_use(&mut app, "spade", (1, 0));
    assert!(!app.world().resource::<FarmState>().crops.contains_key(&(1, 0)));
    assert_eq!(app.world().resource::<Inventory>().count("carrot_seed"), 1);

    *app.world_mut().resource_mut::<ActionGate>() = ActionGate::Idle;
    send_tool_use(&mut app, "spade", (1, 0));
    assert!(app.world().resource::<FarmState>().crops.contains_key(&(1, 0)));
    // Last seed gone: the stack and the selection are cleared.
    let inventory = app.world().resource::<Inventory>();
    assert!(!inventory.has_item("carrot_seed", 1));
    assert!(inventory.selected_seed.is_none());
}

#[test]
fn test_planting_needs_a_free_plot() {
    let mut app = build_test_app();
    app.add_plugins(FarmingPlugin);
    load_farm_data(&mut app);
    give_selected_seeds(&mut app, 3);
    enter_playing_state(&mut app);

    // Off the field.
    send_tool_use(&mut app, "spade", (-10, -10));
    assert!(app.world().resource::<FarmState>().crops.is_empty());
    assert!(app.world().resource::<ActionGate>().is_idle());
    assert_eq!(app.world().resource::<Inventory>().count("carrot_seed"), 3);

    send_tool_use(&mut app, "spade", (0, 0));
    *app.world_mut().resource_mut::<ActionGate>() = ActionGate::Idle;
    // Occupied.
    send_tool_use(&mut app, "spade", (0, 0));
    assert_eq!(app.world().resource::<Inventory>().count("carrot_seed"), 2);
}

#[test]
fn test_watering_can_waters_neighbours_and_hoe_harvests() {
    let mut app = build_test_app();
    app.add_plugins(FarmingPlugin);
    load_farm_data(&mut app);
    enter_playing_state(&mut app);

    let def = carrot_def(&app);
    {
        let mut farm = app.world_mut().resource_mut::<FarmState>();
        farm.crops.insert((1, 1), new_crop_instance(&def, &ToolAttributes::default()));
        farm.crops.insert((2, 1), new_crop_instance(&def, &ToolAttributes::default()));
        farm.crops.insert((4, 1), new_crop_instance(&def, &ToolAttributes::default()));
    }

    send_tool_use(&mut app, "watering_can", (1, 1));
    {
        let farm = app.world().resource::<FarmState>();
        assert!(farm.crops[&(1, 1)].is_watered());
        assert!(farm.crops[&(2, 1)].is_watered());
        assert!(!farm.crops[&(4, 1)].is_watered());
    }
    assert_eq!(count_events::<WateringCompleteEvent>(&app), 1);

    *app.world_mut().resource_mut::<ActionGate>() = ActionGate::Idle;
    let ripe = ripe_carrot(&app);
    app.world_mut()
        .resource_mut::<FarmState>()
        .crops
        .insert((4, 1), ripe);
    send_tool_use(&mut app, "hoe", (4, 1));
    assert!(!app.world().resource::<FarmState>().crops.contains_key(&(4, 1)));
    assert_eq!(app.world().resource::<Inventory>().count("carrot"), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Market
// ─────────────────────────────────────────────────────────────────────────────

fn stock_single_item(app: &mut App, item: InventoryItem) {
    app.world_mut().resource_mut::<MarketState>().catalog = vec![CatalogEntry {
        item,
        stock_quantity: 1,
    }];
}

#[test]
fn test_buy_refused_without_funds_then_succeeds() {
    let mut app = build_test_app();
    app.add_plugins(EconomyPlugin);
    stock_single_item(
        &mut app,
        InventoryItem::new("hoe", "Hoe", ItemKind::Tool, "", 50),
    );
    app.world_mut().resource_mut::<Wallet>().gold = 30;

    app.world_mut().send_event(BuyRequestEvent { item_id: "hoe".into() });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().gold, 30);
    assert!(!app.world().resource::<Inventory>().has_item("hoe", 1));
    assert_eq!(count_events::<MoneyChangedEvent>(&app), 0);

    app.world_mut().resource_mut::<Wallet>().gold = 60;
    app.world_mut().send_event(BuyRequestEvent { item_id: "hoe".into() });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().gold, 10);
    assert_eq!(app.world().resource::<Inventory>().count("hoe"), 1);
}

#[test]
fn test_buy_refused_when_inventory_full() {
    let mut app = build_test_app();
    app.add_plugins(EconomyPlugin);
    stock_single_item(
        &mut app,
        InventoryItem::new("carrot_seed", "Carrot Seed", ItemKind::Seed, "", 5),
    );
    app.world_mut().resource_mut::<Wallet>().gold = 100;
    {
        let mut inventory = app.world_mut().resource_mut::<Inventory>();
        inventory.max_slots = 1;
        inventory.add_item(InventoryItem::new("rock", "Rock", ItemKind::Upgrade, "", 1));
    }

    app.world_mut().send_event(BuyRequestEvent {
        item_id: "carrot_seed".into(),
    });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().gold, 100);
    assert!(!app.world().resource::<Inventory>().has_item("carrot_seed", 1));
}

#[test]
fn test_sell_pays_floor_price_and_restocks() {
    let mut app = build_test_app();
    app.add_plugins(EconomyPlugin);
    app.world_mut()
        .resource_mut::<Inventory>()
        .add_item(InventoryItem::new("carrot", "Carrot", ItemKind::Crop, "", 11).with_quantity(3));

    app.world_mut().send_event(SellRequestEvent {
        item_id: "carrot".into(),
        whole_stack: false,
    });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().gold, 5);
    assert_eq!(app.world().resource::<Inventory>().count("carrot"), 2);
    assert!(app.world().resource::<MarketState>().find("carrot").is_some());

    app.world_mut().send_event(SellRequestEvent {
        item_id: "carrot".into(),
        whole_stack: true,
    });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().gold, 15);
    assert!(!app.world().resource::<Inventory>().has_item("carrot", 1));

    // Selling what is not held changes nothing.
    app.world_mut().send_event(SellRequestEvent {
        item_id: "carrot".into(),
        whole_stack: false,
    });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().gold, 15);
}

#[test]
fn test_market_freezes_the_clock_until_closed() {
    let mut app = build_test_app();
    app.add_plugins((ClockPlugin, EconomyPlugin));
    enter_playing_state(&mut app);
    app.update();

    app.world_mut().send_event(MarketOpenRequestEvent);
    app.update();
    app.update();
    assert_eq!(current_state(&app), GameState::Market);

    let frozen_hour = app.world().resource::<GameClock>().hour;
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<GameClock>().hour, frozen_hour);

    app.world_mut().resource_mut::<PlayerInput>().ui_cancel = true;
    app.update();
    app.world_mut().resource_mut::<PlayerInput>().ui_cancel = false;
    app.update();
    assert_eq!(current_state(&app), GameState::Playing);
    app.update();
    assert!(app.world().resource::<GameClock>().hour > frozen_hour);
}

// ─────────────────────────────────────────────────────────────────────────────
// Objectives
// ─────────────────────────────────────────────────────────────────────────────

fn objective_config(id: &str, kind: ObjectiveKind, reward: u32) -> ObjectiveConfig {
    ObjectiveConfig {
        id: id.into(),
        title: id.into(),
        description: None,
        reward,
        kind,
    }
}

#[test]
fn test_money_objective_completes_exactly_once() {
    let mut app = build_test_app();
    app.add_plugins(ObjectivesPlugin);
    app.world_mut().resource_mut::<ObjectiveDatabase>().initial =
        vec![objective_config("rich", ObjectiveKind::Money { target: 100 }, 10)];
    enter_playing_state(&mut app);
    app.update();
    assert_eq!(app.world().resource::<ObjectiveLog>().active.len(), 1);

    app.world_mut().resource_mut::<Wallet>().gold = 100;
    for _ in 0..5 {
        app.update();
    }

    let log = app.world().resource::<ObjectiveLog>();
    assert!(log.active.is_empty());
    assert_eq!(log.completed.len(), 1);
    assert!(log.completed[0].completed);
    assert_eq!(app.world().resource::<Wallet>().gold, 110);
}

#[test]
fn test_crop_objective_counts_quantities_and_queues_follow_up() {
    let mut app = build_test_app();
    app.add_plugins(ObjectivesPlugin);
    {
        let mut db = app.world_mut().resource_mut::<ObjectiveDatabase>();
        db.initial = vec![objective_config("harvest", ObjectiveKind::Crop { target: 5 }, 20)];
        db.follow_ups = vec![FollowUpRule {
            trigger_objective_id: "harvest".into(),
            new_objective: objective_config("more", ObjectiveKind::Crop { target: 10 }, 40),
        }];
    }
    enter_playing_state(&mut app);

    for quantity in [1, 1, 1] {
        app.world_mut().send_event(ItemAddedEvent {
            item: InventoryItem::new("carrot", "Carrot", ItemKind::Crop, "", 10).with_quantity(quantity),
        });
    }
    // Seeds never count towards a crop objective.
    app.world_mut().send_event(ItemAddedEvent {
        item: InventoryItem::new("carrot_seed", "Carrot Seed", ItemKind::Seed, "", 5).with_quantity(9),
    });
    app.update();
    // One progress event per crop stack; the seed moved nothing.
    assert_eq!(count_events::<ObjectiveProgressEvent>(&app), 3);
    {
        let log = app.world().resource::<ObjectiveLog>();
        assert_eq!(log.active[0].progress, 3);
        assert_eq!(log.active[0].display_description(), "Harvest 5 crops (3/5)");
    }

    app.world_mut().send_event(ItemAddedEvent {
        item: InventoryItem::new("carrot", "Carrot", ItemKind::Crop, "", 10).with_quantity(2),
    });
    app.update();

    let log = app.world().resource::<ObjectiveLog>();
    assert_eq!(log.completed.len(), 1);
    assert_eq!(log.completed[0].progress, 5);
    assert_eq!(log.active.len(), 1);
    assert_eq!(log.active[0].id, "more");
    assert_eq!(log.active[0].progress, 0);
    assert_eq!(app.world().resource::<Wallet>().gold, 20);
}

#[test]
fn test_crops_bought_in_the_market_count_towards_objectives() {
    let mut app = build_test_app();
    app.add_plugins((EconomyPlugin, ObjectivesPlugin));
    app.world_mut().resource_mut::<ObjectiveDatabase>().initial =
        vec![objective_config("harvest", ObjectiveKind::Crop { target: 1 }, 5)];
    enter_playing_state(&mut app);
    stock_single_item(
        &mut app,
        InventoryItem::new("carrot", "Carrot", ItemKind::Crop, "", 10),
    );
    app.world_mut().resource_mut::<Wallet>().gold = 50;

    set_state(&mut app, GameState::Market);
    app.world_mut().send_event(BuyRequestEvent { item_id: "carrot".into() });
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<Inventory>().count("carrot"), 1);
    {
        // Counted while shopping, but not completed until play resumes.
        let log = app.world().resource::<ObjectiveLog>();
        assert_eq!(log.active.len(), 1);
        assert_eq!(log.active[0].progress, 1);
    }

    enter_playing_state(&mut app);
    for _ in 0..3 {
        app.update();
    }
    let log = app.world().resource::<ObjectiveLog>();
    assert!(log.active.is_empty());
    assert_eq!(log.completed.len(), 1);
    assert_eq!(log.completed[0].id, "harvest");
    assert_eq!(app.world().resource::<Wallet>().gold, 45);
}

#[test]
fn test_planting_and_watering_feed_objectives() {
    let mut app = build_test_app();
    app.add_plugins((FarmingPlugin, ObjectivesPlugin));
    load_farm_data(&mut app);
    app.world_mut().resource_mut::<ObjectiveDatabase>().initial = vec![
        objective_config("plant", ObjectiveKind::Planting { target: 1 }, 5),
        objective_config("water", ObjectiveKind::Watering { target: 2 }, 5),
    ];
    give_selected_seeds(&mut app, 1);
    enter_playing_state(&mut app);

    send_tool_use(&mut app, "spade", (0, 0));
    *app.world_mut().resource_mut::<ActionGate>() = ActionGate::Idle;
    send_tool_use(&mut app, "watering_can", (0, 0));
    app.update();

    let log = app.world().resource::<ObjectiveLog>();
    assert_eq!(log.completed.len(), 1);
    assert_eq!(log.completed[0].id, "plant");
    assert_eq!(log.active.len(), 1);
    assert_eq!(log.active[0].progress, 1);
    assert_eq!(app.world().resource::<Wallet>().gold, 5);
}

// ─────────────────────────────────────────────────────────────────────────────
// Clock and sleep
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_clock_rolls_into_next_day() {
    let mut app = build_test_app();
    app.add_plugins(ClockPlugin);
    {
        let mut clock = app.world_mut().resource_mut::<GameClock>();
        clock.hour = 23.9;
        clock.real_minutes_per_day = 0.01;
    }
    enter_playing_state(&mut app);
    for _ in 0..3 {
        app.update();
    }

    let clock = app.world().resource::<GameClock>();
    assert_eq!(clock.day, 2);
    assert!(clock.hour < 24.0);
}

#[test]
fn test_clock_is_frozen_outside_playing() {
    let mut app = build_test_app();
    app.add_plugins(ClockPlugin);
    set_state(&mut app, GameState::Paused);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<GameClock>().hour, START_HOUR);
}

#[test]
fn test_sleep_fast_forwards_six_hours_then_restores_speed() {
    let mut app = build_test_app();
    app.add_plugins(ClockPlugin);
    app.world_mut().resource_mut::<GameClock>().hour = 22.0;
    enter_playing_state(&mut app);

    app.world_mut().send_event(SleepRequestEvent);
    app.update();
    assert!(app.world().resource::<SleepState>().is_asleep());

    for _ in 0..10 {
        app.update();
    }

    assert!(!app.world().resource::<SleepState>().is_asleep());
    let clock = app.world().resource::<GameClock>();
    assert_eq!(clock.real_minutes_per_day, DEFAULT_REAL_MINUTES_PER_DAY);
    assert_eq!(clock.day, 2);
    assert!(clock.hour >= 4.0 && clock.hour < 8.0, "woke at {}", clock.hour);
}

// ─────────────────────────────────────────────────────────────────────────────
// Player
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_equip_and_swing_from_player_input() {
    let mut app = build_test_app();
    app.add_plugins((PlayerPlugin, FarmingPlugin));
    load_farm_data(&mut app);
    app.world_mut().resource_mut::<Hotbar>().tools =
        vec!["spade".into(), "watering_can".into()];
    give_selected_seeds(&mut app, 1);
    enter_playing_state(&mut app);

    // Player starts just south of the field; face north onto plot (0, 0).
    app.world_mut().resource_mut::<PlayerState>().facing = Facing::Up;

    app.world_mut().resource_mut::<PlayerInput>().tool_slot = Some(0);
    app.update();
    app.world_mut().resource_mut::<PlayerInput>().tool_slot = None;
    assert_eq!(app.world().resource::<Hotbar>().equipped_tool(), Some("spade"));

    app.world_mut().resource_mut::<PlayerInput>().tool_use = true;
    app.update();
    app.world_mut().resource_mut::<PlayerInput>().tool_use = false;
    app.update();
    assert!(app.world().resource::<FarmState>().crops.contains_key(&(0, 0)));

    // The gate reopens after the spade's use delay.
    for _ in 0..4 {
        app.update();
    }
    assert!(app.world().resource::<ActionGate>().is_idle());

    // Same key again unequips.
    app.world_mut().resource_mut::<PlayerInput>().tool_slot = Some(0);
    app.update();
    app.world_mut().resource_mut::<PlayerInput>().tool_slot = None;
    assert!(app.world().resource::<Hotbar>().equipped.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Tutorial
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tutorial_plays_once_and_can_be_reset() {
    let mut app = build_test_app();
    app.add_plugins(TutorialPlugin);
    app.world_mut().resource_mut::<TutorialScript>().steps = vec![
        TutorialStep {
            message: "first".into(),
            display_time: 0.15,
        },
        TutorialStep {
            message: "second".into(),
            display_time: 0.15,
        },
    ];
    enter_playing_state(&mut app);
    assert!(app.world().resource::<TutorialState>().started);
    assert!(app.world().resource::<TutorialState>().current.is_some());

    for _ in 0..8 {
        app.update();
    }
    assert!(app.world().resource::<UserSettings>().tutorial_completed);
    assert_eq!(app.world().resource::<TutorialState>().current, None);

    app.world_mut().send_event(TutorialResetEvent);
    app.update();
    assert!(!app.world().resource::<UserSettings>().tutorial_completed);
    assert_eq!(app.world().resource::<TutorialState>().current, Some(0));
}

#[test]
fn test_completed_tutorial_does_not_start() {
    let mut app = build_test_app();
    app.add_plugins(TutorialPlugin);
    app.world_mut().resource_mut::<TutorialScript>().steps = vec![TutorialStep {
        message: "hello".into(),
        display_time: 5.0,
    }];
    app.world_mut().resource_mut::<UserSettings>().tutorial_completed = true;
    enter_playing_state(&mut app);
    app.update();
    assert!(!app.world().resource::<TutorialState>().started);
}
