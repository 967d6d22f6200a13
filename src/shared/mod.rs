//! Shared components, resources, events, and states for Sproutvale.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE: top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    Paused,
    Market,
}

// ═══════════════════════════════════════════════════════════════════════
// CLOCK
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Dawn,    // 5-7
    Morning, // 7-12
    Noon,    // 12-14
    Evening, // 14-19
    Dusk,    // 19-21
    Night,   // 21-5
}

impl TimeOfDay {
    pub fn from_hour(hour: f32) -> Self {
        if (5.0..7.0).contains(&hour) {
            TimeOfDay::Dawn
        } else if (7.0..12.0).contains(&hour) {
            TimeOfDay::Morning
        } else if (12.0..14.0).contains(&hour) {
            TimeOfDay::Noon
        } else if (14.0..19.0).contains(&hour) {
            TimeOfDay::Evening
        } else if (19.0..21.0).contains(&hour) {
            TimeOfDay::Dusk
        } else {
            TimeOfDay::Night
        }
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    pub hour: f32, // 0.0..24.0
    pub day: u32,  // starts at 1
    /// Real minutes for one full in-game day. Sleeping shrinks this temporarily.
    pub real_minutes_per_day: f32,
    pub last_time_of_day: TimeOfDay,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            hour: START_HOUR,
            day: 1,
            real_minutes_per_day: DEFAULT_REAL_MINUTES_PER_DAY,
            last_time_of_day: TimeOfDay::from_hour(START_HOUR),
        }
    }
}

impl GameClock {
    pub fn real_seconds_per_day(&self) -> f32 {
        self.real_minutes_per_day * 60.0
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour)
    }

    /// Converts real seconds into fractional in-game days.
    pub fn days_from_real_seconds(&self, seconds: f32) -> f32 {
        let per_day = self.real_seconds_per_day();
        if per_day > 0.0 {
            seconds / per_day
        } else {
            0.0
        }
    }
}

/// Ambient light level (0.1 = midnight dark, 1.0 = noon bright).
#[derive(Resource, Debug, Clone)]
pub struct DayNightTint {
    pub intensity: f32,
    pub target_intensity: f32,
    pub next_refresh_secs: f32,
}

impl Default for DayNightTint {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            target_intensity: 1.0,
            next_refresh_secs: 0.0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS & INVENTORY
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
pub type ItemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Seed,
    Crop,
    Tool,
    Upgrade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub icon: String,
    pub quantity: u32,
    pub value: u32,
    /// Fraction of `value` paid back when sold, in (0, 1].
    pub sell_multiplier: f32,
}

impl InventoryItem {
    pub fn new(
        item_id: impl Into<ItemId>,
        name: impl Into<String>,
        kind: ItemKind,
        icon: impl Into<String>,
        value: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            kind,
            icon: icon.into(),
            quantity: 1,
            value,
            sell_multiplier: DEFAULT_SELL_MULTIPLIER,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn with_sell_multiplier(mut self, multiplier: f32) -> Self {
        self.sell_multiplier = multiplier.clamp(0.01, 1.0);
        self
    }

    /// Gold paid for one unit. Fractions are dropped.
    pub fn unit_sell_price(&self) -> u32 {
        (self.value as f32 * self.sell_multiplier).floor() as u32
    }
}

/// What `Inventory::remove_item` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub removed: u32,
    pub stack_emptied: bool,
    pub selection_cleared: bool,
}

/// Outcome of a seed selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSelection {
    Selected(ItemId),
    Cleared,
    Rejected,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<InventoryItem>,
    pub max_slots: usize,
    pub selected_seed: Option<ItemId>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            max_slots: MAX_INVENTORY_SLOTS,
            selected_seed: None,
        }
    }
}

impl Inventory {
    /// Stack onto an existing record or take a free slot.
    /// Returns false when the inventory is full; nothing changes in that case.
    pub fn add_item(&mut self, item: InventoryItem) -> bool {
        if let Some(existing) = self.items.iter_mut().find(|i| i.item_id == item.item_id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            return true;
        }
        if self.items.len() < self.max_slots {
            self.items.push(item);
            return true;
        }
        false
    }

    /// True if `add_item` would succeed for this id.
    pub fn can_accept(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.item_id == item_id) || self.items.len() < self.max_slots
    }

    /// Decrement a stack, dropping it when it reaches zero.
    /// Returns None when the id is not held.
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) -> Option<Removal> {
        let index = self.items.iter().position(|i| i.item_id == item_id)?;
        let held = self.items[index].quantity;
        let removed = quantity.min(held);
        let stack_emptied = quantity >= held;

        let mut selection_cleared = false;
        if stack_emptied {
            self.items.remove(index);
            if self.selected_seed.as_deref() == Some(item_id) {
                self.selected_seed = None;
                selection_cleared = true;
            }
        } else {
            self.items[index].quantity = held - quantity;
        }

        Some(Removal {
            removed,
            stack_emptied,
            selection_cleared,
        })
    }

    pub fn has_item(&self, item_id: &str, quantity: u32) -> bool {
        self.count(item_id) >= quantity
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.get(item_id).map(|i| i.quantity).unwrap_or(0)
    }

    pub fn get(&self, item_id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.item_id == item_id)
    }

    pub fn selected_seed(&self) -> Option<&InventoryItem> {
        self.selected_seed.as_deref().and_then(|id| self.get(id))
    }

    /// Toggle-select a seed. Selecting the current seed clears the selection,
    /// selecting something not held is rejected.
    pub fn select_seed(&mut self, item_id: Option<&str>) -> SeedSelection {
        match item_id {
            None => {
                self.selected_seed = None;
                SeedSelection::Cleared
            }
            Some(id) if self.selected_seed.as_deref() == Some(id) => {
                self.selected_seed = None;
                SeedSelection::Cleared
            }
            Some(id) if !self.has_item(id, 1) => SeedSelection::Rejected,
            Some(id) => {
                self.selected_seed = Some(id.to_string());
                SeedSelection::Selected(id.to_string())
            }
        }
    }

    pub fn seeds(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|i| i.kind == ItemKind::Seed)
    }
}

/// Event writers every inventory mutation reports through, so the objective
/// tracker and the market see each change.
#[derive(SystemParam)]
pub struct InventoryWriters<'w> {
    pub added: EventWriter<'w, ItemAddedEvent>,
    pub changed: EventWriter<'w, InventoryChangedEvent>,
    pub selected: EventWriter<'w, SeedSelectedEvent>,
}

impl InventoryWriters<'_> {
    /// Adds and announces. A full inventory is logged and raises nothing.
    pub fn add(&mut self, inventory: &mut Inventory, item: InventoryItem) -> bool {
        if !inventory.add_item(item.clone()) {
            warn!("[Inventory] Inventory is full! Could not add {}", item.item_id);
            return false;
        }
        info!("[Inventory] +{} {}", item.quantity, item.name);
        self.added.send(ItemAddedEvent { item });
        self.changed.send(InventoryChangedEvent);
        true
    }

    /// Removes and announces. Absent ids are ignored.
    pub fn remove(&mut self, inventory: &mut Inventory, item_id: &str, quantity: u32) -> Option<Removal> {
        let removal = inventory.remove_item(item_id, quantity)?;
        if removal.selection_cleared {
            self.selected.send(SeedSelectedEvent { item_id: None });
        }
        self.changed.send(InventoryChangedEvent);
        Some(removal)
    }

    pub fn select(&mut self, inventory: &mut Inventory, item_id: Option<&str>) -> SeedSelection {
        let selection = inventory.select_seed(item_id);
        match &selection {
            SeedSelection::Selected(id) => {
                info!("[Inventory] Selected seed {}", id);
                self.selected.send(SeedSelectedEvent {
                    item_id: Some(id.clone()),
                });
            }
            SeedSelection::Cleared => {
                self.selected.send(SeedSelectedEvent { item_id: None });
            }
            SeedSelection::Rejected => {
                warn!("[Inventory] Cannot select {:?}: not in inventory", item_id);
            }
        }
        selection
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WALLET
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub gold: u32,
}

impl Wallet {
    pub fn credit(&mut self, amount: u32) -> u32 {
        self.gold = self.gold.saturating_add(amount);
        self.gold
    }

    /// Debits only when the balance covers the amount.
    pub fn try_debit(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }
}

/// Format a gold amount as a display string (e.g. "$1,234").
pub fn format_money(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

// ═══════════════════════════════════════════════════════════════════════
// FARMING
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropDef {
    pub id: ItemId,
    pub name: String,
    pub base_value: u32,
    pub seed_value: u32,
    #[serde(default = "default_sell_multiplier")]
    pub sell_multiplier: f32,
    pub growth_stages: u8,
    /// Game days spent in each stage.
    pub time_per_stage: f32,
    pub water_consumption_per_day: f32,
}

fn default_sell_multiplier() -> f32 {
    DEFAULT_SELL_MULTIPLIER
}

impl CropDef {
    pub fn seed_id(&self) -> ItemId {
        format!("{}{}", self.id, SEED_SUFFIX)
    }

    pub fn seed_name(&self) -> String {
        format!("{} Seed", self.name)
    }

    pub fn total_growth_days(&self) -> f32 {
        self.time_per_stage * self.growth_stages.saturating_sub(1) as f32
    }

    pub fn seed_item(&self) -> InventoryItem {
        InventoryItem::new(
            self.seed_id(),
            self.seed_name(),
            ItemKind::Seed,
            format!("icons/seeds/{}", self.id),
            self.seed_value,
        )
        .with_sell_multiplier(self.sell_multiplier)
    }

    pub fn crop_item(&self) -> InventoryItem {
        InventoryItem::new(
            self.id.clone(),
            self.name.clone(),
            ItemKind::Crop,
            format!("icons/crops/{}", self.id),
            self.base_value,
        )
        .with_sell_multiplier(self.sell_multiplier)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CropRegistry {
    pub crops: HashMap<ItemId, CropDef>,
}

impl CropRegistry {
    pub fn get(&self, crop_id: &str) -> Option<&CropDef> {
        self.crops.get(crop_id)
    }

    /// "carrot_seed" → the carrot definition.
    pub fn for_seed(&self, seed_id: &str) -> Option<&CropDef> {
        self.get(seed_id.strip_suffix(SEED_SUFFIX)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropPhase {
    GrowingWatered,
    GrowingDry,
    FullyGrown,
}

/// A planted crop. Growth numbers are copied from the definition at planting
/// time so tool attributes can scale them per plant.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropInstance {
    pub crop_id: ItemId,
    pub name: String,
    pub base_value: u32,
    pub sell_multiplier: f32,
    pub growth_stages: u8,
    pub time_per_stage: f32,
    pub water_consumption_per_day: f32,
    pub current_stage: u8,
    pub stage_elapsed: f32,
    pub water_level: f32,
}

impl CropInstance {
    pub fn is_watered(&self) -> bool {
        self.water_level > 0.0
    }

    pub fn is_fully_grown(&self) -> bool {
        self.current_stage + 1 >= self.growth_stages
    }

    pub fn phase(&self) -> CropPhase {
        if self.is_fully_grown() {
            CropPhase::FullyGrown
        } else if self.is_watered() {
            CropPhase::GrowingWatered
        } else {
            CropPhase::GrowingDry
        }
    }

    /// The record a harvest puts into the inventory.
    pub fn harvest_item(&self, quantity: u32) -> InventoryItem {
        InventoryItem::new(
            self.crop_id.clone(),
            self.name.clone(),
            ItemKind::Crop,
            format!("icons/crops/{}", self.crop_id),
            self.base_value,
        )
        .with_sell_multiplier(self.sell_multiplier)
        .with_quantity(quantity)
    }

    /// Refill to the brim. Repeated watering does not stack.
    pub fn water(&mut self) {
        self.water_level = MAX_WATER_LEVEL;
    }
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmState {
    /// Planted crops. Key = (x, y).
    pub crops: HashMap<(i32, i32), CropInstance>,
}

/// Static layout of the farm: plantable plots and interactable buildings.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmLayout {
    pub plots: HashSet<(i32, i32)>,
    pub market_tile: (i32, i32),
    pub home_tile: (i32, i32),
    pub player_start: (i32, i32),
}

impl FarmLayout {
    pub fn is_plot(&self, pos: (i32, i32)) -> bool {
        self.plots.contains(&pos)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TOOLS & PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Spade,       // planting
    WateringCan, // watering
    Scythe,      // harvesting
    Hoe,         // harvest if ripe, otherwise plant
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolAttributes {
    /// Lower value means faster growth.
    pub growth_time_multiplier: f32,
    /// Lower value means less water consumption.
    pub water_consumption_multiplier: f32,
    /// Higher value means more items harvested.
    pub harvest_quantity_multiplier: f32,
}

impl Default for ToolAttributes {
    fn default() -> Self {
        Self {
            growth_time_multiplier: 1.0,
            water_consumption_multiplier: 1.0,
            harvest_quantity_multiplier: 1.0,
        }
    }
}

impl ToolAttributes {
    pub fn harvest_quantity(&self) -> u32 {
        (self.harvest_quantity_multiplier.round() as u32).max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    pub id: ItemId,
    pub name: String,
    pub kind: ToolKind,
    /// Seconds the action gate stays busy after a successful use.
    pub use_delay: f32,
    pub base_value: u32,
    #[serde(default)]
    pub watering_radius: f32,
    #[serde(default)]
    pub attributes: ToolAttributes,
}

impl ToolDef {
    pub fn to_item(&self) -> InventoryItem {
        InventoryItem::new(
            self.id.clone(),
            self.name.clone(),
            ItemKind::Tool,
            format!("icons/tools/{}", self.id),
            self.base_value,
        )
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ToolRegistry {
    pub tools: HashMap<ItemId, ToolDef>,
}

impl ToolRegistry {
    pub fn get(&self, tool_id: &str) -> Option<&ToolDef> {
        self.tools.get(tool_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Facing::Up => (0, 1),
            Facing::Down => (0, -1),
            Facing::Left => (-1, 0),
            Facing::Right => (1, 0),
        }
    }
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerState {
    pub tile: (i32, i32),
    pub facing: Facing,
}

impl PlayerState {
    /// The tile directly in front of the player.
    pub fn target_tile(&self) -> (i32, i32) {
        let (dx, dy) = self.facing.offset();
        (self.tile.0 + dx, self.tile.1 + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolAction {
    Plant,
    Water,
    Harvest,
}

/// Blocks tool use while the previous action plays out.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum ActionGate {
    #[default]
    Idle,
    Busy {
        action: ToolAction,
        elapsed: f32,
        duration: f32,
    },
}

impl ActionGate {
    pub fn is_idle(&self) -> bool {
        matches!(self, ActionGate::Idle)
    }

    pub fn begin(&mut self, action: ToolAction, duration: f32) {
        *self = ActionGate::Busy {
            action,
            elapsed: 0.0,
            duration,
        };
    }

    /// Advances a busy gate. Returns the action that just finished, if any.
    pub fn tick(&mut self, delta_secs: f32) -> Option<ToolAction> {
        let ActionGate::Busy {
            action,
            elapsed,
            duration,
        } = self
        else {
            return None;
        };
        *elapsed += delta_secs;
        if *elapsed < *duration {
            return None;
        }
        let finished = *action;
        *self = ActionGate::Idle;
        Some(finished)
    }
}

/// Owned tools in hotbar order and the equipped slot.
#[derive(Resource, Debug, Clone, Default)]
pub struct Hotbar {
    pub tools: Vec<ItemId>,
    pub equipped: Option<usize>,
}

impl Hotbar {
    /// Pressing the equipped slot again, or a slot past the owned tools,
    /// unequips. Returns true when the equipped tool changed.
    pub fn select_slot(&mut self, slot: usize) -> bool {
        let next = if self.equipped == Some(slot) || slot >= self.tools.len() {
            None
        } else {
            Some(slot)
        };
        let changed = next != self.equipped;
        self.equipped = next;
        changed
    }

    pub fn equipped_tool(&self) -> Option<&str> {
        self.equipped
            .and_then(|slot| self.tools.get(slot))
            .map(String::as_str)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// OBJECTIVES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveKind {
    Money { target: u32 },
    Crop { target: u32 },
    Planting { target: u32 },
    Watering { target: u32 },
}

impl ObjectiveKind {
    pub fn target(&self) -> u32 {
        match *self {
            ObjectiveKind::Money { target }
            | ObjectiveKind::Crop { target }
            | ObjectiveKind::Planting { target }
            | ObjectiveKind::Watering { target } => target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub reward: u32,
    pub kind: ObjectiveKind,
}

/// When `trigger_objective_id` completes, `new_objective` is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpRule {
    pub trigger_objective_id: String,
    pub new_objective: ObjectiveConfig,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectiveDatabase {
    pub initial: Vec<ObjectiveConfig>,
    pub follow_ups: Vec<FollowUpRule>,
}

impl ObjectiveDatabase {
    /// First follow-up configured for the given objective, in list order.
    pub fn follow_up_for(&self, objective_id: &str) -> Option<&ObjectiveConfig> {
        self.follow_ups
            .iter()
            .find(|rule| rule.trigger_objective_id == objective_id)
            .map(|rule| &rule.new_objective)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward: u32,
    pub kind: ObjectiveKind,
    /// Count objectives only; money objectives read the wallet instead.
    pub progress: u32,
    pub completed: bool,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectiveLog {
    pub active: Vec<Objective>,
    pub completed: Vec<Objective>,
    pub seeded: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// DATA TABLES: starting items, market stock, tutorial
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSource {
    Tool,
    Seed,
    Crop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartingItem {
    pub source: ItemSource,
    /// Tool id for tools, crop id for seeds and crops.
    pub id: String,
    pub quantity: u32,
}

impl ItemSource {
    /// Builds the inventory record a data-table row refers to.
    pub fn resolve(
        self,
        id: &str,
        crops: &CropRegistry,
        tools: &ToolRegistry,
    ) -> Option<InventoryItem> {
        match self {
            ItemSource::Tool => tools.get(id).map(ToolDef::to_item),
            ItemSource::Seed => crops.get(id).map(CropDef::seed_item),
            ItemSource::Crop => crops.get(id).map(CropDef::crop_item),
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct StartingItems {
    pub items: Vec<StartingItem>,
    pub granted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketStockEntry {
    pub source: ItemSource,
    pub id: String,
    /// Overrides the default price when set.
    #[serde(default)]
    pub custom_value: Option<u32>,
    #[serde(default = "default_stock_quantity")]
    pub stock_quantity: u32,
}

fn default_stock_quantity() -> u32 {
    1
}

#[derive(Resource, Debug, Clone, Default)]
pub struct MarketStock {
    pub entries: Vec<MarketStockEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorialStep {
    pub message: String,
    #[serde(default = "default_tutorial_display_time")]
    pub display_time: f32,
}

fn default_tutorial_display_time() -> f32 {
    5.0
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TutorialScript {
    pub steps: Vec<TutorialStep>,
}

// ═══════════════════════════════════════════════════════════════════════
// SETTINGS: the only persisted state
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub tutorial_completed: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            tutorial_completed: false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT: hardware keys mapped to game actions once per frame
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    pub move_dir: Option<Facing>,
    pub tool_use: bool,
    pub interact: bool,
    pub tool_slot: Option<u8>,
    pub cycle_seed: bool,
    pub pause: bool,
    pub ui_up: bool,
    pub ui_down: bool,
    pub ui_confirm: bool,
    pub ui_cancel: bool,
    pub tab_pressed: bool,
    pub sell_stack: bool,
    pub skip_tutorial: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub tool_use: KeyCode,
    pub interact: KeyCode,
    pub cycle_seed: KeyCode,
    pub pause: KeyCode,
    pub ui_confirm: KeyCode,
    pub ui_cancel: KeyCode,
    pub sell_stack: KeyCode,
    pub skip_tutorial: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            tool_use: KeyCode::Space,
            interact: KeyCode::KeyF,
            cycle_seed: KeyCode::KeyR,
            pause: KeyCode::Escape,
            ui_confirm: KeyCode::Enter,
            ui_cancel: KeyCode::Escape,
            sell_stack: KeyCode::ShiftLeft,
            skip_tutorial: KeyCode::KeyT,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    Disabled,
    Gameplay,
    Menu,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS: cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct HourChangedEvent {
    pub hour: f32,
}

#[derive(Event, Debug, Clone)]
pub struct DayChangedEvent {
    pub day: u32,
}

#[derive(Event, Debug, Clone)]
pub struct TimeOfDayChangedEvent {
    pub time_of_day: TimeOfDay,
}

/// Carries the record that was added, with the quantity added.
#[derive(Event, Debug, Clone)]
pub struct ItemAddedEvent {
    pub item: InventoryItem,
}

#[derive(Event, Debug, Clone, Default)]
pub struct InventoryChangedEvent;

#[derive(Event, Debug, Clone)]
pub struct SeedSelectedEvent {
    pub item_id: Option<ItemId>,
}

#[derive(Event, Debug, Clone)]
pub struct ItemSoldEvent {
    pub item: InventoryItem,
    pub quantity: u32,
    pub gold: u32,
}

#[derive(Event, Debug, Clone)]
pub struct MoneyChangedEvent {
    pub balance: u32,
    pub delta: i64, // positive = gain, negative = spend
    pub reason: String,
}

#[derive(Event, Debug, Clone)]
pub struct PlantingCompleteEvent {
    pub crop_id: ItemId,
    pub tile: (i32, i32),
}

#[derive(Event, Debug, Clone)]
pub struct WateringCompleteEvent {
    pub tile: (i32, i32),
    pub crops_watered: u32,
}

#[derive(Event, Debug, Clone)]
pub struct CropHarvestedEvent {
    pub crop_id: ItemId,
    pub quantity: u32,
    pub tile: (i32, i32),
}

/// The player swung the equipped tool at a tile.
#[derive(Event, Debug, Clone)]
pub struct ToolUseEvent {
    pub tool_id: ItemId,
    pub target: (i32, i32),
}

/// Bare-handed harvest of the crop on a tile.
#[derive(Event, Debug, Clone)]
pub struct HarvestAttemptEvent {
    pub tile: (i32, i32),
}

#[derive(Event, Debug, Clone)]
pub struct ToolEquippedEvent {
    pub tool_id: Option<ItemId>,
}

#[derive(Event, Debug, Clone)]
pub struct ObjectiveAddedEvent {
    pub objective_id: String,
    pub title: String,
}

#[derive(Event, Debug, Clone)]
pub struct ObjectiveProgressEvent {
    pub objective_id: String,
    pub progress: u32,
    pub target: u32,
}

#[derive(Event, Debug, Clone)]
pub struct ObjectiveCompletedEvent {
    pub objective_id: String,
    pub title: String,
    pub reward: u32,
}

#[derive(Event, Debug, Clone, Default)]
pub struct MarketOpenRequestEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeChannel {
    Music,
    Sfx,
}

#[derive(Event, Debug, Clone)]
pub struct VolumeChangeEvent {
    pub channel: VolumeChannel,
    pub volume: f32,
}

#[derive(Event, Debug, Clone, Default)]
pub struct SleepRequestEvent;

#[derive(Event, Debug, Clone)]
pub struct WakeUpEvent {
    pub day: u32,
    pub hour: f32,
}

#[derive(Event, Debug, Clone)]
pub struct TutorialStepEvent {
    pub index: usize,
    pub message: String,
}

#[derive(Event, Debug, Clone, Default)]
pub struct TutorialCompletedEvent;

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const MAX_INVENTORY_SLOTS: usize = 24;
pub const MAX_HOTBAR_SLOTS: usize = 9;
pub const MAX_MARKET_SLOTS: usize = 12;

pub const DEFAULT_SELL_MULTIPLIER: f32 = 0.5;
pub const SEED_SUFFIX: &str = "_seed";
pub const MAX_WATER_LEVEL: f32 = 1.0;

pub const HOURS_PER_DAY: f32 = 24.0;
pub const START_HOUR: f32 = 6.0;
pub const DEFAULT_REAL_MINUTES_PER_DAY: f32 = 20.0;

pub const DEFAULT_MUSIC_VOLUME: f32 = 0.06;
pub const DEFAULT_SFX_VOLUME: f32 = 1.0;
