use bevy::prelude::*;
use crate::shared::*;

use super::wallet::{charge, pay};

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketTab {
    #[default]
    Buy,
    Sell,
}

/// One item type the market sells. `item.value` is the buy price.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub item: InventoryItem,
    pub stock_quantity: u32,
}

/// The market's catalog plus the player's position in its listings.
#[derive(Resource, Debug, Clone, Default)]
pub struct MarketState {
    pub tab: MarketTab,
    pub cursor: usize,
    pub catalog: Vec<CatalogEntry>,
    pub stocked: bool,
}

impl MarketState {
    pub fn find(&self, item_id: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|e| e.item.item_id == item_id)
    }

    /// Adds a type the player sold so it can be bought back.
    /// Returns false if it is already listed or the catalog is full.
    pub fn restock(&mut self, item: &InventoryItem) -> bool {
        if self.find(&item.item_id).is_some() || self.catalog.len() >= MAX_MARKET_SLOTS {
            return false;
        }
        self.catalog.push(CatalogEntry {
            item: item.clone().with_quantity(1),
            stock_quantity: 1,
        });
        true
    }
}

/// A single cell in either tab. Tabs always show MAX_MARKET_SLOTS cells.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketSlot {
    Empty,
    Listing {
        item_id: ItemId,
        name: String,
        /// Buy price on the buy tab, unit sell price on the sell tab.
        price: u32,
        quantity: u32,
        /// Buy tab: the wallet covers the price. Sell tab: always true.
        available: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Events (internal: drive transactions from market input)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Event, Debug, Clone)]
pub struct BuyRequestEvent {
    pub item_id: ItemId,
}

#[derive(Event, Debug, Clone)]
pub struct SellRequestEvent {
    pub item_id: ItemId,
    /// Sell every unit instead of one.
    pub whole_stack: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog and listings
// ─────────────────────────────────────────────────────────────────────────────

/// Resolves the stock table into catalog entries. Unknown ids are skipped
/// and the catalog is capped at MAX_MARKET_SLOTS.
pub fn build_catalog(
    stock: &MarketStock,
    crops: &CropRegistry,
    tools: &ToolRegistry,
) -> Vec<CatalogEntry> {
    let mut catalog: Vec<CatalogEntry> = Vec::new();
    for entry in &stock.entries {
        let Some(mut item) = entry.source.resolve(&entry.id, crops, tools) else {
            warn!("[Economy] Market stock refers to unknown {:?} '{}'", entry.source, entry.id);
            continue;
        };
        if let Some(custom) = entry.custom_value.filter(|v| *v > 0) {
            item.value = custom;
        }
        if catalog.iter().any(|c| c.item.item_id == item.item_id) {
            continue;
        }
        if catalog.len() >= MAX_MARKET_SLOTS {
            warn!("[Economy] Market catalog full, dropping '{}'", item.item_id);
            continue;
        }
        catalog.push(CatalogEntry {
            item,
            stock_quantity: entry.stock_quantity,
        });
    }
    catalog
}

fn pad(mut slots: Vec<MarketSlot>) -> Vec<MarketSlot> {
    slots.truncate(MAX_MARKET_SLOTS);
    slots.resize(MAX_MARKET_SLOTS, MarketSlot::Empty);
    slots
}

pub fn buy_slots(market: &MarketState, wallet: &Wallet) -> Vec<MarketSlot> {
    pad(market
        .catalog
        .iter()
        .map(|entry| MarketSlot::Listing {
            item_id: entry.item.item_id.clone(),
            name: entry.item.name.clone(),
            price: entry.item.value,
            quantity: entry.stock_quantity,
            available: wallet.gold >= entry.item.value,
        })
        .collect())
}

pub fn sell_slots(inventory: &Inventory) -> Vec<MarketSlot> {
    pad(inventory
        .items
        .iter()
        .map(|item| MarketSlot::Listing {
            item_id: item.item_id.clone(),
            name: item.name.clone(),
            price: item.unit_sell_price(),
            quantity: item.quantity,
            available: true,
        })
        .collect())
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuyOutcome {
    Bought { price: u32 },
    InsufficientFunds { price: u32, balance: u32 },
    InventoryFull,
}

/// Checks a purchase without touching anything. Buying needs both the
/// money and somewhere to put the item.
pub fn check_buy(wallet: &Wallet, inventory: &Inventory, item: &InventoryItem) -> BuyOutcome {
    if wallet.gold < item.value {
        return BuyOutcome::InsufficientFunds {
            price: item.value,
            balance: wallet.gold,
        };
    }
    if !inventory.can_accept(&item.item_id) {
        return BuyOutcome::InventoryFull;
    }
    BuyOutcome::Bought { price: item.value }
}

/// Processes BuyRequestEvents: debit first, then add one unit.
pub fn handle_buy(
    mut buy_events: EventReader<BuyRequestEvent>,
    market: Res<MarketState>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<Inventory>,
    mut money_writer: EventWriter<MoneyChangedEvent>,
    mut writers: InventoryWriters,
) {
    for ev in buy_events.read() {
        let Some(entry) = market.find(&ev.item_id) else {
            warn!("[Economy] Buy failed: '{}' not in the market catalog", ev.item_id);
            continue;
        };

        match check_buy(&wallet, &inventory, &entry.item) {
            BuyOutcome::InsufficientFunds { price, balance } => {
                info!(
                    "[Economy] Cannot afford '{}' (need {}, have {})",
                    ev.item_id,
                    format_money(price),
                    format_money(balance)
                );
            }
            BuyOutcome::InventoryFull => {
                info!("[Economy] Not enough inventory space to buy '{}'", ev.item_id);
            }
            BuyOutcome::Bought { price } => {
                if !charge(&mut wallet, price, format!("Bought {}", entry.item.name), &mut money_writer) {
                    continue;
                }
                writers.add(&mut inventory, entry.item.clone().with_quantity(1));
            }
        }
    }
}

/// What a sale paid out.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub item: InventoryItem,
    pub quantity: u32,
    pub gold: u32,
}

/// Prices a sale of one unit or the whole stack. None if the item is not held.
pub fn quote_sale(inventory: &Inventory, item_id: &str, whole_stack: bool) -> Option<Sale> {
    let item = inventory.get(item_id)?;
    let quantity = if whole_stack { item.quantity } else { 1 };
    Some(Sale {
        item: item.clone(),
        quantity,
        gold: item.unit_sell_price().saturating_mul(quantity),
    })
}

/// Processes SellRequestEvents: credit floor(value × multiplier) per unit.
pub fn handle_sell(
    mut sell_events: EventReader<SellRequestEvent>,
    mut wallet: ResMut<Wallet>,
    mut inventory: ResMut<Inventory>,
    mut money_writer: EventWriter<MoneyChangedEvent>,
    mut sold_writer: EventWriter<ItemSoldEvent>,
    mut writers: InventoryWriters,
) {
    for ev in sell_events.read() {
        let Some(sale) = quote_sale(&inventory, &ev.item_id, ev.whole_stack) else {
            warn!("[Economy] Sell failed: '{}' not in inventory", ev.item_id);
            continue;
        };

        writers.remove(&mut inventory, &ev.item_id, sale.quantity);
        pay(
            &mut wallet,
            sale.gold,
            format!("Sold {} × {}", sale.quantity, sale.item.name),
            &mut money_writer,
        );
        sold_writer.send(ItemSoldEvent {
            item: sale.item,
            quantity: sale.quantity,
            gold: sale.gold,
        });
    }
}

/// Item types the player sells become buyable.
pub fn restock_sold_items(mut sold: EventReader<ItemSoldEvent>, mut market: ResMut<MarketState>) {
    for ev in sold.read() {
        if market.restock(&ev.item) {
            info!("[Economy] Market now stocks '{}'", ev.item.item_id);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Opening, closing and navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Fills the catalog from the stock table the first time play begins.
pub fn stock_market(
    mut market: ResMut<MarketState>,
    stock: Res<MarketStock>,
    crops: Res<CropRegistry>,
    tools: Res<ToolRegistry>,
) {
    if market.stocked {
        return;
    }
    market.catalog = build_catalog(&stock, &crops, &tools);
    market.stocked = true;
    info!("[Economy] Market stocked with {} item types", market.catalog.len());
}

/// The market pauses the world while it is open.
pub fn open_market(
    mut requests: EventReader<MarketOpenRequestEvent>,
    state: Res<State<GameState>>,
    mut market: ResMut<MarketState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if requests.read().count() == 0 || *state.get() != GameState::Playing {
        return;
    }
    market.tab = MarketTab::Buy;
    market.cursor = 0;
    next_state.set(GameState::Market);
    info!("[Economy] Market opened");
}

pub fn market_navigation(
    input: Res<PlayerInput>,
    wallet: Res<Wallet>,
    inventory: Res<Inventory>,
    mut market: ResMut<MarketState>,
    mut buy_writer: EventWriter<BuyRequestEvent>,
    mut sell_writer: EventWriter<SellRequestEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if input.ui_cancel {
        next_state.set(GameState::Playing);
        info!("[Economy] Market closed");
        return;
    }

    if input.tab_pressed {
        market.tab = match market.tab {
            MarketTab::Buy => MarketTab::Sell,
            MarketTab::Sell => MarketTab::Buy,
        };
        market.cursor = 0;
    }
    if input.ui_up && market.cursor > 0 {
        market.cursor -= 1;
    }
    if input.ui_down && market.cursor + 1 < MAX_MARKET_SLOTS {
        market.cursor += 1;
    }

    if !input.ui_confirm {
        return;
    }
    let slots = match market.tab {
        MarketTab::Buy => buy_slots(&market, &wallet),
        MarketTab::Sell => sell_slots(&inventory),
    };
    let Some(MarketSlot::Listing { item_id, .. }) = slots.get(market.cursor) else {
        return;
    };
    match market.tab {
        MarketTab::Buy => {
            buy_writer.send(BuyRequestEvent {
                item_id: item_id.clone(),
            });
        }
        MarketTab::Sell => {
            sell_writer.send(SellRequestEvent {
                item_id: item_id.clone(),
                whole_stack: input.sell_stack,
            });
        }
    }
}
