//! Economy domain: wallet bookkeeping and the market.
//!
//! All cross-domain communication goes through `crate::shared::*` events and resources.
//! No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

pub mod market;
pub mod wallet;

use market::{
    handle_buy, handle_sell, market_navigation, open_market, restock_sold_items, stock_market,
    BuyRequestEvent, MarketState, SellRequestEvent,
};
use wallet::{track_money_changes, EconomyStats};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        // ── Resources ──────────────────────────────────────────────────────
        app.init_resource::<EconomyStats>()
            .init_resource::<MarketState>();

        // ── Internal Events ────────────────────────────────────────────────
        app.add_event::<BuyRequestEvent>()
            .add_event::<SellRequestEvent>();

        app.add_systems(OnEnter(GameState::Playing), stock_market);

        // ── Systems ────────────────────────────────────────────────────────
        app.add_systems(
            Update,
            (
                open_market.run_if(in_state(GameState::Playing)),
                market_navigation.run_if(in_state(GameState::Market)),
                // Requests can arrive from any state; they carry their own checks.
                handle_buy,
                handle_sell,
                restock_sold_items,
                track_money_changes,
            )
                .chain(),
        );
    }
}
