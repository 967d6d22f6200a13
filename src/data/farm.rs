use crate::shared::*;

pub const FIELD_WIDTH: i32 = 6;
pub const FIELD_HEIGHT: i32 = 4;

/// A rectangular field with the market to the east and the house to the west.
pub fn populate_farm_layout(layout: &mut FarmLayout) {
    layout.plots = (0..FIELD_WIDTH)
        .flat_map(|x| (0..FIELD_HEIGHT).map(move |y| (x, y)))
        .collect();
    layout.market_tile = (FIELD_WIDTH + 2, 1);
    layout.home_tile = (-3, 1);
    layout.player_start = (0, -1);
}
