use crate::shared::*;

/// What a new farmer starts with.
pub fn populate_starting_items(starting: &mut StartingItems) {
    starting.items = vec![
        StartingItem { source: ItemSource::Tool, id: "spade".into(), quantity: 1 },
        StartingItem { source: ItemSource::Tool, id: "watering_can".into(), quantity: 1 },
        StartingItem { source: ItemSource::Tool, id: "scythe".into(), quantity: 1 },
        StartingItem { source: ItemSource::Seed, id: "carrot".into(), quantity: 5 },
        StartingItem { source: ItemSource::Seed, id: "wheat".into(), quantity: 3 },
    ];
}

/// The market's standing catalog. Sold crops join it at runtime.
pub fn populate_market_stock(stock: &mut MarketStock) {
    let entry = |source: ItemSource, id: &str, custom_value: Option<u32>, stock_quantity: u32| {
        MarketStockEntry {
            source,
            id: id.into(),
            custom_value,
            stock_quantity,
        }
    };
    stock.entries = vec![
        entry(ItemSource::Seed, "carrot", None, 99),
        entry(ItemSource::Seed, "wheat", None, 99),
        entry(ItemSource::Seed, "tomato", None, 50),
        entry(ItemSource::Seed, "strawberry", None, 30),
        entry(ItemSource::Seed, "pumpkin", Some(35), 10),
        entry(ItemSource::Tool, "hoe", None, 1),
        entry(ItemSource::Tool, "golden_watering_can", None, 1),
        entry(ItemSource::Tool, "golden_scythe", None, 1),
    ];
}
