use bevy::prelude::*;
use crate::shared::*;

pub const MIN_GROWTH_STAGES: u8 = 1;
pub const MAX_GROWTH_STAGES: u8 = 5;
pub const MIN_WATER_CONSUMPTION: f32 = 0.1;
pub const MAX_WATER_CONSUMPTION: f32 = 1.0;

/// Pulls a definition back into its legal ranges, warning about each fix.
pub fn validate_crop(mut def: CropDef) -> CropDef {
    let stages = def.growth_stages.clamp(MIN_GROWTH_STAGES, MAX_GROWTH_STAGES);
    if stages != def.growth_stages {
        warn!("[Data] Crop '{}' growth stages {} clamped to {}", def.id, def.growth_stages, stages);
        def.growth_stages = stages;
    }

    let water = def
        .water_consumption_per_day
        .clamp(MIN_WATER_CONSUMPTION, MAX_WATER_CONSUMPTION);
    if water != def.water_consumption_per_day {
        warn!(
            "[Data] Crop '{}' water consumption {} clamped to {}",
            def.id, def.water_consumption_per_day, water
        );
        def.water_consumption_per_day = water;
    }

    if !(def.sell_multiplier > 0.0 && def.sell_multiplier <= 1.0) {
        warn!(
            "[Data] Crop '{}' sell multiplier {} reset to {}",
            def.id, def.sell_multiplier, DEFAULT_SELL_MULTIPLIER
        );
        def.sell_multiplier = DEFAULT_SELL_MULTIPLIER;
    }

    if def.time_per_stage <= 0.0 {
        warn!("[Data] Crop '{}' has no stage time; using one day", def.id);
        def.time_per_stage = 1.0;
    }

    def
}

/// Populate the CropRegistry with all crop definitions.
///
/// `time_per_stage` is in game days. At the default 20 real minutes per
/// day a carrot (3 stages × 0.25 days) is ready in ten minutes of watered
/// growth.
pub fn populate_crops(registry: &mut CropRegistry) {
    let crops = vec![
        CropDef {
            id: "carrot".into(),
            name: "Carrot".into(),
            base_value: 10,
            seed_value: 5,
            sell_multiplier: 0.5,
            growth_stages: 3,
            time_per_stage: 0.25,
            water_consumption_per_day: 0.2,
        },
        CropDef {
            id: "wheat".into(),
            name: "Wheat".into(),
            base_value: 6,
            seed_value: 2,
            sell_multiplier: 0.5,
            growth_stages: 2,
            time_per_stage: 0.3,
            water_consumption_per_day: 0.1,
        },
        CropDef {
            id: "tomato".into(),
            name: "Tomato".into(),
            base_value: 25,
            seed_value: 12,
            sell_multiplier: 0.5,
            growth_stages: 4,
            time_per_stage: 0.35,
            water_consumption_per_day: 0.4,
        },
        CropDef {
            id: "strawberry".into(),
            name: "Strawberry".into(),
            base_value: 30,
            seed_value: 18,
            sell_multiplier: 0.8,
            growth_stages: 4,
            time_per_stage: 0.4,
            water_consumption_per_day: 0.3,
        },
        CropDef {
            id: "pumpkin".into(),
            name: "Pumpkin".into(),
            base_value: 60,
            seed_value: 30,
            sell_multiplier: 0.5,
            growth_stages: 5,
            time_per_stage: 0.5,
            water_consumption_per_day: 0.5,
        },
    ];

    for def in crops {
        if registry.crops.contains_key(&def.id) {
            warn!("[Data] Duplicate crop id '{}' ignored", def.id);
            continue;
        }
        let def = validate_crop(def);
        registry.crops.insert(def.id.clone(), def);
    }
}
