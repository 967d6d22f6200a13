use bevy::prelude::*;
use crate::shared::*;

pub fn populate_tools(registry: &mut ToolRegistry) {
    let tools = vec![
        ToolDef {
            id: "spade".into(),
            name: "Spade".into(),
            kind: ToolKind::Spade,
            use_delay: 0.2,
            base_value: 100,
            watering_radius: 0.0,
            attributes: ToolAttributes::default(),
        },
        ToolDef {
            id: "watering_can".into(),
            name: "Watering Can".into(),
            kind: ToolKind::WateringCan,
            use_delay: 0.2,
            base_value: 100,
            watering_radius: 1.0,
            attributes: ToolAttributes::default(),
        },
        ToolDef {
            id: "scythe".into(),
            name: "Scythe".into(),
            kind: ToolKind::Scythe,
            use_delay: 0.2,
            base_value: 100,
            watering_radius: 0.0,
            attributes: ToolAttributes::default(),
        },
        ToolDef {
            id: "hoe".into(),
            name: "Hoe".into(),
            kind: ToolKind::Hoe,
            use_delay: 0.3,
            base_value: 150,
            watering_radius: 0.0,
            attributes: ToolAttributes {
                growth_time_multiplier: 0.9,
                ..Default::default()
            },
        },
        ToolDef {
            id: "golden_watering_can".into(),
            name: "Golden Watering Can".into(),
            kind: ToolKind::WateringCan,
            use_delay: 0.2,
            base_value: 400,
            watering_radius: 2.0,
            attributes: ToolAttributes::default(),
        },
        ToolDef {
            id: "golden_scythe".into(),
            name: "Golden Scythe".into(),
            kind: ToolKind::Scythe,
            use_delay: 0.2,
            base_value: 500,
            watering_radius: 0.0,
            attributes: ToolAttributes {
                harvest_quantity_multiplier: 2.0,
                ..Default::default()
            },
        },
    ];

    for def in tools {
        if registry.tools.contains_key(&def.id) {
            warn!("[Data] Duplicate tool id '{}' ignored", def.id);
            continue;
        }
        registry.tools.insert(def.id.clone(), def);
    }
}
