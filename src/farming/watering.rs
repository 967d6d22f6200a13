//! Watering can: fills every crop within the can's reach.

use crate::shared::*;

/// Waters every crop within `radius` tiles (Euclidean) of `center`.
/// The center tile is always in reach. Returns how many crops were watered.
pub fn water_around(farm_state: &mut FarmState, center: (i32, i32), radius: f32) -> u32 {
    let radius_sq = radius.max(0.0).powi(2);
    let mut watered = 0;
    for (pos, crop) in farm_state.crops.iter_mut() {
        let dx = (pos.0 - center.0) as f32;
        let dy = (pos.1 - center.1) as f32;
        if dx * dx + dy * dy <= radius_sq {
            crop.water();
            watered += 1;
        }
    }
    watered
}
