//! Character domain: ground detection via a downward box cast.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::character::GameLayer;
use crate::character::components::{GroundContact, GroundSensor, Player};

/// Casts the footprint box downward and caches the answer for this tick.
/// Runs first in the fixed chain; nothing else recomputes ground contact.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GroundSensor, &mut GroundContact), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, sensor, mut contact) in &mut query {
        let was_grounded = contact.grounded;

        let origin = transform.translation.truncate() + sensor.cast_offset;
        let shape = Collider::rectangle(sensor.box_size.x, sensor.box_size.y);
        let config = ShapeCastConfig::from_max_distance(sensor.cast_distance);

        let hit = spatial_query.cast_shape(&shape, origin, 0.0, Dir2::NEG_Y, &config, &ground_filter);

        contact.grounded = hit.is_some();
        contact.just_landed = contact.grounded && !was_grounded;

        if contact.just_landed {
            debug!("Landed");
        } else if !contact.grounded && was_grounded {
            debug!("Left ground");
        }
    }
}
