//! Tactical thresholds that the server does not send.

/// Fraction of the weapon range at which `GoToTarget` stops closing in.
pub const SHOOT_RANGE_RATIO: f64 = 2.0 / 3.0;

/// Extra distance, on top of the unit radius, kept from the zone boundary.
pub const ZONE_PADDING: f64 = 0.5;

/// Cosine above which the unit counts as facing the desired direction.
pub const LOOK_COS_THRESHOLD: f64 = 0.99;
