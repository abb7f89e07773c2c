use crate::vocabulary::KeywordSet;

/// Lodging types the regulation names under 3.1.
pub const SPECIAL_TYPES: KeywordSet = KeywordSet::new("tipos_especiales", &["ecolodge", "albergue"]);

/// Basement parking above this area moves a building to 3.4.
pub const LARGE_BASEMENT_PARKING_M2: f64 = 500.0;

/// Estimated basement parking area when the caller does not report one.
pub const ASSUMED_BASEMENT_PARKING_M2: f64 = 600.0;

pub const MAX_LOW_RISE_FLOORS: i64 = 4;
pub const MAX_BASIC_STARS: i64 = 3;
