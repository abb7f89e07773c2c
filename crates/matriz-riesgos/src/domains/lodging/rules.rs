use super::{
    LodgingProfile, Signals, BASEMENT_PARKING, BASIC_LOW_RISE, HIGH_RISE, LOW_RISE_WITH_BASEMENT,
};
use crate::domains::RegulatoryLabel;

pub(super) fn cascade(profile: &LodgingProfile, signals: &Signals) -> RegulatoryLabel {
    if signals.large_basement_parking {
        return BASEMENT_PARKING;
    }

    if signals.high_rise {
        return HIGH_RISE;
    }

    // Past this point the building is low-rise.
    if signals.basic_category && (signals.special_type || !profile.tiene_sotano) {
        return BASIC_LOW_RISE;
    }

    if signals.basic_category && profile.tiene_sotano {
        return LOW_RISE_WITH_BASEMENT;
    }

    // Upscale low-rise buildings are grouped by basement alone.
    if profile.tiene_sotano {
        LOW_RISE_WITH_BASEMENT
    } else {
        BASIC_LOW_RISE
    }
}
