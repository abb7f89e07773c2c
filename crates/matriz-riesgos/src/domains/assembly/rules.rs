use super::{AssemblyProfile, Signals, BELOW_GRADE, GENERAL_VENUE, HIGH_RISK_USE, SMALL_VENUE};
use crate::domains::RegulatoryLabel;

/// Below grade outranks occupant load, which outranks the activity type.
pub(super) fn cascade(profile: &AssemblyProfile, signals: &Signals) -> RegulatoryLabel {
    if profile.ubicado_en_sotano {
        return BELOW_GRADE;
    }

    if signals.small_venue {
        return SMALL_VENUE;
    }

    if signals.high_risk_use {
        return HIGH_RISK_USE;
    }

    GENERAL_VENUE
}
