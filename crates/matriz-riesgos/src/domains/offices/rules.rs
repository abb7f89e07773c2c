use super::tables::{BUILT_AS_OFFICES, QUALIFYING_PERMITS};
use super::{
    OfficeProfile, PermitHistory, Signals, CERTIFIED, LARGE_FLOOR_PLATE, LOW_RISE,
    SHARED_INSPECTED, SHARED_UNINSPECTED,
};
use crate::domains::RegulatoryLabel;

/// Floor plate size is checked first and unconditionally.
pub(super) fn cascade(
    profile: &OfficeProfile,
    history: &PermitHistory,
    signals: &Signals,
) -> RegulatoryLabel {
    if signals.large_floor_plate() {
        return LARGE_FLOOR_PLATE;
    }

    if signals.low_rise() {
        return LOW_RISE;
    }

    let built_as_offices = BUILT_AS_OFFICES.contains_term(&history.uso_diseno_original);
    let qualifying_works = profile.ha_tenido_remodelaciones_ampliaciones
        && QUALIFYING_PERMITS.contains_term(&history.tipo_conformidad);
    if signals.recent_certificate && (built_as_offices || qualifying_works) {
        return CERTIFIED;
    }

    if signals.shared_occupancy {
        return if signals.itse_valid {
            SHARED_INSPECTED
        } else {
            SHARED_UNINSPECTED
        };
    }

    // Exclusive tall building without a recent certificate.
    LARGE_FLOOR_PLATE
}
