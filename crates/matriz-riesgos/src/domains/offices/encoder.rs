use super::tables::TOTAL_AREA;
use super::{OfficeProfile, Signals, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &OfficeProfile, signals: &Signals) -> FeatureVector {
    FeatureVector::from_array(
        LAYOUT,
        [
            indicator(signals.low_rise()),
            indicator(signals.large_floor_plate()),
            indicator(signals.recent_certificate),
            indicator(signals.shared_occupancy),
            indicator(signals.itse_valid),
            signals.area_per_floor,
            signals.floors,
            TOTAL_AREA.lookup(&profile.area_techada_total_m2),
            profile.anio_conformidad_obra as f64,
            indicator(profile.ha_tenido_remodelaciones_ampliaciones),
        ],
    )
}
