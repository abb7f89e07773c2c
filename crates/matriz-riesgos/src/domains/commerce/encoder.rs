use super::tables::{operation_mode, LOCALE_COUNT, SALES_AREA};
use super::{CommerceProfile, Signals, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &CommerceProfile, signals: &Signals) -> FeatureVector {
    let large = signals.exceeds_small_thresholds();
    FeatureVector::from_array(
        LAYOUT,
        [
            indicator(!large),
            indicator(large),
            indicator(signals.market_stall),
            indicator(signals.mixed_use),
            indicator(signals.large_retail),
            indicator(signals.hazardous),
            signals.total_area,
            signals.floors,
            SALES_AREA.lookup(&profile.area_venta_m2),
            LOCALE_COUNT.lookup(&profile.numero_locales_comerciales_edificio),
            operation_mode(&profile.modalidad_operacion),
        ],
    )
}
