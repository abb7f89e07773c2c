use super::tables::{BUILT_AREA, STUDENT_CAPACITY};
use super::{EducationProfile, Signals, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &EducationProfile, signals: &Signals) -> FeatureVector {
    FeatureVector::from_array(
        LAYOUT,
        [
            indicator(signals.basic_level),
            indicator(signals.higher_education),
            signals.floors,
            BUILT_AREA.lookup(&profile.area_construida_m2),
            indicator(profile.atiende_personas_discapacidad),
            STUDENT_CAPACITY.lookup(&profile.capacidad_alumnos),
            profile.cantidad_aulas as f64,
            indicator(signals.retrofitted),
        ],
    )
}
