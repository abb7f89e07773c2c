use super::{
    EducationProfile, Signals, HIGHER_EDUCATION, LOW_RISE_SCHOOL, MULTI_STOREY, RETROFITTED,
};
use crate::domains::RegulatoryLabel;

pub(super) fn cascade(profile: &EducationProfile, signals: &Signals) -> RegulatoryLabel {
    if signals.retrofitted {
        return RETROFITTED;
    }

    if !signals.low_rise() {
        return MULTI_STOREY;
    }

    if signals.basic_level && profile.atiende_personas_discapacidad {
        return LOW_RISE_SCHOOL;
    }

    if signals.higher_education {
        return HIGHER_EDUCATION;
    }

    LOW_RISE_SCHOOL
}
