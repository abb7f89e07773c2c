use super::tables::{CENTRE_TYPE, CONSULTORIO_TYPE};
use super::{
    HealthProfile, Signals, CONSULTORIO, HEALTH_CENTRE, HEALTH_POST, INPATIENT, SECOND_LEVEL,
    THIRD_LEVEL,
};
use crate::domains::RegulatoryLabel;

pub(super) fn cascade(profile: &HealthProfile, signals: &Signals) -> RegulatoryLabel {
    if signals.level >= 3.0 {
        return THIRD_LEVEL;
    }

    if signals.level >= 2.0 {
        return SECOND_LEVEL;
    }

    if signals.beds > 0.0 {
        return INPATIENT;
    }

    let dependent_emergency = profile.usuarios_no_autosuficientes && profile.urgencias_24h;
    if dependent_emergency || signals.establishment_type == CENTRE_TYPE {
        return HEALTH_CENTRE;
    }

    if signals.establishment_type == CONSULTORIO_TYPE {
        return CONSULTORIO;
    }

    HEALTH_POST
}
