use super::{Signals, EXPLOSIVES, GENERAL_INDUSTRY, WORKSHOP};
use crate::domains::RegulatoryLabel;

pub(super) fn cascade(signals: &Signals) -> RegulatoryLabel {
    if signals.explosive {
        return EXPLOSIVES;
    }

    if signals.workshop() {
        return WORKSHOP;
    }

    GENERAL_INDUSTRY
}
