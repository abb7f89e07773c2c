use super::{Signals, COVERED, HAZARDOUS, UNCOVERED};
use crate::domains::RegulatoryLabel;

/// Hazardous stock outranks the open-yard check.
pub(super) fn cascade(signals: &Signals) -> RegulatoryLabel {
    if signals.hazardous {
        return HAZARDOUS;
    }

    if signals.uncovered {
        return UNCOVERED;
    }

    COVERED
}
