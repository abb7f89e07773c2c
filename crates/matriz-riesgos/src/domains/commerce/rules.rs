use super::{
    Signals, HAZARDOUS_GOODS, LARGE_RETAIL, LARGE_SHOP, MARKET_STALL, MIXED_USE_BUILDING,
    SMALL_SHOP,
};
use crate::domains::RegulatoryLabel;

/// Large retail formats are decided before the floor/area thresholds.
pub(super) fn cascade(signals: &Signals) -> RegulatoryLabel {
    if signals.hazardous {
        return HAZARDOUS_GOODS;
    }

    if signals.market_stall {
        return MARKET_STALL;
    }

    if signals.large_retail {
        return LARGE_RETAIL;
    }

    if signals.mixed_use {
        return MIXED_USE_BUILDING;
    }

    if signals.exceeds_small_thresholds() {
        return LARGE_SHOP;
    }

    SMALL_SHOP
}
