//! Commercial premises (comercio): labels 7.1 to 7.6.

mod encoder;
mod rules;
pub mod tables;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};
use crate::vocabulary::fold;

use super::RegulatoryLabel;

pub const SMALL_SHOP: RegulatoryLabel = RegulatoryLabel::new("7.1");
pub const MARKET_STALL: RegulatoryLabel = RegulatoryLabel::new("7.2");
pub const LARGE_SHOP: RegulatoryLabel = RegulatoryLabel::new("7.3");
pub const MIXED_USE_BUILDING: RegulatoryLabel = RegulatoryLabel::new("7.4");
pub const LARGE_RETAIL: RegulatoryLabel = RegulatoryLabel::new("7.5");
pub const HAZARDOUS_GOODS: RegulatoryLabel = RegulatoryLabel::new("7.6");

pub const LABELS: [RegulatoryLabel; 6] = [
    SMALL_SHOP,
    MARKET_STALL,
    LARGE_SHOP,
    MIXED_USE_BUILDING,
    LARGE_RETAIL,
    HAZARDOUS_GOODS,
];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "cumple_7_1",
    "es_7_3",
    "es_7_2",
    "es_7_4",
    "es_7_5",
    "es_7_6",
    "area_total",
    "numero_pisos",
    "area_venta",
    "numero_locales",
    "modalidad_operacion",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct CommerceProfile {
    pub numero_pisos_edificacion: String,
    pub area_techada_total_m2: String,
    pub area_venta_m2: String,
    pub tipo_establecimiento_comercial: String,
    pub modalidad_operacion: String,
    pub uso_edificacion: String,
    pub tipo_licencia_funcionamiento: String,
    pub tipo_productos_peligrosos: String,
    pub numero_locales_comerciales_edificio: String,
    pub comercializa_productos_explosivos_pirotecnicos: bool,
}

impl CommerceProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            numero_pisos_edificacion: record.text("numero_pisos_edificacion")?.into_owned(),
            area_techada_total_m2: record.text("area_techada_total_m2")?.into_owned(),
            area_venta_m2: record.text("area_venta_m2")?.into_owned(),
            tipo_establecimiento_comercial: record
                .text("tipo_establecimiento_comercial")?
                .into_owned(),
            modalidad_operacion: record.text("modalidad_operacion")?.into_owned(),
            uso_edificacion: record.text("uso_edificacion")?.into_owned(),
            tipo_licencia_funcionamiento: record
                .text("tipo_licencia_funcionamiento")?
                .into_owned(),
            tipo_productos_peligrosos: record.text("tipo_productos_peligrosos")?.into_owned(),
            numero_locales_comerciales_edificio: record
                .text("numero_locales_comerciales_edificio")?
                .into_owned(),
            comercializa_productos_explosivos_pirotecnicos: record
                .flag("comercializa_productos_explosivos_pirotecnicos")?,
        })
    }
}

pub(crate) struct Signals {
    pub floors: f64,
    pub total_area: f64,
    pub market_stall: bool,
    pub mixed_use: bool,
    pub large_retail: bool,
    pub hazardous: bool,
}

impl Signals {
    pub fn evaluate(profile: &CommerceProfile) -> Self {
        let stall = tables::STALL_TYPES.contains_keyword(&profile.tipo_establecimiento_comercial);
        let corporate =
            fold(&profile.tipo_licencia_funcionamiento) == tables::CORPORATE_LICENCE;

        Self {
            floors: tables::FLOORS.lookup(&profile.numero_pisos_edificacion),
            total_area: tables::TOTAL_AREA.lookup(&profile.area_techada_total_m2),
            market_stall: stall && corporate,
            mixed_use: tables::MIXED_USE.contains_keyword(&profile.uso_edificacion),
            large_retail: tables::LARGE_RETAIL_FORMATS
                .contains_keyword(&profile.tipo_establecimiento_comercial),
            hazardous: profile.comercializa_productos_explosivos_pirotecnicos
                || tables::HAZARDOUS_PRODUCTS.contains_keyword(&profile.tipo_productos_peligrosos),
        }
    }

    pub fn exceeds_small_thresholds(&self) -> bool {
        self.floors > tables::MAX_SMALL_FLOORS || self.total_area > tables::MAX_SMALL_AREA_M2
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = CommerceProfile::from_record(record)?;
    Ok(rules::cascade(&Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = CommerceProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("numero_pisos_edificacion", "1")
        .with("area_techada_total_m2", "<300")
        .with("area_venta_m2", "<200")
        .with("tipo_establecimiento_comercial", "Bodega")
        .with("modalidad_operacion", "Local independiente")
        .with("uso_edificacion", "Exclusivo comercio")
        .with("tipo_licencia_funcionamiento", "Individual")
        .with("tipo_productos_peligrosos", "Ninguno")
        .with("numero_locales_comerciales_edificio", "1")
        .with("comercializa_productos_explosivos_pirotecnicos", false)
}
