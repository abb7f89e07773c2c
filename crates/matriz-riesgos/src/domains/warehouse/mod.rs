//! Warehousing (almacén): open yards, roofed storage and hazardous stores.

mod encoder;
mod rules;
pub mod tables;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};
use crate::vocabulary::fold;

use super::RegulatoryLabel;

pub const UNCOVERED: RegulatoryLabel = RegulatoryLabel::new("8.1");
pub const COVERED: RegulatoryLabel = RegulatoryLabel::new("8.2");
pub const HAZARDOUS: RegulatoryLabel = RegulatoryLabel::new("8.3");

pub const LABELS: [RegulatoryLabel; 3] = [UNCOVERED, COVERED, HAZARDOUS];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "es_8_3",
    "es_8_1",
    "porcentaje_techado",
    "tipo_cobertura",
    "tipo_cerramiento",
    "nivel_nfpa",
    "tiene_areas_admin",
    "area_admin",
    "es_estacionamiento",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseProfile {
    pub tipo_cobertura: String,
    pub porcentaje_area_techada: String,
    pub tipo_cerramiento: String,
    pub tipo_establecimiento: String,
    pub uso_principal: String,
    pub tipo_productos_almacenados: String,
    pub nivel_peligrosidad_nfpa: String,
    pub area_administrativa_servicios_m2: String,
    pub almacena_productos_explosivos_pirotecnicos: bool,
    pub tiene_areas_administrativas_techadas: bool,
}

impl WarehouseProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            tipo_cobertura: record.text("tipo_cobertura")?.into_owned(),
            porcentaje_area_techada: record.text("porcentaje_area_techada")?.into_owned(),
            tipo_cerramiento: record.text("tipo_cerramiento")?.into_owned(),
            tipo_establecimiento: record.text("tipo_establecimiento")?.into_owned(),
            uso_principal: record.text("uso_principal")?.into_owned(),
            tipo_productos_almacenados: record.text("tipo_productos_almacenados")?.into_owned(),
            nivel_peligrosidad_nfpa: record.text("nivel_peligrosidad_nfpa")?.into_owned(),
            area_administrativa_servicios_m2: record
                .text("area_administrativa_servicios_m2")?
                .into_owned(),
            almacena_productos_explosivos_pirotecnicos: record
                .flag("almacena_productos_explosivos_pirotecnicos")?,
            tiene_areas_administrativas_techadas: record
                .flag("tiene_areas_administrativas_techadas")?,
        })
    }
}

pub(crate) struct Signals {
    pub hazardous: bool,
    pub uncovered: bool,
    pub parking: bool,
}

impl Signals {
    pub fn evaluate(profile: &WarehouseProfile) -> Self {
        let hazardous = profile.almacena_productos_explosivos_pirotecnicos
            || tables::HAZARDOUS_GOODS.contains_keyword(&profile.tipo_productos_almacenados);
        let uncovered = fold(&profile.tipo_cobertura) == tables::OPEN_AIR_COVERAGE
            || profile.porcentaje_area_techada == tables::ZERO_COVERED;
        let parking = tables::PARKING_USE.contains_keyword(&profile.uso_principal)
            || tables::VEHICLE_ESTABLISHMENT.contains_keyword(&profile.tipo_establecimiento);

        Self {
            hazardous,
            uncovered,
            parking,
        }
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = WarehouseProfile::from_record(record)?;
    Ok(rules::cascade(&Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = WarehouseProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("tipo_cobertura", "Totalmente Techado")
        .with("porcentaje_area_techada", "100%")
        .with("tipo_cerramiento", "Cerrado (muros completos)")
        .with("tipo_establecimiento", "Almacén general")
        .with("uso_principal", "Almacenamiento de mercadería")
        .with("tipo_productos_almacenados", "Productos generales")
        .with("nivel_peligrosidad_nfpa", "1 (ligero)")
        .with("area_administrativa_servicios_m2", "1-50")
        .with("almacena_productos_explosivos_pirotecnicos", false)
        .with("tiene_areas_administrativas_techadas", true)
}
