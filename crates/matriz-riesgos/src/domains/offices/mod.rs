//! Administrative offices (oficinas): labels 6.1 to 6.5.
//!
//! The cascade also reads the building's original design and the type of its
//! completion certificate. Those two fields never reach the model, so
//! encoding does not require them.

mod encoder;
mod rules;
pub mod tables;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};
use crate::vocabulary::fold;

use super::RegulatoryLabel;

pub const LOW_RISE: RegulatoryLabel = RegulatoryLabel::new("6.1");
pub const CERTIFIED: RegulatoryLabel = RegulatoryLabel::new("6.2");
pub const SHARED_INSPECTED: RegulatoryLabel = RegulatoryLabel::new("6.3");
pub const SHARED_UNINSPECTED: RegulatoryLabel = RegulatoryLabel::new("6.4");
pub const LARGE_FLOOR_PLATE: RegulatoryLabel = RegulatoryLabel::new("6.5");

pub const LABELS: [RegulatoryLabel; 5] = [
    LOW_RISE,
    CERTIFIED,
    SHARED_INSPECTED,
    SHARED_UNINSPECTED,
    LARGE_FLOOR_PLATE,
];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "cumple_6_1",
    "es_6_5",
    "conformidad_reciente",
    "uso_compartido",
    "itse_vigente",
    "area_por_piso",
    "numero_pisos",
    "area_total",
    "año_conformidad",
    "ha_remodelado",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct OfficeProfile {
    pub numero_pisos_edificacion: String,
    pub area_techada_por_piso_m2: String,
    pub area_techada_total_m2: String,
    pub tipo_ocupacion_edificio: String,
    pub areas_comunes_tienen_itse_vigente: String,
    pub anio_conformidad_obra: i64,
    pub tiene_conformidad_obra_vigente: bool,
    pub ha_tenido_remodelaciones_ampliaciones: bool,
}

impl OfficeProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            numero_pisos_edificacion: record.text("numero_pisos_edificacion")?.into_owned(),
            area_techada_por_piso_m2: record.text("area_techada_por_piso_m2")?.into_owned(),
            area_techada_total_m2: record.text("area_techada_total_m2")?.into_owned(),
            tipo_ocupacion_edificio: record.text("tipo_ocupacion_edificio")?.into_owned(),
            areas_comunes_tienen_itse_vigente: record
                .text("areas_comunes_tienen_itse_vigente")?
                .into_owned(),
            anio_conformidad_obra: record.integer("año_conformidad_obra")?,
            tiene_conformidad_obra_vigente: record.flag("tiene_conformidad_obra_vigente")?,
            ha_tenido_remodelaciones_ampliaciones: record
                .flag("ha_tenido_remodelaciones_ampliaciones")?,
        })
    }
}

/// Design and permit history consulted only by the cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct PermitHistory {
    pub uso_diseno_original: String,
    pub tipo_conformidad: String,
}

impl PermitHistory {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            uso_diseno_original: record.text("uso_diseño_original")?.into_owned(),
            tipo_conformidad: record.text("tipo_conformidad")?.into_owned(),
        })
    }
}

pub(crate) struct Signals {
    pub area_per_floor: f64,
    pub floors: f64,
    pub recent_certificate: bool,
    pub shared_occupancy: bool,
    pub itse_valid: bool,
}

impl Signals {
    pub fn evaluate(profile: &OfficeProfile) -> Self {
        let age = tables::REFERENCE_YEAR.saturating_sub(profile.anio_conformidad_obra);
        Self {
            area_per_floor: tables::AREA_PER_FLOOR.lookup(&profile.area_techada_por_piso_m2),
            floors: tables::FLOORS.lookup(&profile.numero_pisos_edificacion),
            recent_certificate: profile.tiene_conformidad_obra_vigente
                && age <= tables::MAX_CERTIFICATE_AGE_YEARS,
            shared_occupancy: tables::SHARED_OCCUPANCY
                .contains_keyword(&profile.tipo_ocupacion_edificio),
            itse_valid: fold(&profile.areas_comunes_tienen_itse_vigente) == tables::ITSE_VALID,
        }
    }

    pub fn large_floor_plate(&self) -> bool {
        self.area_per_floor > tables::MAX_AREA_PER_FLOOR_M2
    }

    pub fn low_rise(&self) -> bool {
        self.floors <= tables::MAX_LOW_RISE_FLOORS && !self.large_floor_plate()
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = OfficeProfile::from_record(record)?;
    let history = PermitHistory::from_record(record)?;
    Ok(rules::cascade(&profile, &history, &Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = OfficeProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("numero_pisos_edificacion", "3")
        .with("area_techada_por_piso_m2", "200-400")
        .with("area_techada_total_m2", "500-2000")
        .with("tipo_ocupacion_edificio", "Uso Exclusivo (todo el edificio)")
        .with("areas_comunes_tienen_itse_vigente", "No Aplica (uso exclusivo)")
        .with("año_conformidad_obra", 2022_i64)
        .with("tiene_conformidad_obra_vigente", true)
        .with("ha_tenido_remodelaciones_ampliaciones", false)
        .with("uso_diseño_original", "Oficinas desde origen")
        .with("tipo_conformidad", "Obra Nueva")
}
