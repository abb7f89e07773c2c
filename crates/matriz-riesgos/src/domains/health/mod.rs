//! Health facilities (salud): categories I-1 to III.
//!
//! The care level dominates: second and third level facilities are II and III
//! whatever their size. First level facilities split by inpatient beds, then
//! by how dependent their users are, then by establishment type.

mod encoder;
mod rules;
pub mod tables;

use std::collections::BTreeSet;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};

use super::RegulatoryLabel;

pub const HEALTH_POST: RegulatoryLabel = RegulatoryLabel::new("I-1");
pub const CONSULTORIO: RegulatoryLabel = RegulatoryLabel::new("I-2");
pub const HEALTH_CENTRE: RegulatoryLabel = RegulatoryLabel::new("I-3");
pub const INPATIENT: RegulatoryLabel = RegulatoryLabel::new("I-4");
pub const SECOND_LEVEL: RegulatoryLabel = RegulatoryLabel::new("II");
pub const THIRD_LEVEL: RegulatoryLabel = RegulatoryLabel::new("III");

pub const LABELS: [RegulatoryLabel; 6] = [
    HEALTH_POST,
    CONSULTORIO,
    HEALTH_CENTRE,
    INPATIENT,
    SECOND_LEVEL,
    THIRD_LEVEL,
];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "nivel_atencion",
    "tipo_establecimiento",
    "camas_internamiento",
    "usuarios_no_autosuficientes",
    "capacidad_atencion",
    "num_servicios",
    "urgencias_24h",
    "num_especialidades",
    "num_pisos",
    "area_construida",
    "personal_medico_total",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct HealthProfile {
    pub nivel_atencion: String,
    pub tipo_establecimiento: String,
    pub camas_internamiento: String,
    pub capacidad_atencion: String,
    pub num_especialidades: String,
    pub num_pisos: String,
    pub usuarios_no_autosuficientes: bool,
    pub urgencias_24h: bool,
    pub servicios_disponibles: Vec<String>,
    pub area_construida: f64,
    pub personal_medico_total: i64,
}

impl HealthProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            nivel_atencion: record.text("nivel_atencion")?.into_owned(),
            tipo_establecimiento: record.text("tipo_establecimiento")?.into_owned(),
            camas_internamiento: record.text("camas_internamiento")?.into_owned(),
            capacidad_atencion: record.text("capacidad_atencion")?.into_owned(),
            num_especialidades: record.text("num_especialidades")?.into_owned(),
            num_pisos: record.text("num_pisos")?.into_owned(),
            usuarios_no_autosuficientes: record.flag("usuarios_no_autosuficientes")?,
            urgencias_24h: record.flag("urgencias_24h")?,
            servicios_disponibles: record.list("servicios_disponibles")?,
            area_construida: record.number("area_construida")?,
            personal_medico_total: record.integer("personal_medico_total")?,
        })
    }

    /// Distinct key services offered; duplicates and unlisted services are ignored.
    pub fn key_service_count(&self) -> usize {
        self.servicios_disponibles
            .iter()
            .map(String::as_str)
            .filter(|service| tables::KEY_SERVICES.contains(service))
            .collect::<BTreeSet<_>>()
            .len()
    }
}

pub(crate) struct Signals {
    pub level: f64,
    pub establishment_type: f64,
    pub beds: f64,
}

impl Signals {
    pub fn evaluate(profile: &HealthProfile) -> Self {
        Self {
            level: tables::CARE_LEVEL.lookup(&profile.nivel_atencion),
            establishment_type: tables::ESTABLISHMENT_TYPE.lookup(&profile.tipo_establecimiento),
            beds: tables::INPATIENT_BEDS.lookup(&profile.camas_internamiento),
        }
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = HealthProfile::from_record(record)?;
    Ok(rules::cascade(&profile, &Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = HealthProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("nivel_atencion", "Primer")
        .with("tipo_establecimiento", "Puesto")
        .with("camas_internamiento", "0")
        .with("capacidad_atencion", "Baja")
        .with("num_especialidades", "0")
        .with("num_pisos", "1")
        .with("usuarios_no_autosuficientes", false)
        .with("urgencias_24h", false)
        .with("servicios_disponibles", Vec::<String>::new())
        .with("area_construida", 120.0)
        .with("personal_medico_total", 4_i64)
}
