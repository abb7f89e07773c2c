//! Educational buildings (educación): labels 4.1 to 4.4.

mod encoder;
mod rules;
pub mod tables;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};

use super::RegulatoryLabel;

pub const LOW_RISE_SCHOOL: RegulatoryLabel = RegulatoryLabel::new("4.1");
pub const MULTI_STOREY: RegulatoryLabel = RegulatoryLabel::new("4.2");
pub const HIGHER_EDUCATION: RegulatoryLabel = RegulatoryLabel::new("4.3");
pub const RETROFITTED: RegulatoryLabel = RegulatoryLabel::new("4.4");

pub const LABELS: [RegulatoryLabel; 4] =
    [LOW_RISE_SCHOOL, MULTI_STOREY, HIGHER_EDUCATION, RETROFITTED];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "es_basico",
    "es_superior",
    "num_pisos",
    "area_construida_m2",
    "atiende_personas_discapacidad",
    "capacidad_alumnos",
    "cantidad_aulas",
    "es_remodelada",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct EducationProfile {
    pub nivel_educativo: String,
    pub tipo_institucion: String,
    pub numero_pisos: String,
    pub area_construida_m2: String,
    pub capacidad_alumnos: String,
    pub tipo_edificacion: String,
    pub atiende_personas_discapacidad: bool,
    pub cantidad_aulas: i64,
}

impl EducationProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            nivel_educativo: record.text("nivel_educativo")?.into_owned(),
            tipo_institucion: record.text("tipo_institucion")?.into_owned(),
            numero_pisos: record.text("numero_pisos")?.into_owned(),
            area_construida_m2: record.text("area_construida_m2")?.into_owned(),
            capacidad_alumnos: record.text("capacidad_alumnos")?.into_owned(),
            tipo_edificacion: record.text("tipo_edificacion")?.into_owned(),
            atiende_personas_discapacidad: record.flag("atiende_personas_discapacidad")?,
            cantidad_aulas: record.integer("cantidad_aulas")?,
        })
    }
}

pub(crate) struct Signals {
    pub basic_level: bool,
    pub higher_education: bool,
    pub retrofitted: bool,
    pub floors: f64,
}

impl Signals {
    pub fn evaluate(profile: &EducationProfile) -> Self {
        Self {
            basic_level: tables::BASIC_LEVELS.contains_term(&profile.nivel_educativo),
            higher_education: tables::HIGHER_INSTITUTIONS.contains_term(&profile.tipo_institucion)
                || tables::HIGHER_LEVEL_MARKER.contains_keyword(&profile.nivel_educativo),
            retrofitted: tables::RETROFIT_MARKERS.contains_keyword(&profile.tipo_edificacion),
            floors: tables::floor_count(&profile.numero_pisos),
        }
    }

    pub fn low_rise(&self) -> bool {
        self.floors <= tables::MAX_LOW_RISE_FLOORS
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = EducationProfile::from_record(record)?;
    Ok(rules::cascade(&profile, &Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = EducationProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("nivel_educativo", "Primaria")
        .with("tipo_institucion", "Colegio Regular")
        .with("numero_pisos", "2")
        .with("area_construida_m2", "500-1500")
        .with("capacidad_alumnos", "300-800")
        .with("tipo_edificacion", "Construida como Educativa")
        .with("atiende_personas_discapacidad", false)
        .with("cantidad_aulas", 18_i64)
}
