//! Assembly venues (encuentro): labels 2.1 to 2.4.

mod encoder;
mod rules;
pub mod tables;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};

use super::RegulatoryLabel;

pub const SMALL_VENUE: RegulatoryLabel = RegulatoryLabel::new("2.1");
pub const GENERAL_VENUE: RegulatoryLabel = RegulatoryLabel::new("2.2");
pub const BELOW_GRADE: RegulatoryLabel = RegulatoryLabel::new("2.3");
pub const HIGH_RISK_USE: RegulatoryLabel = RegulatoryLabel::new("2.4");

pub const LABELS: [RegulatoryLabel; 4] = [SMALL_VENUE, GENERAL_VENUE, BELOW_GRADE, HIGH_RISK_USE];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "es_2_4",
    "carga_ocupantes",
    "ubicado_en_sotano",
    "num_pisos",
    "area_total_m2",
    "evento_recurrente",
    "horario_funcionamiento",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyProfile {
    pub tipo_actividad: String,
    pub horario_funcionamiento: String,
    pub carga_ocupantes: i64,
    pub num_pisos: i64,
    pub area_total_m2: f64,
    pub ubicado_en_sotano: bool,
    pub evento_recurrente: bool,
}

impl AssemblyProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            tipo_actividad: record.text("tipo_actividad")?.into_owned(),
            horario_funcionamiento: record.text("horario_funcionamiento")?.into_owned(),
            carga_ocupantes: record.integer("carga_ocupantes")?,
            num_pisos: record.integer("num_pisos")?,
            area_total_m2: record.number("area_total_m2")?,
            ubicado_en_sotano: record.flag("ubicado_en_sotano")?,
            evento_recurrente: record.flag("evento_recurrente")?,
        })
    }
}

pub(crate) struct Signals {
    /// Activity belongs to the normative high-risk list. Unlisted activities,
    /// including ones coined after training, are not high-risk.
    pub high_risk_use: bool,
    pub small_venue: bool,
}

impl Signals {
    pub fn evaluate(profile: &AssemblyProfile) -> Self {
        Self {
            high_risk_use: tables::HIGH_RISK_USES.contains_term(&profile.tipo_actividad),
            small_venue: profile.carga_ocupantes <= tables::SMALL_VENUE_OCCUPANTS,
        }
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = AssemblyProfile::from_record(record)?;
    Ok(rules::cascade(&profile, &Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = AssemblyProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("tipo_actividad", "salon_eventos")
        .with("horario_funcionamiento", "nocturno")
        .with("carga_ocupantes", 180_i64)
        .with("num_pisos", 2_i64)
        .with("area_total_m2", 640.5)
        .with("ubicado_en_sotano", false)
        .with("evento_recurrente", true)
}
