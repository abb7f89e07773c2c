//! Lodging (hospedaje): labels 3.1 to 3.4.

mod encoder;
mod rules;
pub mod tables;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};

use super::RegulatoryLabel;

pub const BASIC_LOW_RISE: RegulatoryLabel = RegulatoryLabel::new("3.1");
pub const LOW_RISE_WITH_BASEMENT: RegulatoryLabel = RegulatoryLabel::new("3.2");
pub const HIGH_RISE: RegulatoryLabel = RegulatoryLabel::new("3.3");
pub const BASEMENT_PARKING: RegulatoryLabel = RegulatoryLabel::new("3.4");

pub const LABELS: [RegulatoryLabel; 4] = [
    BASIC_LOW_RISE,
    LOW_RISE_WITH_BASEMENT,
    HIGH_RISE,
    BASEMENT_PARKING,
];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "categoria_estrellas",
    "tipo_especial",
    "num_pisos",
    "tiene_sotano",
    "num_habitaciones",
    "capacidad_ocupantes",
    "uso_mixto",
    "tiene_estacionamiento",
    "estacionamiento_en_sotano",
    "area_estacionamiento",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct LodgingProfile {
    pub categoria_estrellas: i64,
    pub tipo_hospedaje: String,
    pub num_pisos: i64,
    pub num_habitaciones: i64,
    pub capacidad_ocupantes: i64,
    pub tiene_sotano: bool,
    pub uso_mixto: bool,
    pub tiene_estacionamiento: bool,
    pub estacionamiento_en_sotano: bool,
    /// Reported parking area, when the caller knows it.
    pub area_estacionamiento_m2: Option<f64>,
}

impl LodgingProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            categoria_estrellas: record.integer("categoria_estrellas")?,
            tipo_hospedaje: record.text("tipo_hospedaje")?.into_owned(),
            num_pisos: record.integer("num_pisos")?,
            num_habitaciones: record.integer("num_habitaciones")?,
            capacidad_ocupantes: record.integer("capacidad_ocupantes")?,
            tiene_sotano: record.flag("tiene_sotano")?,
            uso_mixto: record.flag("uso_mixto")?,
            tiene_estacionamiento: record.flag("tiene_estacionamiento")?,
            estacionamiento_en_sotano: record.flag("estacionamiento_en_sotano")?,
            area_estacionamiento_m2: record.optional_number("area_estacionamiento_m2")?,
        })
    }

    /// Basement parking area fed to the model and to the 3.4 rule. Parking
    /// above ground always counts as zero.
    pub fn parking_area(&self) -> f64 {
        if !self.estacionamiento_en_sotano {
            return 0.0;
        }
        self.area_estacionamiento_m2.unwrap_or(tables::ASSUMED_BASEMENT_PARKING_M2)
    }
}

pub(crate) struct Signals {
    pub special_type: bool,
    pub large_basement_parking: bool,
    pub high_rise: bool,
    pub basic_category: bool,
}

impl Signals {
    pub fn evaluate(profile: &LodgingProfile) -> Self {
        Self {
            special_type: tables::SPECIAL_TYPES.contains_term(&profile.tipo_hospedaje),
            large_basement_parking: profile.estacionamiento_en_sotano
                && profile.parking_area() > tables::LARGE_BASEMENT_PARKING_M2,
            high_rise: profile.num_pisos > tables::MAX_LOW_RISE_FLOORS,
            basic_category: profile.categoria_estrellas <= tables::MAX_BASIC_STARS,
        }
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = LodgingProfile::from_record(record)?;
    Ok(rules::cascade(&profile, &Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = LodgingProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("categoria_estrellas", 3_i64)
        .with("tipo_hospedaje", "hotel")
        .with("num_pisos", 3_i64)
        .with("num_habitaciones", 40_i64)
        .with("capacidad_ocupantes", 90_i64)
        .with("tiene_sotano", false)
        .with("uso_mixto", false)
        .with("tiene_estacionamiento", true)
        .with("estacionamiento_en_sotano", false)
}
