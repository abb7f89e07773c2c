//! Industrial premises: labels 5.1 to 5.3.

mod encoder;
mod rules;
pub mod tables;

use crate::features::{FeatureLayout, FeatureVector};
use crate::record::{EncodingError, RawAttributeRecord};

use super::RegulatoryLabel;

pub const WORKSHOP: RegulatoryLabel = RegulatoryLabel::new("5.1");
pub const GENERAL_INDUSTRY: RegulatoryLabel = RegulatoryLabel::new("5.2");
pub const EXPLOSIVES: RegulatoryLabel = RegulatoryLabel::new("5.3");

pub const LABELS: [RegulatoryLabel; 3] = [WORKSHOP, GENERAL_INDUSTRY, EXPLOSIVES];

pub const LAYOUT: FeatureLayout = FeatureLayout::new(&[
    "es_artesanal",
    "es_explosivo",
    "escala_produccion",
    "area_produccion_m2",
    "numero_trabajadores",
    "nivel_peligrosidad_insumos",
    "tiene_area_comercializacion_integrada",
]);

#[derive(Debug, Clone, PartialEq)]
pub struct IndustrialProfile {
    pub tipo_proceso_productivo: String,
    pub tipo_maquinaria_principal: String,
    pub escala_produccion: String,
    pub tipo_producto_fabricado: String,
    pub nivel_peligrosidad_insumos: String,
    pub area_produccion_m2: String,
    pub numero_trabajadores: String,
    pub tipo_establecimiento: String,
    pub trabaja_materiales_explosivos: bool,
    pub tiene_area_comercializacion_integrada: bool,
}

impl IndustrialProfile {
    pub fn from_record(record: &RawAttributeRecord) -> Result<Self, EncodingError> {
        Ok(Self {
            tipo_proceso_productivo: record.text("tipo_proceso_productivo")?.into_owned(),
            tipo_maquinaria_principal: record.text("tipo_maquinaria_principal")?.into_owned(),
            escala_produccion: record.text("escala_produccion")?.into_owned(),
            tipo_producto_fabricado: record.text("tipo_producto_fabricado")?.into_owned(),
            nivel_peligrosidad_insumos: record.text("nivel_peligrosidad_insumos")?.into_owned(),
            area_produccion_m2: record.text("area_produccion_m2")?.into_owned(),
            numero_trabajadores: record.text("numero_trabajadores")?.into_owned(),
            tipo_establecimiento: record.text("tipo_establecimiento")?.into_owned(),
            trabaja_materiales_explosivos: record.flag("trabaja_materiales_explosivos")?,
            tiene_area_comercializacion_integrada: record
                .flag("tiene_area_comercializacion_integrada")?,
        })
    }
}

pub(crate) struct Signals {
    pub explosive: bool,
    pub manual_process: bool,
    pub manual_tooling: bool,
    pub artisanal_establishment: bool,
    pub artisanal_product: bool,
    pub small_operation: bool,
}

impl Signals {
    pub fn evaluate(profile: &IndustrialProfile) -> Self {
        let explosive = profile.trabaja_materiales_explosivos
            || tables::EXPLOSIVE_PRODUCTS.contains_keyword(&profile.tipo_producto_fabricado)
            || tables::VERY_HIGH_HAZARD.contains_keyword(&profile.nivel_peligrosidad_insumos)
            || tables::EXPLOSIVE_ESTABLISHMENTS.contains_keyword(&profile.tipo_establecimiento);

        let small_operation = tables::SMALL_AREA_BUCKETS
            .contains(&profile.area_produccion_m2.as_str())
            && tables::SMALL_WORKFORCE_BUCKETS.contains(&profile.numero_trabajadores.as_str());

        Self {
            explosive,
            manual_process: tables::MANUAL_PROCESS
                .contains_keyword(&profile.tipo_proceso_productivo),
            manual_tooling: tables::MANUAL_TOOLING
                .contains_keyword(&profile.tipo_maquinaria_principal),
            artisanal_establishment: tables::ARTISANAL_ESTABLISHMENT
                .contains_keyword(&profile.tipo_establecimiento),
            artisanal_product: tables::ARTISANAL_PRODUCT
                .contains_keyword(&profile.tipo_producto_fabricado),
            small_operation,
        }
    }

    fn handcraft(&self) -> bool {
        self.manual_process || self.manual_tooling || self.artisanal_establishment
    }

    /// Feature indicator: handcraft evidence, including artisanal products.
    pub fn artisanal(&self) -> bool {
        self.handcraft() || self.artisanal_product
    }

    /// Rule predicate for 5.1: handcraft evidence or a small operation.
    pub fn workshop(&self) -> bool {
        self.handcraft() || self.small_operation
    }
}

pub fn derive_label(record: &RawAttributeRecord) -> Result<RegulatoryLabel, EncodingError> {
    let profile = IndustrialProfile::from_record(record)?;
    Ok(rules::cascade(&Signals::evaluate(&profile)))
}

pub fn encode(record: &RawAttributeRecord) -> Result<FeatureVector, EncodingError> {
    let profile = IndustrialProfile::from_record(record)?;
    let signals = Signals::evaluate(&profile);
    Ok(encoder::features(&profile, &signals))
}

#[cfg(test)]
pub(crate) fn sample_record() -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with("tipo_proceso_productivo", "Mecanizado")
        .with("tipo_maquinaria_principal", "Maquinaria Industrial Fija")
        .with("escala_produccion", "Gran Serie")
        .with("tipo_producto_fabricado", "Productos Industriales Generales")
        .with("nivel_peligrosidad_insumos", "Medio (inflamables Clase IIIA)")
        .with("area_produccion_m2", "1000-5000")
        .with("numero_trabajadores", "51-200")
        .with("tipo_establecimiento", "Planta Industrial")
        .with("trabaja_materiales_explosivos", false)
        .with("tiene_area_comercializacion_integrada", false)
}
