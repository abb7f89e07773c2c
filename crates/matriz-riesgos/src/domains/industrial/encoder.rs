use super::tables::{INPUT_HAZARD, PRODUCTION_AREA, PRODUCTION_SCALE, WORKFORCE};
use super::{IndustrialProfile, Signals, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &IndustrialProfile, signals: &Signals) -> FeatureVector {
    FeatureVector::from_array(
        LAYOUT,
        [
            indicator(signals.artisanal()),
            indicator(signals.explosive),
            PRODUCTION_SCALE.lookup(&profile.escala_produccion),
            PRODUCTION_AREA.lookup(&profile.area_produccion_m2),
            WORKFORCE.lookup(&profile.numero_trabajadores),
            INPUT_HAZARD.lookup(&profile.nivel_peligrosidad_insumos),
            indicator(profile.tiene_area_comercializacion_integrada),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::super::{encode, sample_record};

    #[test]
    fn encodes_in_layout_order() {
        let vector = encode(&sample_record()).expect("encodes");
        assert_eq!(vector.values(), &[0.0, 0.0, 4.0, 3000.0, 125.0, 2.0, 0.0]);
    }

    #[test]
    fn artisanal_product_sets_the_indicator() {
        let record = sample_record().with("tipo_producto_fabricado", "Artesanía/Manualidades");
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("es_artesanal"), Some(1.0));
    }

    #[test]
    fn categorical_inputs_are_case_insensitive() {
        let record = sample_record()
            .with("escala_produccion", "PRODUCCIÓN CONTINUA")
            .with("nivel_peligrosidad_insumos", "alto (INFLAMABLES clase i-ii)");
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("escala_produccion"), Some(5.0));
        assert_eq!(vector.get("nivel_peligrosidad_insumos"), Some(3.0));
    }

    #[test]
    fn unseen_buckets_use_defaults() {
        let record = sample_record()
            .with("escala_produccion", "Bajo demanda")
            .with("area_produccion_m2", "variable")
            .with("numero_trabajadores", "0")
            .with("nivel_peligrosidad_insumos", "Desconocido");
        let vector = encode(&record).expect("encodes");
        assert_eq!(&vector.values()[2..6], &[2.0, 125.0, 8.0, 1.0]);
    }
}
