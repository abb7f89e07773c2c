use super::tables::{ADMIN_AREA, COVERAGE, COVERED_PERCENTAGE, ENCLOSURE, NFPA_LEVEL};
use super::{Signals, WarehouseProfile, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &WarehouseProfile, signals: &Signals) -> FeatureVector {
    FeatureVector::from_array(
        LAYOUT,
        [
            indicator(signals.hazardous),
            indicator(signals.uncovered),
            COVERED_PERCENTAGE.lookup(&profile.porcentaje_area_techada),
            COVERAGE.lookup(&profile.tipo_cobertura),
            ENCLOSURE.lookup(&profile.tipo_cerramiento),
            NFPA_LEVEL.lookup(&profile.nivel_peligrosidad_nfpa),
            indicator(profile.tiene_areas_administrativas_techadas),
            ADMIN_AREA.lookup(&profile.area_administrativa_servicios_m2),
            indicator(signals.parking),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::super::{encode, sample_record};
    use crate::record::EncodingError;

    #[test]
    fn known_buckets_encode_in_layout_order() {
        let vector = encode(&sample_record()).expect("encodes");
        assert_eq!(
            vector.values(),
            &[0.0, 0.0, 100.0, 2.0, 2.0, 1.0, 1.0, 30.0, 0.0]
        );
    }

    #[test]
    fn unseen_buckets_fall_back_to_defaults() {
        let record = sample_record()
            .with("porcentaje_area_techada", "casi todo")
            .with("tipo_cobertura", "Carpa")
            .with("tipo_cerramiento", "Malla")
            .with("nivel_peligrosidad_nfpa", "5")
            .with("area_administrativa_servicios_m2", "mucha");
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("porcentaje_techado"), Some(50.0));
        assert_eq!(vector.get("tipo_cobertura"), Some(1.0));
        assert_eq!(vector.get("tipo_cerramiento"), Some(1.0));
        assert_eq!(vector.get("nivel_nfpa"), Some(0.0));
        assert_eq!(vector.get("area_admin"), Some(30.0));
    }

    #[test]
    fn parking_and_hazard_indicators() {
        let record = sample_record()
            .with("uso_principal", "Estacionamiento de camiones")
            .with("tipo_productos_almacenados", "POLVORA y Pólvora negra");
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("es_estacionamiento"), Some(1.0));
        assert_eq!(vector.get("es_8_3"), Some(1.0));

        let record = sample_record().with("tipo_establecimiento", "Depósito Vehicular");
        assert_eq!(
            encode(&record).expect("encodes").get("es_estacionamiento"),
            Some(1.0)
        );
    }

    #[test]
    fn uncoercible_flag_is_an_encoding_error() {
        let mut record = sample_record();
        record.insert("almacena_productos_explosivos_pirotecnicos", "quizás");
        assert!(matches!(
            encode(&record),
            Err(EncodingError::InvalidType { .. })
        ));
    }
}
