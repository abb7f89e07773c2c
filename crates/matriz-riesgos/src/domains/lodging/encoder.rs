use super::{LodgingProfile, Signals, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &LodgingProfile, signals: &Signals) -> FeatureVector {
    FeatureVector::from_array(
        LAYOUT,
        [
            profile.categoria_estrellas as f64,
            indicator(signals.special_type),
            profile.num_pisos as f64,
            indicator(profile.tiene_sotano),
            profile.num_habitaciones as f64,
            profile.capacidad_ocupantes as f64,
            indicator(profile.uso_mixto),
            indicator(profile.tiene_estacionamiento),
            indicator(profile.estacionamiento_en_sotano),
            profile.parking_area(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::super::{encode, sample_record};

    #[test]
    fn encodes_in_layout_order() {
        let vector = encode(&sample_record()).expect("encodes");
        assert_eq!(
            vector.values(),
            &[3.0, 0.0, 3.0, 0.0, 40.0, 90.0, 0.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn basement_parking_area_is_estimated_when_absent() {
        let record = sample_record().with("estacionamiento_en_sotano", true);
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("area_estacionamiento"), Some(600.0));

        let record = record.with("area_estacionamiento_m2", 410.0);
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("area_estacionamiento"), Some(410.0));
    }

    #[test]
    fn reported_area_is_ignored_without_basement_parking() {
        let record = sample_record().with("area_estacionamiento_m2", 900.0);
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("area_estacionamiento"), Some(0.0));
        assert_eq!(vector.get("estacionamiento_en_sotano"), Some(0.0));
    }

    #[test]
    fn only_named_special_types_are_flagged() {
        let vector = encode(&sample_record().with("tipo_hospedaje", "ECOLODGE")).expect("encodes");
        assert_eq!(vector.get("tipo_especial"), Some(1.0));

        let vector = encode(&sample_record().with("tipo_hospedaje", "glamping")).expect("encodes");
        assert_eq!(vector.get("tipo_especial"), Some(0.0));
    }

    #[test]
    fn missing_star_rating_is_rejected() {
        let record = sample_record().without("categoria_estrellas");
        let err = encode(&record).expect_err("rejects");
        assert_eq!(
            err,
            crate::record::EncodingError::MissingField {
                field: "categoria_estrellas".to_string()
            }
        );
    }
}
