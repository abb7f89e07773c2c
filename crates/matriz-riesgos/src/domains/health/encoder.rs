use super::tables::{CAPACITY, FLOORS, SPECIALTIES};
use super::{HealthProfile, Signals, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &HealthProfile, signals: &Signals) -> FeatureVector {
    FeatureVector::from_array(
        LAYOUT,
        [
            signals.level,
            signals.establishment_type,
            signals.beds,
            indicator(profile.usuarios_no_autosuficientes),
            CAPACITY.lookup(&profile.capacidad_atencion),
            profile.key_service_count() as f64,
            indicator(profile.urgencias_24h),
            SPECIALTIES.lookup(&profile.num_especialidades),
            FLOORS.lookup(&profile.num_pisos),
            profile.area_construida,
            profile.personal_medico_total as f64,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::super::{encode, sample_record};
    use crate::record::EncodingError;

    #[test]
    fn rural_post_encodes_mapped_level_and_type_first() {
        let vector = encode(&sample_record()).expect("encodes");
        assert_eq!(&vector.values()[..2], &[1.0, 1.0]);
        assert_eq!(vector.get("num_servicios"), Some(0.0));
        assert_eq!(
            vector.values(),
            &[1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 120.0, 4.0]
        );
    }

    #[test]
    fn counts_distinct_key_services_only() {
        let record = sample_record().with(
            "servicios_disponibles",
            vec!["Urgencias", "Farmacia", "Urgencias", "Odontología", "urgencias"],
        );
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("num_servicios"), Some(2.0));
    }

    #[test]
    fn unknown_buckets_use_defaults() {
        let record = sample_record()
            .with("nivel_atencion", "Cuarto")
            .with("tipo_establecimiento", "Telemedicina")
            .with("camas_internamiento", "muchas")
            .with("capacidad_atencion", "Variable")
            .with("num_especialidades", "3")
            .with("num_pisos", "3");
        let vector = encode(&record).expect("encodes");
        assert_eq!(
            &vector.values()[..9],
            &[1.0, 7.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 2.0]
        );
    }

    #[test]
    fn services_must_be_a_list() {
        let record = sample_record().with("servicios_disponibles", 3_i64);
        assert!(matches!(
            encode(&record),
            Err(EncodingError::InvalidType { .. })
        ));
    }
}
