use super::tables::SCHEDULE;
use super::{AssemblyProfile, Signals, LAYOUT};
use crate::features::{indicator, FeatureVector};

pub(super) fn features(profile: &AssemblyProfile, signals: &Signals) -> FeatureVector {
    FeatureVector::from_array(
        LAYOUT,
        [
            indicator(signals.high_risk_use),
            profile.carga_ocupantes as f64,
            indicator(profile.ubicado_en_sotano),
            profile.num_pisos as f64,
            profile.area_total_m2,
            indicator(profile.evento_recurrente),
            SCHEDULE.lookup(&profile.horario_funcionamiento),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::super::{encode, sample_record};
    use crate::record::EncodingError;

    #[test]
    fn encodes_raw_measurements_and_indicators() {
        let vector = encode(&sample_record()).expect("encodes");
        assert_eq!(vector.values(), &[0.0, 180.0, 0.0, 2.0, 640.5, 1.0, 2.0]);
    }

    #[test]
    fn unknown_schedule_defaults_to_daytime() {
        let record = sample_record().with("horario_funcionamiento", "24 horas");
        assert_eq!(
            encode(&record).expect("encodes").get("horario_funcionamiento"),
            Some(1.0)
        );
    }

    #[test]
    fn numeric_text_is_coerced() {
        let record = sample_record()
            .with("carga_ocupantes", "75")
            .with("area_total_m2", "120");
        let vector = encode(&record).expect("encodes");
        assert_eq!(vector.get("carga_ocupantes"), Some(75.0));
        assert_eq!(vector.get("area_total_m2"), Some(120.0));
    }

    #[test]
    fn non_numeric_occupant_load_is_rejected() {
        let record = sample_record().with("carga_ocupantes", "muchos");
        let err = encode(&record).expect_err("rejects");
        assert_eq!(err.field(), "carga_ocupantes");
        assert!(matches!(err, EncodingError::InvalidType { .. }));
    }
}
