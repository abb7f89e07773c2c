mod common;

use common::{record, record_with, service};
use matriz_riesgos::domains::{assembly, commerce, health, offices, warehouse};
use matriz_riesgos::model::ForestDocument;
use matriz_riesgos::vocabulary::{contains_keyword, lookup};
use matriz_riesgos::{
    ClassificationError, Domain, EncodingError, ForestModel, ModelError, ModelRegistry,
};
use serde_json::json;

#[test]
fn known_bucket_records_encode_to_the_declared_layout() {
    for domain in Domain::ALL {
        let vector = domain.encode(&record(domain)).expect("fixture encodes");
        assert_eq!(vector.len(), domain.feature_layout().len(), "{domain}");
        assert_eq!(vector.layout(), domain.feature_layout());
        let names: Vec<_> = vector.named().into_iter().map(|feature| feature.name).collect();
        assert_eq!(names, domain.feature_layout().names(), "{domain}");
        assert!(vector.values().iter().all(|value| value.is_finite()));
    }
}

#[test]
fn encoding_is_deterministic() {
    for domain in Domain::ALL {
        let first = domain.encode(&record(domain)).expect("encodes");
        let second = domain.encode(&record(domain)).expect("encodes");
        assert_eq!(first, second, "{domain}");
    }
}

#[test]
fn fixtures_derive_their_expected_labels() {
    let expected = [
        (Domain::Health, "I-1"),
        (Domain::Assembly, "2.2"),
        (Domain::Lodging, "3.1"),
        (Domain::Education, "4.1"),
        (Domain::Industrial, "5.2"),
        (Domain::Offices, "6.1"),
        (Domain::Commerce, "7.1"),
        (Domain::Warehouse, "8.2"),
    ];
    for (domain, code) in expected {
        let label = domain.derive_label(&record(domain)).expect("label derives");
        assert_eq!(label.as_str(), code, "{domain}");
    }
}

#[test]
fn unseen_buckets_fall_back_to_table_defaults() {
    let table = warehouse::tables::COVERED_PERCENTAGE;
    assert_eq!(lookup(&table, "casi todo"), table.default_value());

    let record = record_with(
        Domain::Warehouse,
        json!({
            "tipo_cobertura": "Toldo retráctil",
            "porcentaje_area_techada": "casi todo",
            "nivel_peligrosidad_nfpa": "desconocido"
        }),
    );
    let vector = Domain::Warehouse.encode(&record).expect("open-world encode");
    assert_eq!(vector.get("porcentaje_techado"), Some(50.0));
    assert_eq!(vector.get("tipo_cobertura"), Some(1.0));
    assert_eq!(vector.get("nivel_nfpa"), Some(0.0));
}

#[test]
fn keyword_matching_ignores_case_and_padding() {
    assert!(contains_keyword(
        &warehouse::tables::HAZARDOUS_GOODS,
        "  EXPLOSIVO artesanal "
    ));
    assert!(!contains_keyword(
        &warehouse::tables::HAZARDOUS_GOODS,
        "Productos generales"
    ));
}

#[test]
fn hazard_outranks_open_yard() {
    let record = record_with(
        Domain::Warehouse,
        json!({
            "tipo_cobertura": "No Techado",
            "almacena_productos_explosivos_pirotecnicos": true
        }),
    );
    assert_eq!(Domain::Warehouse.derive_label(&record), Ok(warehouse::HAZARDOUS));
}

#[test]
fn basement_outranks_small_occupant_load() {
    let record = record_with(
        Domain::Assembly,
        json!({ "ubicado_en_sotano": true, "carga_ocupantes": 10 }),
    );
    assert_eq!(Domain::Assembly.derive_label(&record), Ok(assembly::BELOW_GRADE));
}

#[test]
fn large_retail_format_outranks_small_footprint() {
    let record = record_with(
        Domain::Commerce,
        json!({
            "tipo_establecimiento_comercial": "Supermercado",
            "numero_pisos_edificacion": "1",
            "area_techada_total_m2": "<300"
        }),
    );
    assert_eq!(Domain::Commerce.derive_label(&record), Ok(commerce::LARGE_RETAIL));
}

#[test]
fn large_floor_plate_wins_whatever_else_is_set() {
    let variations = [
        json!({}),
        json!({ "numero_pisos_edificacion": "1" }),
        json!({ "tipo_ocupacion_edificio": "Compartido con otros usos" }),
        json!({ "año_conformidad_obra": 2024, "tipo_conformidad": "Remodelación" }),
    ];
    for overrides in variations {
        let mut overrides = overrides;
        overrides["area_techada_por_piso_m2"] = json!(">2500");
        let record = record_with(Domain::Offices, overrides);
        assert_eq!(
            Domain::Offices.derive_label(&record),
            Ok(offices::LARGE_FLOOR_PLATE)
        );
    }
}

#[test]
fn rural_health_post_encodes_level_type_and_no_services() {
    let vector = Domain::Health.encode(&record(Domain::Health)).expect("encodes");
    assert_eq!(&vector.values()[..2], &[1.0, 1.0]);
    assert_eq!(vector.get("num_servicios"), Some(0.0));
    assert_eq!(
        Domain::Health.derive_label(&record(Domain::Health)),
        Ok(health::HEALTH_POST)
    );
}

#[test]
fn classification_reports_a_label_of_the_domain_with_bounded_confidence() {
    let service = service();
    for domain in Domain::ALL {
        let result = service.classify(domain, &record(domain)).expect("classifies");
        assert!(domain.labels().contains(&result.label), "{domain}");
        assert!((0.0..=1.0).contains(&result.confidence), "{domain}");
    }

    let result = service
        .classify(Domain::Health, &record(Domain::Health))
        .expect("classifies");
    assert_eq!(result.label, health::HEALTH_POST);
    assert_eq!(result.confidence, 0.8);
}

#[test]
fn warehouse_model_follows_hazard_and_coverage_indicators() {
    let service = service();

    let covered = service
        .classify(Domain::Warehouse, &record(Domain::Warehouse))
        .expect("classifies");
    assert_eq!(covered.label, warehouse::COVERED);
    assert_eq!(covered.confidence, 0.9);

    let open_yard = record_with(Domain::Warehouse, json!({ "porcentaje_area_techada": "0%" }));
    let result = service.classify(Domain::Warehouse, &open_yard).expect("classifies");
    assert_eq!(result.label, warehouse::UNCOVERED);

    let hazardous = record_with(
        Domain::Warehouse,
        json!({ "tipo_productos_almacenados": "Pólvora negra" }),
    );
    let result = service.classify(Domain::Warehouse, &hazardous).expect("classifies");
    assert_eq!(result.label, warehouse::HAZARDOUS);
}

#[test]
fn missing_or_uncoercible_fields_are_rejected() {
    let service = service();

    let mut value = common::fixture(Domain::Lodging);
    value.as_object_mut().expect("object").remove("num_pisos");
    let record = serde_json::from_value(value).expect("record");
    let err = service.classify(Domain::Lodging, &record).expect_err("missing");
    assert!(matches!(
        err,
        ClassificationError::Encoding(EncodingError::MissingField { ref field }) if field == "num_pisos"
    ));

    let record = record_with(Domain::Assembly, json!({ "carga_ocupantes": "muchos" }));
    let err = service.classify(Domain::Assembly, &record).expect_err("not a number");
    assert!(matches!(
        err,
        ClassificationError::Encoding(EncodingError::InvalidType { .. })
    ));
}

#[test]
fn registry_round_trips_through_model_files() {
    let dir = std::env::temp_dir().join(format!(
        "matriz-riesgos-workflow-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create model dir");

    for domain in Domain::ALL {
        let model = if domain == Domain::Warehouse {
            common::warehouse_stumps()
        } else {
            let mut weights = vec![1.0; domain.labels().len()];
            weights[0] = 2.0;
            common::constant_forest(domain, weights)
        };
        let json = serde_json::to_string_pretty(&model.to_document()).expect("serialize");
        std::fs::write(dir.join(domain.model_file_name()), json).expect("write model");
    }

    let registry = ModelRegistry::load(&dir).expect("all models load");
    let service = matriz_riesgos::ClassificationService::new(registry);
    let result = service
        .classify(Domain::Warehouse, &record(Domain::Warehouse))
        .expect("classifies");
    assert_eq!(result.label, warehouse::COVERED);
    assert_eq!(
        service.model_info(Domain::Warehouse).source,
        Some(dir.join("rf_almacen.json"))
    );

    std::fs::remove_file(dir.join("rf_oficinas.json")).expect("remove model");
    let err = ModelRegistry::load(&dir).expect_err("offices missing");
    assert!(matches!(err, ModelError::Missing { domain: Domain::Offices, .. }));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn model_files_for_the_wrong_layout_are_rejected() {
    let mut document: ForestDocument = common::warehouse_stumps().to_document();
    document.feature_names.pop();
    let err = ForestModel::from_document(Domain::Warehouse, document).expect_err("layout");
    assert!(matches!(err, ModelError::Invalid { .. }));
}
