#![allow(dead_code)]

use std::sync::Arc;

use matriz_riesgos::model::{DecisionTree, TreeNode};
use matriz_riesgos::{
    ClassificationService, Domain, ForestModel, ModelRegistry, RawAttributeRecord,
};
use serde_json::{json, Value};

/// A record per domain whose every field sits in a known bucket.
pub fn fixture(domain: Domain) -> Value {
    match domain {
        Domain::Health => json!({
            "nivel_atencion": "Primer",
            "tipo_establecimiento": "Puesto",
            "camas_internamiento": "0",
            "capacidad_atencion": "Baja",
            "num_especialidades": "0",
            "num_pisos": "1",
            "usuarios_no_autosuficientes": false,
            "urgencias_24h": false,
            "servicios_disponibles": [],
            "area_construida": 120.0,
            "personal_medico_total": 4
        }),
        Domain::Assembly => json!({
            "tipo_actividad": "salon_eventos",
            "horario_funcionamiento": "nocturno",
            "carga_ocupantes": 180,
            "num_pisos": 2,
            "area_total_m2": 640.5,
            "ubicado_en_sotano": false,
            "evento_recurrente": true
        }),
        Domain::Lodging => json!({
            "categoria_estrellas": 3,
            "tipo_hospedaje": "hotel",
            "num_pisos": 3,
            "num_habitaciones": 40,
            "capacidad_ocupantes": 90,
            "tiene_sotano": false,
            "uso_mixto": false,
            "tiene_estacionamiento": true,
            "estacionamiento_en_sotano": false
        }),
        Domain::Education => json!({
            "nivel_educativo": "Primaria",
            "tipo_institucion": "Colegio Regular",
            "numero_pisos": "2",
            "area_construida_m2": "500-1500",
            "capacidad_alumnos": "300-800",
            "tipo_edificacion": "Construida como Educativa",
            "atiende_personas_discapacidad": false,
            "cantidad_aulas": 18
        }),
        Domain::Industrial => json!({
            "tipo_proceso_productivo": "Mecanizado",
            "tipo_maquinaria_principal": "Maquinaria Industrial Fija",
            "escala_produccion": "Gran Serie",
            "tipo_producto_fabricado": "Productos Industriales Generales",
            "nivel_peligrosidad_insumos": "Medio (inflamables Clase IIIA)",
            "area_produccion_m2": "1000-5000",
            "numero_trabajadores": "51-200",
            "tipo_establecimiento": "Planta Industrial",
            "trabaja_materiales_explosivos": false,
            "tiene_area_comercializacion_integrada": false
        }),
        Domain::Offices => json!({
            "numero_pisos_edificacion": "3",
            "area_techada_por_piso_m2": "200-400",
            "area_techada_total_m2": "500-2000",
            "tipo_ocupacion_edificio": "Uso Exclusivo (todo el edificio)",
            "areas_comunes_tienen_itse_vigente": "No Aplica (uso exclusivo)",
            "año_conformidad_obra": 2022,
            "tiene_conformidad_obra_vigente": true,
            "ha_tenido_remodelaciones_ampliaciones": false,
            "uso_diseño_original": "Oficinas desde origen",
            "tipo_conformidad": "Obra Nueva"
        }),
        Domain::Commerce => json!({
            "numero_pisos_edificacion": "1",
            "area_techada_total_m2": "<300",
            "area_venta_m2": "<200",
            "tipo_establecimiento_comercial": "Bodega",
            "modalidad_operacion": "Local independiente",
            "uso_edificacion": "Exclusivo comercio",
            "tipo_licencia_funcionamiento": "Individual",
            "tipo_productos_peligrosos": "Ninguno",
            "numero_locales_comerciales_edificio": "1",
            "comercializa_productos_explosivos_pirotecnicos": false
        }),
        Domain::Warehouse => json!({
            "tipo_cobertura": "Totalmente Techado",
            "porcentaje_area_techada": "100%",
            "tipo_cerramiento": "Cerrado (muros completos)",
            "tipo_establecimiento": "Almacén general",
            "uso_principal": "Almacenamiento de mercadería",
            "tipo_productos_almacenados": "Productos generales",
            "nivel_peligrosidad_nfpa": "1 (ligero)",
            "area_administrativa_servicios_m2": "1-50",
            "almacena_productos_explosivos_pirotecnicos": false,
            "tiene_areas_administrativas_techadas": true
        }),
    }
}

pub fn record(domain: Domain) -> RawAttributeRecord {
    serde_json::from_value(fixture(domain)).expect("fixture is a valid record")
}

pub fn record_with(domain: Domain, overrides: Value) -> RawAttributeRecord {
    let mut value = fixture(domain);
    if let (Some(target), Value::Object(patch)) = (value.as_object_mut(), overrides) {
        target.extend(patch);
    }
    serde_json::from_value(value).expect("patched fixture is a valid record")
}

/// Single-leaf forest that always reports `weights` for the domain's labels.
pub fn constant_forest(domain: Domain, weights: Vec<f64>) -> ForestModel {
    ForestModel::new(
        domain,
        domain.labels().to_vec(),
        vec![DecisionTree::new(vec![TreeNode::Leaf { value: weights }])],
    )
    .expect("valid forest")
}

/// Warehouse forest that follows the hazard and open-yard indicators.
pub fn warehouse_stumps() -> ForestModel {
    ForestModel::new(
        Domain::Warehouse,
        Domain::Warehouse.labels().to_vec(),
        vec![
            DecisionTree::new(vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 0.5,
                    left: 1,
                    right: 2,
                },
                TreeNode::Split {
                    feature: 1,
                    threshold: 0.5,
                    left: 3,
                    right: 4,
                },
                TreeNode::Leaf {
                    value: vec![0.0, 1.0, 9.0],
                },
                TreeNode::Leaf {
                    value: vec![1.0, 9.0, 0.0],
                },
                TreeNode::Leaf {
                    value: vec![8.0, 2.0, 0.0],
                },
            ]),
        ],
    )
    .expect("valid forest")
}

/// Every domain favours its first label at 80%, except the warehouse stumps.
pub fn registry() -> ModelRegistry {
    let mut builder = ModelRegistry::builder();
    for domain in Domain::ALL {
        let model = if domain == Domain::Warehouse {
            warehouse_stumps()
        } else {
            let mut weights = vec![0.0; domain.labels().len()];
            weights[0] = 4.0;
            weights[1] = 1.0;
            constant_forest(domain, weights)
        };
        builder = builder.with(domain, Arc::new(model));
    }
    builder.build().expect("registry covers all domains")
}

pub fn service() -> ClassificationService {
    ClassificationService::new(registry())
}
