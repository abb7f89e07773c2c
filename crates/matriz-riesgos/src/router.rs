use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::classification::{ClassificationResponse, ClassificationService};
use crate::domains::{Domain, RegulatoryLabel};
use crate::error::AppError;
use crate::features::NamedFeature;
use crate::model::ModelInfo;
use crate::record::RawAttributeRecord;

#[derive(Debug, Serialize)]
pub struct LabelView {
    pub domain: Domain,
    pub label: RegulatoryLabel,
}

#[derive(Debug, Serialize)]
pub struct EncodingView {
    pub domain: Domain,
    pub features: Vec<NamedFeature>,
}

#[derive(Debug, Serialize)]
pub struct LayoutView<'a> {
    pub domain: Domain,
    pub features: &'static [&'static str],
    pub labels: &'static [RegulatoryLabel],
    pub model: &'a ModelInfo,
}

#[derive(Debug, Serialize)]
pub struct DomainSummary {
    pub domain: Domain,
    pub name: &'static str,
    pub labels: &'static [RegulatoryLabel],
    pub feature_count: usize,
}

/// HTTP endpoints for classification, rule labels and encodings. The
/// `/funcion-<slug>` routes answer with the Spanish response keys older
/// clients read.
pub fn classification_router(service: Arc<ClassificationService>) -> Router {
    let router = Router::new()
        .route("/api/v1/domains", get(domains_handler))
        .route("/api/v1/domains/:domain/classify", post(classify_handler))
        .route("/api/v1/domains/:domain/label", post(label_handler))
        .route("/api/v1/domains/:domain/encode", post(encode_handler))
        .route("/api/v1/domains/:domain/layout", get(layout_handler));

    Domain::ALL
        .into_iter()
        .fold(router, |router, domain| {
            router.route(
                &format!("/funcion-{}", domain.slug()),
                post(
                    move |State(service): State<Arc<ClassificationService>>,
                          Json(record): Json<RawAttributeRecord>| async move {
                        legacy_classify(&service, domain, &record)
                    },
                ),
            )
        })
        .with_state(service)
}

fn classify(
    service: &ClassificationService,
    domain: Domain,
    record: &RawAttributeRecord,
) -> Result<ClassificationResponse, AppError> {
    let started = Instant::now();
    let result = service.classify(domain, record)?;
    Ok(ClassificationResponse::new(result, started.elapsed()))
}

fn legacy_classify(
    service: &ClassificationService,
    domain: Domain,
    record: &RawAttributeRecord,
) -> Result<Response, AppError> {
    let response = classify(service, domain, record)?;
    let mut payload = serde_json::Map::new();
    payload.insert(format!("subfuncion_{}", domain.slug()), json!(response.label));
    payload.insert("confianza".to_string(), json!(response.confidence_percent));
    payload.insert("tiempo_ms".to_string(), json!(response.latency_ms));
    Ok((StatusCode::OK, Json(payload)).into_response())
}

pub(crate) async fn domains_handler() -> Json<Vec<DomainSummary>> {
    let domains = Domain::ALL
        .into_iter()
        .map(|domain| DomainSummary {
            domain,
            name: domain.english_name(),
            labels: domain.labels(),
            feature_count: domain.feature_layout().len(),
        })
        .collect();
    Json(domains)
}

pub(crate) async fn classify_handler(
    State(service): State<Arc<ClassificationService>>,
    Path(domain): Path<String>,
    Json(record): Json<RawAttributeRecord>,
) -> Result<Json<ClassificationResponse>, AppError> {
    let domain: Domain = domain.parse()?;
    classify(&service, domain, &record).map(Json)
}

pub(crate) async fn label_handler(
    State(service): State<Arc<ClassificationService>>,
    Path(domain): Path<String>,
    Json(record): Json<RawAttributeRecord>,
) -> Result<Json<LabelView>, AppError> {
    let domain: Domain = domain.parse()?;
    let label = service.derive_label(domain, &record)?;
    Ok(Json(LabelView { domain, label }))
}

pub(crate) async fn encode_handler(
    State(service): State<Arc<ClassificationService>>,
    Path(domain): Path<String>,
    Json(record): Json<RawAttributeRecord>,
) -> Result<Json<EncodingView>, AppError> {
    let domain: Domain = domain.parse()?;
    let vector = service.encode(domain, &record)?;
    Ok(Json(EncodingView {
        domain,
        features: vector.named(),
    }))
}

pub(crate) async fn layout_handler(
    State(service): State<Arc<ClassificationService>>,
    Path(domain): Path<String>,
) -> Result<Response, AppError> {
    let domain: Domain = domain.parse()?;
    let view = LayoutView {
        domain,
        features: domain.feature_layout().names(),
        labels: domain.labels(),
        model: service.model_info(domain),
    };
    Ok((StatusCode::OK, Json(view)).into_response())
}
