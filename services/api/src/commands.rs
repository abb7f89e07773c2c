use crate::infra::{load_service, read_record};
use clap::Args;
use matriz_riesgos::batch::{evaluate, parse_records, summarize, RowOutcome};
use matriz_riesgos::error::AppError;
use matriz_riesgos::{ClassificationResponse, Domain};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args, Debug)]
pub(crate) struct RecordArgs {
    /// Domain slug (salud, encuentro, hospedaje, educacion, industrial,
    /// oficinas, comercio, almacen) or its English name
    pub(crate) domain: Domain,
    /// JSON file holding one attribute record
    pub(crate) record: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    #[command(flatten)]
    pub(crate) input: RecordArgs,
    /// Override the directory holding rf_<domain>.json models
    #[arg(long)]
    pub(crate) models_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct LayoutArgs {
    pub(crate) domain: Domain,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    pub(crate) domain: Domain,
    /// CSV file: header row of attribute names, lists separated by ';'
    pub(crate) records: PathBuf,
    /// Also run every row through the trained model
    #[arg(long)]
    pub(crate) classify: bool,
    /// Override the directory holding rf_<domain>.json models
    #[arg(long)]
    pub(crate) models_dir: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs { input, models_dir } = args;
    let record = read_record(&input.record)?;
    let service = load_service(models_dir)?;

    let started = Instant::now();
    let result = service.classify(input.domain, &record)?;
    let response = ClassificationResponse::new(result, started.elapsed());

    println!("Domain: {}", input.domain);
    println!("Label: {}", response.label);
    println!("Confidence: {:.2}%", response.confidence_percent);
    println!("Latency: {:.2} ms", response.latency_ms);
    Ok(())
}

pub(crate) fn run_label(args: RecordArgs) -> Result<(), AppError> {
    let record = read_record(&args.record)?;
    let label = args.domain.derive_label(&record)?;
    println!("{} {}", args.domain, label);
    Ok(())
}

pub(crate) fn run_encode(args: RecordArgs) -> Result<(), AppError> {
    let record = read_record(&args.record)?;
    let vector = args.domain.encode(&record)?;
    for feature in vector.named() {
        println!("{:<40} {}", feature.name, feature.value);
    }
    Ok(())
}

pub(crate) fn run_layout(args: LayoutArgs) -> Result<(), AppError> {
    let domain = args.domain;
    println!("{} ({})", domain, domain.english_name());
    println!(
        "Labels: {}",
        domain
            .labels()
            .iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Features:");
    for (index, name) in domain.feature_layout().names().iter().enumerate() {
        println!("  {index:>2}  {name}");
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        domain,
        records,
        classify,
        models_dir,
    } = args;

    let rows = parse_records(File::open(&records)?)?;
    let service = if classify {
        Some(load_service(models_dir)?)
    } else {
        None
    };

    let outcomes = evaluate(domain, &rows, service.as_ref());
    for outcome in &outcomes {
        println!("{}", render_row(outcome));
    }

    let summary = summarize(domain, &outcomes);
    println!("\n{} rows, {} failed", summary.rows, summary.failed);
    if summary.compared > 0 {
        println!(
            "Model agrees with the rules on {} of {} rows",
            summary.agreeing, summary.compared
        );
    }
    Ok(())
}

fn render_row(outcome: &RowOutcome) -> String {
    let rule = match &outcome.rule_label {
        Ok(label) => format!("rules={label}"),
        Err(err) => format!("error: {err}"),
    };
    match &outcome.prediction {
        Some(Ok(result)) => format!(
            "line {:>4}  {rule}  model={} ({:.2}%)",
            outcome.line,
            result.label,
            result.confidence * 100.0
        ),
        Some(Err(err)) if outcome.rule_label.is_ok() => {
            format!("line {:>4}  {rule}  model error: {err}", outcome.line)
        }
        Some(Err(_)) | None => format!("line {:>4}  {rule}", outcome.line),
    }
}
