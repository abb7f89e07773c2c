use crate::commands::{
    run_batch, run_classify, run_encode, run_label, run_layout, BatchArgs, ClassifyArgs,
    LayoutArgs, RecordArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use matriz_riesgos::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Matriz de Riesgos",
    about = "Classify building establishments into regulatory sub-functions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify one JSON record with the domain's trained model
    Classify(ClassifyArgs),
    /// Derive the regulatory label from the rule cascade alone
    Label(RecordArgs),
    /// Print the encoded feature vector for one JSON record
    Encode(RecordArgs),
    /// Print a domain's feature layout and labels
    Layout(LayoutArgs),
    /// Label (and optionally classify) every row of a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory holding rf_<domain>.json models
    #[arg(long)]
    pub(crate) models_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Label(args) => run_label(args),
        Command::Encode(args) => run_encode(args),
        Command::Layout(args) => run_layout(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matriz_riesgos::Domain;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["matriz-riesgos-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_domain_arguments_and_overrides() {
        let cli = Cli::try_parse_from([
            "matriz-riesgos-api",
            "batch",
            "almacén",
            "registros.csv",
            "--classify",
            "--models-dir",
            "/srv/modelos",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Batch(args)) => {
                assert_eq!(args.domain, Domain::Warehouse);
                assert!(args.classify);
                assert_eq!(args.models_dir, Some(PathBuf::from("/srv/modelos")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_domains() {
        let err = Cli::try_parse_from(["matriz-riesgos-api", "layout", "bodega"])
            .expect_err("unknown domain");
        assert!(err.to_string().contains("unknown domain 'bodega'"));
    }
}
