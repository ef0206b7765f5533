mod generate;
mod load;
mod parse;
mod write;
use generate::*;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DestinationStack {
    /// react + redux-toolkit + redux-saga
    React,
}

impl Generator for DestinationStack {
    fn generate(
        &self,
        intermediate: &parse::intermediate::IntermediateFormat,
        request: &Request,
    ) -> Result<Vec<File>, GenerateError> {
        let generator = match self {
            DestinationStack::React => react::ReactGenerator,
        };
        generator.generate(intermediate, request)
    }
}

impl std::fmt::Display for DestinationStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DestinationStack::React => "react",
        };
        write!(f, "{}", name)
    }
}

/// generate typed react/redux boilerplate (types, api, slice, saga, components) from an OpenAPI spec
#[derive(Parser, Debug)]
#[command(name = "react-codegen", version)]
struct Cli {
    /// path or http(s) url of the OpenAPI document, JSON or YAML
    spec: String,

    /// name every generated file and symbol is derived from
    component: String,

    /// only this schema (case-insensitive) is a root type; also selects the api paths
    type_name: Option<String>,

    /// directory the generated tree is written under
    #[arg(short, long, env = "REACT_CODEGEN_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = DestinationStack::React)]
    target: DestinationStack,

    /// overwrite files that already exist
    #[arg(long)]
    force: bool,

    /// print the paths that would be written and stop
    #[arg(long)]
    dry_run: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let document = load::load(&cli.spec)
        .await
        .with_context(|| format!("loading spec {}", cli.spec))?;
    info!("parsing spec to intermediate");
    let intermediate = parse::intermediate::parse(&document);
    info!(stack = %cli.target, "generating code");
    let files = cli.target.generate(
        &intermediate,
        &Request {
            component: cli.component.clone(),
            type_name: cli.type_name.clone(),
        },
    )?;
    if files.is_empty() {
        info!("no files to write");
        return Ok(());
    }
    if cli.dry_run {
        for file in &files {
            println!("{}", cli.out_dir.join(&file.path).display());
        }
        return Ok(());
    }
    let written = write::write_files(&cli.out_dir, &files, cli.force)
        .with_context(|| format!("writing into {}", cli.out_dir.display()))?;
    info!(
        written = written.written.len(),
        skipped = written.skipped.len(),
        "done"
    );
    Ok(())
}
