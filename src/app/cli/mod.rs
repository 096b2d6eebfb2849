//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::api;
use crate::app::config::ProjectOverrides;
use crate::domain::AppError;
use crate::domain::vite_vue::CATALOG_SCOPE;

#[derive(Parser)]
#[command(name = "clientgen")]
#[command(version)]
#[command(about = "Generate Vite + Vue client scaffolding into a project", long_about = None)]
struct Cli {
    /// Log every generated file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProjectArgs {
    /// Project folder (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,
    /// Application base name
    #[arg(long)]
    base_name: Option<String>,
}

impl ProjectArgs {
    fn overrides(&self, project_name: Option<String>) -> ProjectOverrides {
        ProjectOverrides { base_name: self.base_name.clone(), project_name }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create package.json, README.md and .gitignore in an empty project
    #[clap(visible_alias = "i")]
    Init {
        #[command(flatten)]
        project: ProjectArgs,
        /// Human-readable project name
        #[arg(long)]
        project_name: Option<String>,
    },
    /// Add the Vite + Vue client
    #[clap(visible_alias = "vv")]
    ViteVue {
        #[command(flatten)]
        project: ProjectArgs,
        /// Use the styled markup and add the image assets
        #[arg(short, long)]
        styled: bool,
    },
    /// Print pinned dependency versions
    #[clap(visible_alias = "deps")]
    Dependencies {
        /// Catalog scope
        #[arg(long, default_value = CATALOG_SCOPE)]
        scope: String,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { project, project_name } => run_init(&project, project_name),
        Commands::ViteVue { project, styled } => run_vite_vue(&project, styled),
        Commands::Dependencies { scope } => run_dependencies(&scope),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init(args: &ProjectArgs, project_name: Option<String>) -> Result<(), AppError> {
    let project = api::init(args.path.as_deref(), &args.overrides(project_name))?;
    println!("✅ Initialized project '{}' in {}", project.base_name(), project.folder().display());
    Ok(())
}

fn run_vite_vue(args: &ProjectArgs, styled: bool) -> Result<(), AppError> {
    let project = api::vite_vue(args.path.as_deref(), styled, &args.overrides(None))?;
    let variant = if styled { "styled Vite + Vue" } else { "Vite + Vue" };
    println!("✅ Added {} client to {}", variant, project.folder().display());
    Ok(())
}

fn run_dependencies(scope: &str) -> Result<(), AppError> {
    for entry in api::dependencies(scope)? {
        println!("{} {}", entry.name, entry.version);
    }
    Ok(())
}
