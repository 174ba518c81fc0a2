//! CLI Adapter.

mod new;
mod plan;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::app::api::load_config_file;
use crate::app::logging;
use crate::domain::{AppError, RawServiceConfig};

#[derive(Parser)]
#[command(name = "svcforge")]
#[command(version)]
#[command(about = "Scaffold Go gRPC microservices", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new service directory
    #[clap(visible_alias = "n")]
    New {
        #[command(flatten)]
        config: ConfigArgs,
        /// Directory the <name>-service directory is created in
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: PathBuf,
        /// Prompt for values not supplied by flags or the config file
        #[arg(short, long)]
        interactive: bool,
        /// Skip the confirmation prompt in interactive mode
        #[arg(short, long)]
        yes: bool,
        /// Do not initialize a repository even when a remote is configured
        #[arg(long)]
        no_git: bool,
    },
    /// Show the files `new` would write, without writing them
    #[clap(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        config: ConfigArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = plan::PlanFormat::Text)]
        format: plan::PlanFormat,
    },
}

/// Configuration flags shared by `new` and `plan`. Flags override the config file.
#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Base service name, e.g. User or OrderItem
    name: Option<String>,
    /// Go module path, e.g. github.com/acme/user-service
    #[arg(short, long)]
    module: Option<String>,
    /// gRPC listen port
    #[arg(short, long, allow_negative_numbers = true)]
    port: Option<i64>,
    /// Storage backend: relational, postgres, document or mongodb
    #[arg(short, long)]
    backend: Option<String>,
    /// Use PostgreSQL storage
    #[arg(long)]
    postgres: bool,
    /// Use MongoDB storage
    #[arg(long)]
    mongodb: bool,
    /// Database name
    #[arg(long)]
    database: Option<String>,
    /// Table or collection name
    #[arg(long)]
    table: Option<String>,
    /// Cache key prefix
    #[arg(long)]
    cache_prefix: Option<String>,
    /// Redis database number (0-15)
    #[arg(long, allow_negative_numbers = true)]
    cache_db: Option<i64>,
    /// Add the message-queue publisher and worker
    #[arg(short, long)]
    queue: bool,
    /// Repository remote; the generated tree is committed when set
    #[arg(long)]
    git_remote: Option<String>,
    /// Environment variable holding the token signing key
    #[arg(long)]
    signing_key_env: Option<String>,
    /// TOML or YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn into_raw(self) -> Result<RawServiceConfig, AppError> {
        let file = match &self.config {
            Some(path) => load_config_file(path)?,
            None => RawServiceConfig::default(),
        };

        let flags = RawServiceConfig {
            name: self.name,
            module_path: self.module,
            port: self.port,
            backend: self.backend,
            relational: self.postgres.then_some(true),
            document: self.mongodb.then_some(true),
            database_name: self.database,
            table_name: self.table,
            cache_prefix: self.cache_prefix,
            cache_db: self.cache_db,
            message_queue: self.queue.then_some(true),
            git_remote: self.git_remote,
            signing_key_env: self.signing_key_env,
        };

        Ok(file.merge(flags))
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::New { config, output_dir, interactive, yes, no_git } => {
            new::run_new(config, new::NewOptions { output_dir, interactive, yes, no_git })
        }
        Commands::Plan { config, format } => plan::run_plan(config, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
