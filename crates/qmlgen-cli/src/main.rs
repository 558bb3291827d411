use clap::{Parser, Subcommand};
use qmlgen::{
    commands::generate::{self, GenerateCommand},
    logger, GlobalOpts,
};

#[derive(Parser)]
#[command(name = "qmlgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "QML type manifest generator",
    long_about = "qmlgen scans Python source files for reactive (QObject-derived) classes and generates .qmltypes manifests for the QML tooling type registry."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .qmltypes manifest from Python sources
    Generate(GenerateCommand),
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbosity_level());
    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    tracing::debug!("qmlgen {} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Generate(cmd) => {
            if let Err(e) = generate::handle_generate(cmd, cli.global) {
                logger::error(&format!("Generate command failed: {:#}", e));
                logger::show_log_path();
                std::process::exit(1);
            }
        }
    }
}
