use anyhow::Result;
use clap::Parser;
use playlist_catalog::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
};
use playlist_catalog::generator::{generate, today};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "catalog-gen")]
#[command(version = env!("APP_VERSION"))]
#[command(about = "Generate the site's data.json from the class playlists CSV")]
struct CliArgs {
    /// Path to the CSV export of class playlists.
    #[clap(long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Path of the JSON document to generate.
    #[clap(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Optional TOML config file, its values override the flags above.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        input: cli_args.input,
        output: cli_args.output,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;
    info!("catalog-gen {}", env!("APP_VERSION"));

    let summary = generate(&config, today())?;

    for line in summary.lines() {
        println!("{}", line);
    }

    Ok(())
}
