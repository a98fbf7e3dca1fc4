use anyhow::Context;
use clap::Parser;
use small_calc::utils::logger;
use small_calc::{CliConfig, RecordingDisplay, Session};

#[derive(Parser)]
#[command(name = "replay")]
#[command(about = "Replay a key script and print the screen after every key as JSON")]
struct Args {
    /// File holding the key script; line breaks are ignored
    script: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Fractional digits shown for results
    #[arg(long)]
    precision: Option<usize>,

    /// Pretty-print the transcript
    #[arg(long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_json_logger(args.verbose);

    let cli = CliConfig {
        config: args.config.clone(),
        precision: args.precision,
        verbose: args.verbose,
        ..CliConfig::default()
    };
    let settings = cli.resolve().context("failed to resolve calculator settings")?;

    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read key script '{}'", args.script))?;
    let script: String = script.lines().collect();

    tracing::info!("Replaying {} characters from {}", script.len(), args.script);

    let mut session = Session::from_config(RecordingDisplay::new(), &settings)?;
    let frames = session.run_script_traced(&script);

    let json = if args.pretty {
        serde_json::to_string_pretty(&frames)?
    } else {
        serde_json::to_string(&frames)?
    };
    println!("{}", json);

    Ok(())
}
