use clap::Parser;
use small_calc::utils::logger;
use small_calc::{CliConfig, Session, TerminalDisplay};
use std::io::{self, BufRead, Stdout};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let display = TerminalDisplay::new(io::stdout());
    let mut session = Session::from_config(display, &settings)?;

    match &config.keys {
        Some(script) => run_line(&mut session, script, config.trace)?,
        None => {
            present(&mut session)?;
            for line in io::stdin().lock().lines() {
                run_line(&mut session, &line?, config.trace)?;
            }
        }
    }

    Ok(())
}

fn run_line(
    session: &mut Session<TerminalDisplay<Stdout>>,
    script: &str,
    trace: bool,
) -> io::Result<()> {
    if !trace {
        session.run_script(script);
        return present(session);
    }

    for key in small_calc::core::keymap::tokenize(script) {
        if session.press(&key).is_some() {
            present(session)?;
        }
    }
    Ok(())
}

fn present(session: &mut Session<TerminalDisplay<Stdout>>) -> io::Result<()> {
    session.calculator_mut().display_mut().present()
}
