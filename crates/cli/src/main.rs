mod script;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use voxpad_core::interaction::infrastructure::log_notifier::LogNotifier;
use voxpad_core::interaction::infrastructure::system_clipboard::SystemClipboard;
use voxpad_core::recognition::infrastructure::scripted_capability::{
    demo_script, ScriptedCapability,
};
use voxpad_core::session::dictation_use_case::DictationUseCase;

/// Replay a recognition event script through the capture session and print
/// the resulting transcript.
#[derive(Parser)]
#[command(name = "voxpad")]
struct Cli {
    /// JSON script of capability events (defaults to the built-in sample).
    script: Option<PathBuf>,

    /// Copy the resulting transcript to the system clipboard.
    #[arg(long)]
    copy: bool,

    /// Log every lifecycle decision while replaying.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.trace {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let events = match &cli.script {
        Some(path) => script::load(path)?,
        None => {
            log::info!("no script given, replaying the built-in sample");
            demo_script()
        }
    };

    let probe = ScriptedCapability::probe(events, None);
    let mut session = DictationUseCase::new(
        probe,
        Box::new(SystemClipboard::new()),
        Box::new(LogNotifier),
    );

    session.start();
    while session.pump() {}

    let transcript = session.snapshot();
    if cli.copy {
        session.copy();
    }
    println!("{transcript}");

    Ok(())
}
