use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use bidipad::kernel::services::adapters::{
    ensure_settings_file, get_download_dir, load_settings_from, DirectoryDownloadService,
    Osc52Clipboard, TokioExecutor,
};
use bidipad::kernel::services::ports::Settings;
use bidipad::kernel::services::KernelServiceHost;
use bidipad::kernel::EditorController;
use bidipad::surface::MemorySurface;

mod logging;
mod shell;

use shell::{ParseError, Session, ShellCommand, HELP};

const USAGE: &str = "usage: bidipad [--settings <path>] [--help]";
const FINISH_TIMEOUT: Duration = Duration::from_secs(5);

struct Args {
    settings: Option<PathBuf>,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        settings: None,
        help: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                let path = args.next().ok_or("--settings needs a path")?;
                parsed.settings = Some(PathBuf::from(path));
            }
            "-h" | "--help" => parsed.help = true,
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }
    Ok(parsed)
}

fn load_settings(path: Option<PathBuf>) -> Settings {
    let path = match path {
        Some(path) => Some(path),
        None => ensure_settings_file()
            .map_err(|e| eprintln!("bidipad: {}", e))
            .ok(),
    };
    let Some(path) = path else {
        return Settings::default();
    };
    load_settings_from(&path).unwrap_or_else(|e| {
        eprintln!("bidipad: {} ({}), using defaults", e, path.display());
        Settings::default()
    })
}

fn run(args: Args) -> io::Result<()> {
    let settings = load_settings(args.settings);
    let logging_guard = logging::init(&settings.log_filter);
    if logging_guard.is_none() {
        eprintln!("bidipad: file logging disabled");
    }

    let download_dir = settings
        .download_dir
        .clone()
        .or_else(get_download_dir)
        .unwrap_or_else(|| std::env::temp_dir().join("bidipad").join("downloads"));
    tracing::info!(download_dir = %download_dir.display(), "session starting");

    let executor = TokioExecutor::new()?;
    let host = KernelServiceHost::new(
        Arc::new(executor),
        Arc::new(Osc52Clipboard::detect()),
        Arc::new(DirectoryDownloadService::new(download_dir)),
    );
    let controller = EditorController::new(MemorySurface::new(), settings.editor_config());
    let mut session = Session::new(controller, host);

    // Unlocked: the OSC 52 clipboard writes to stdout from the runtime.
    let stdin = io::stdin();
    let mut out = io::stdout();
    writeln!(out, "{}", session.controller().status_bar())?;

    for line in stdin.lock().lines() {
        let line = line?;
        match ShellCommand::parse(&line) {
            Ok(cmd) => {
                if !session.execute(cmd, &mut out)? {
                    break;
                }
            }
            Err(ParseError::Empty) => continue,
            Err(e) => writeln!(out, "{}", e)?,
        }
        out.flush()?;
    }

    session.finish(&mut out, FINISH_TIMEOUT)?;
    let state = session.controller().state();
    tracing::info!(
        words = state.word_count,
        chars = state.char_count,
        direction = %state.direction,
        "session ended"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("bidipad: {}\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}\n\n{}", USAGE, HELP);
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bidipad: {}", e);
            ExitCode::FAILURE
        }
    }
}
