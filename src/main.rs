//! `tern` binary: open a file (or an empty buffer) and edit it.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::bounded;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use tern::actor::{InputActor, TermEvent};
use tern::buffer::flush::encode_frame;
use tern::editor::UNNAMED_PANE;
use tern::terminal::{OutputBuffer, Session};
use tern::{Editor, EditorConfig, Error, Framebuffer};

/// How long the input thread waits for an event before checking for shutdown.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "tern", version, about = "A modal terminal text editor")]
struct Args {
    /// File to open. A missing file starts an empty buffer with that name.
    path: Option<PathBuf>,

    /// Hide the line-number gutter.
    #[arg(long)]
    no_line_numbers: bool,

    /// Write logs to this file (filter with RUST_LOG, default `warn`).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(err) = init_tracing(path) {
            eprintln!("tern: cannot open log file {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "exiting");
            eprintln!("tern: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Send logs to `path`. The terminal belongs to the editor, so logging
/// never goes to stdout or stderr.
fn init_tracing(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn load(path: &Path) -> tern::Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(text) => {
            tracing::info!(path = %path.display(), bytes = text.len(), "file loaded");
            Ok(text)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "new file");
            Ok(Vec::new())
        }
        Err(source) => Err(Error::Load {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn run(args: &Args) -> tern::Result<()> {
    let (text, name) = match &args.path {
        Some(path) => (load(path)?, path.display().to_string()),
        None => (Vec::new(), UNNAMED_PANE.to_owned()),
    };
    let config = EditorConfig::default()
        .with_line_numbers(!args.no_line_numbers)
        .with_pane_name(name);
    let mut editor = Editor::with_config(&text, config);

    let session = Session::enter()?;
    let (mut width, mut height) = session.size()?;
    let mut fb = Framebuffer::new(width, height, editor.theme().text);
    let mut output = OutputBuffer::new();

    let (input_tx, input_rx) = bounded::<TermEvent>(1);
    let input = InputActor::spawn(input_tx, INPUT_POLL_TIMEOUT)?;
    let mut stdout = io::stdout();

    let result = loop {
        fb.reset(width, height);
        let area = fb.bounds();
        editor.render(&mut fb, area);

        output.clear();
        let stats = encode_frame(&fb, &mut output);
        tracing::trace!(?stats, "frame flushed");
        if let Err(err) = output.flush_to(&mut stdout) {
            break Err(Error::Io(err));
        }

        match input_rx.recv() {
            Ok(TermEvent::Key(key)) => {
                editor.handle_key(key);
                if editor.should_exit() {
                    break Ok(());
                }
            }
            Ok(TermEvent::Resize {
                width: new_width,
                height: new_height,
            }) => {
                tracing::debug!(width = new_width, height = new_height, "resize");
                width = new_width;
                height = new_height;
            }
            Ok(TermEvent::Error(message)) => break Err(Error::Input(message)),
            Err(_) => break Err(Error::InputClosed),
        }
    };

    drop(input_rx);
    input.join();
    drop(session);
    result
}
