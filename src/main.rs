use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use autotext::app::App;
use autotext::config::load_config;
use autotext::source::{FetchWorker, WordListSource, builtin_suggestions, load_suggestions};

/// Terminal text input with debounced word autocomplete
#[derive(Parser, Debug)]
#[command(name = "autotext", version, about)]
struct Args {
    /// Word list: .toml ([[suggestions]] label/value), .json ([{label, value}]), or one word per line
    words: Option<PathBuf>,

    /// Config file (default: ~/.config/autotext/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial text for the input
    #[arg(long)]
    text: Option<String>,

    /// Print the suggestions for QUERY as `label<TAB>value` lines and exit
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logger();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let words_path = args.words.or(config.source.path.clone());
    let entries = match &words_path {
        Some(path) => load_suggestions(path)?,
        None => builtin_suggestions(),
    };
    let source = WordListSource::new(entries, config.autocomplete.max_results);

    if let Some(query) = args.query {
        for suggestion in source.matches(&query) {
            println!("{}\t{}", suggestion.label, suggestion.value);
        }
        return Ok(());
    }

    let worker = FetchWorker::spawn(Arc::new(source))?;
    let mut app = App::new(&config.autocomplete, worker);
    if let Some(text) = args.text {
        app.set_text(&text);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture, EnableFocusChange)
        .map_err(Into::into)
        .and_then(|()| run(&mut terminal, &mut app));

    let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file in the temp dir; the terminal belongs to the TUI
#[cfg(debug_assertions)]
fn init_logger() {
    use std::io::Write;

    let path = std::env::temp_dir().join("autotext-debug.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
