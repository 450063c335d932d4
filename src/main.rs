use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, IsTerminal},
    process::ExitCode,
    time::{Duration, Instant},
};

use bizsuite::{
    handle_api_error, show_loading,
    ui::render_pane,
    utils::{self, log_debug},
    Config, DebugLogSink, ErrorInfo, FormData, KenyanEnglish, LineNotifier, Notifier, Pane,
    TerminalAlert,
};

/// Business Suite Pro helpers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/bizsuite-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format an amount as currency (en-KE)
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// ISO 4217 currency code (default from config, else KES)
        #[arg(long)]
        currency: Option<String>,
    },
    /// Format a date or date-time string (en-KE)
    Date {
        input: String,
        /// Fail on unparsable input instead of printing "Invalid Date"
        #[arg(long)]
        strict: bool,
    },
    /// Check required fields of a JSON form object
    Validate {
        /// Comma-separated required field names, checked in order
        #[arg(long, value_delimiter = ',')]
        require: Vec<String>,
        /// Form data as a JSON object
        #[arg(long, default_value = "{}")]
        data: String,
    },
    /// Log an error and show a blocking alert
    Report {
        /// The error's own message (omit for an error without one)
        error: Option<String>,
        /// Context shown before the error message
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Show the loading pane until a key is pressed or the timeout passes
    Loading {
        #[arg(long, default_value_t = 3000)]
        millis: u64,
    },
}

fn main() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse();

    let config = Config::load_or_default(args.config.as_deref())?;

    utils::set_debug_mode(args.debug || config.debug);
    log_debug(&format!("Debug mode enabled, config: {:?}", config));

    let formatter = KenyanEnglish::with_utc_offset_minutes(config.utc_offset_minutes)?;

    match args.command {
        Command::Currency { amount, currency } => {
            let currency = currency.unwrap_or_else(|| config.currency.clone());
            println!(
                "{}",
                bizsuite::format_currency(&formatter, amount, Some(&currency))
            );
        }
        Command::Date { input, strict } => {
            if strict {
                println!("{}", bizsuite::try_format_date(&formatter, &input)?);
            } else {
                println!("{}", bizsuite::format_date(&formatter, &input));
            }
        }
        Command::Validate { require, data } => {
            let form: FormData =
                serde_json::from_str(&data).context("--data must be a JSON object")?;
            let result = bizsuite::validate_form(&form, require.as_slice());
            println!("{}", result.to_json());
            if !result.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Report { error, message } => {
            let error = match error {
                Some(text) => ErrorInfo::new(text),
                None => ErrorInfo::without_message("error without message"),
            };
            let message = message.unwrap_or_else(|| config.default_error_message.clone());

            let mut sink = DebugLogSink::default();
            let mut notifier: Box<dyn Notifier> = if io::stdout().is_terminal() {
                Box::new(TerminalAlert)
            } else {
                log_debug("stdout is not a terminal, using line prompt");
                Box::new(LineNotifier::stdio())
            };
            handle_api_error(&error, Some(&message), &mut sink, notifier.as_mut());
        }
        Command::Loading { millis } => {
            run_loading(Duration::from_millis(millis))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Draw a loading pane on the alternate screen
fn run_loading(timeout: Duration) -> Result<()> {
    let mut pane = Pane::new("Business Suite Pro");
    show_loading(&mut pane);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = animate(&mut terminal, &pane, timeout);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn animate<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    pane: &Pane,
    timeout: Duration,
) -> Result<()> {
    let started = Instant::now();
    let mut tick = 0usize;

    while started.elapsed() < timeout {
        terminal.draw(|f| render_pane(f, f.area(), pane, tick))?;
        tick = tick.wrapping_add(1);

        if event::poll(Duration::from_millis(80))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    log_debug(&format!("Loading pane dismissed with {:?}", key.code));
                    break;
                }
            }
        }
    }

    Ok(())
}
