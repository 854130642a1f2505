use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use bugview::{get_current_repo, ui, update, App, Command, IssueRef, Message};

/// Repository assumed when no flag is given and no git remote is found
const DEFAULT_REPO: (&str, &str) = ("webcompat", "web-bugs");

/// A TUI for reading GitHub issue threads
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Issue number to view
    issue: u64,

    /// Repository in OWNER/NAME form (defaults to the current git remote)
    #[arg(short = 'R', long = "repo")]
    repo: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let target = resolve_target(&cli)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(target)?;
    let size = terminal.size()?;
    update(&mut app, Message::Resize(size.width, size.height));
    app.start_issue_fetch();

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Resolve the issue coordinates from the flag, the git remote, or the default
fn resolve_target(cli: &Cli) -> Result<IssueRef> {
    let (owner, repo) = match &cli.repo {
        Some(spec) => {
            let (owner, repo) = spec
                .split_once('/')
                .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
                .context("--repo expects OWNER/NAME")?;
            (owner.to_string(), repo.to_string())
        }
        None => get_current_repo()
            .unwrap_or_else(|| (DEFAULT_REPO.0.to_string(), DEFAULT_REPO.1.to_string())),
    };

    Ok(IssueRef {
        owner,
        repo,
        number: cli.issue,
    })
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Check for async fetch results
        if let Some(result) = app.check_fetch_result() {
            if let Some(cmd) = update(app, Message::FetchComplete(result)) {
                if handle_command(app, cmd) {
                    return Ok(());
                }
            }
        }

        // Update spinner and expire the flash notice
        if let Some(cmd) = update(app, Message::Tick) {
            if handle_command(app, cmd) {
                return Ok(());
            }
        }

        // Draw UI
        terminal.draw(|f| ui(f, app))?;

        // Handle input
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(msg) = key_to_message(app, key.code, key.modifiers) {
                        if let Some(cmd) = update(app, msg) {
                            if handle_command(app, cmd) {
                                return Ok(());
                            }
                        }
                    }
                }
                Event::Resize(width, height) => {
                    update(app, Message::Resize(width, height));
                }
                _ => {}
            }
        }
    }
}

/// Handle a command returned from update
fn handle_command(app: &mut App, cmd: Command) -> bool {
    match cmd {
        Command::Quit => true,
        Command::FetchIssue => {
            app.start_issue_fetch();
            false
        }
        Command::FetchComments => {
            app.start_comments_fetch();
            false
        }
    }
}

/// Convert a key press to a message based on current app state
fn key_to_message(app: &App, key: KeyCode, modifiers: KeyModifiers) -> Option<Message> {
    // Help popup - any key dismisses
    if app.show_help_popup {
        return Some(Message::DismissHelp);
    }

    // Handle Ctrl+D and Ctrl+U for half-page scrolling
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('d') => Some(Message::HalfPageDown),
            KeyCode::Char('u') => Some(Message::HalfPageUp),
            _ => None,
        };
    }

    match key {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp),
        KeyCode::Char('g') => Some(Message::GoToTop),
        KeyCode::Char('G') => Some(Message::GoToBottom),
        KeyCode::Char('o') => Some(Message::OpenInBrowser),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Esc => {
            if app.flash.is_some() {
                Some(Message::DismissFlash)
            } else {
                None
            }
        }
        _ => None,
    }
}
