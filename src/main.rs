use trivia_insights::app::App;
use trivia_insights::cli::{parse_args, usage, version_line, CliCommand};
use trivia_insights::config::AppConfig;
use trivia_insights::{logging, ui};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

/// Event loop tick; drives the loading spinner
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle --version / --help before any terminal setup
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", usage());
            return Ok(());
        }
        Ok(CliCommand::RunTui(options)) => options,
        Err(e) => {
            eprintln!("{}\n\n{}", e, usage());
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let mut config = AppConfig::from_env()?;
    config.apply_cli(&options)?;

    match logging::init_logging() {
        Ok(Some(path)) => info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("warning: logging disabled: {}", e),
    }
    info!(
        "Starting {} (api={}, amount={})",
        version_line(),
        config.api_base_url,
        config.amount
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(async {
        let mut app = App::from_config(config);
        let size = terminal.size()?;
        app.update_terminal_dimensions(size.width, size.height);
        app.mount();

        let result = run_app(&mut terminal, &mut app).await;
        app.unmount();
        result
    });

    restore_terminal(&mut terminal)?;
    info!("Exited");
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        // Draw the UI only when something visible changed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed
                    None => app.quit(),
                }
            }

            // Load completions from the background fetch
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
