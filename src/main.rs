use fetch_dogs::adapters::{FileStorage, ReqwestHttpClient};
use fetch_dogs::api::FetchClient;
use fetch_dogs::app::{App, AppMessage};
use fetch_dogs::cli::{parse_args, run_cli_command, CliCommand};
use fetch_dogs::config::Config;
use fetch_dogs::input::CommandRegistry;
use fetch_dogs::logging::init_logging;
use fetch_dogs::terminal::{setup_panic_hook, TerminalManager};
use fetch_dogs::traits::KeyValueStore;
use fetch_dogs::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Flags that never start the TUI
    let options = match parse_args(std::env::args()) {
        CliCommand::Run(options) => options,
        command => {
            return run_cli_command(&command).unwrap_or(Ok(()));
        }
    };

    color_eyre::install()?;

    let mut config = Config::from_env();
    if let Some(url) = options.api_url {
        config = config.with_api_url(url);
    }
    init_logging(&config)?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let http = ReqwestHttpClient::with_timeout(config.request_timeout)
        .map_err(|e| eyre!("failed to build HTTP client: {}", e))?;
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStorage::in_dir(config.data_dir()));
    let client = Arc::new(FetchClient::new(
        config.api_url.clone(),
        Arc::new(http),
        Arc::clone(&storage),
    ));

    let result = runtime.block_on(async {
        let mut term_manager = TerminalManager::new()?;

        let mut app = App::new(client, storage, options.route);
        if let Ok(size) = term_manager.terminal().size() {
            app.update_terminal_dimensions(size.width, size.height);
        }
        app.start();

        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore()?;
        result
    });

    if let Err(err) = &result {
        tracing::error!("Exiting with error: {:?}", err);
    }
    tracing::info!("fetch-dogs exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps spinners and the snackbar timer moving
        let timeout = tokio::time::sleep(Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
                if app.search.is_loading()
                    || app.favorite_dogs.is_loading()
                    || app.match_flow.is_in_flight()
                    || app.login_form.submitting
                    || app.session.is_loading()
                {
                    // Spinner animation
                    app.mark_dirty();
                }
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        let context = app.build_input_context();
                        if let Some(cmd) = registry.dispatch(key, &context) {
                            tracing::trace!("{:?} -> {:?}", key.code, cmd);
                            app.execute_command(cmd);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!("Terminal event error: {}", err);
                    }
                    None => {
                        // Input closed; nothing more can happen
                        return Ok(());
                    }
                }
            }

            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = message {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
