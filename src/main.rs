use region_selector::adapters::ReqwestHttpClient;
use region_selector::api::RegionApi;
use region_selector::app::{App, AppMessage, SharedRegionApi};
use region_selector::cli::{handle_version_command, parse_args, CliCommand, CliOptions};
use region_selector::mock_api::{serve_mock_api, spawn_mock_api};
use region_selector::startup::{init_file_logging, init_stderr_logging, AppConfig};
use region_selector::terminal::{setup_panic_hook, TerminalManager};
use region_selector::traits::HttpClient;
use region_selector::ui;
use region_selector::ui::viewport::Viewport;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner frame period while the metadata request is in flight.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("region-selector: {}", err);
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Serve(options) => run_mock_server(&options),
        CliCommand::RunTui(options) => run_tui(&options),
    }
}

fn run_mock_server(options: &CliOptions) -> Result<()> {
    color_eyre::install()?;
    init_stderr_logging()?;

    let config = AppConfig::from_env().apply(options);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve_mock_api(config.mock_addr(), config.data_path))
}

fn run_tui(options: &CliOptions) -> Result<()> {
    color_eyre::install()?;
    let log_path = init_file_logging()?;

    let config = AppConfig::from_env().apply(options);
    tracing::info!(
        "Starting region-selector {} (base_url={}, logs={})",
        region_selector::cli::VERSION,
        config.base_url,
        log_path.display()
    );

    let runtime = tokio::runtime::Runtime::new()?;

    // Bind before the terminal switches modes so a busy port is reported
    // on a normal screen.
    let mock_server = if config.embed_mock {
        let (addr, handle) =
            runtime.block_on(spawn_mock_api(config.mock_addr(), config.data_path.clone()))?;
        tracing::info!("Embedded mock API on {}", addr);
        Some(handle)
    } else {
        None
    };

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let viewport = Viewport::detect().unwrap_or_default();

    let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let api: SharedRegionApi = Arc::new(RegionApi::new(client, config.base_url.clone()));

    let result = runtime.block_on(async {
        let mut app = App::new(api, viewport);
        app.mount();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    if let Some(handle) = mock_server {
        handle.abort();
    }

    if let Err(ref err) = result {
        tracing::error!("Event loop failed: {:?}", err);
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(columns, rows))) => app.handle_resize(columns, rows),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!("Terminal event error: {}", err);
                    }
                    None => app.quit(),
                }
            }

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
