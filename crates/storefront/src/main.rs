use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use storefront::actions::{Action, CatalogAction, UiAction};
use storefront::commands::{help_text, parse_command, ConsoleInput};
use storefront::logger;
use storefront::middleware::{api_middleware::ApiMiddleware, logging::LoggingMiddleware};
use storefront::state::AppState;
use storefront::store::Store;
use storefront::views;
use storefront_client::DemoClient;
use storefront_config::AppConfig;

/// How long the console waits for in-flight requests before rendering anyway
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting storefront, logging to {}", log_file.display());

    let app_config = AppConfig::load();

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(app_config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(
        ApiMiddleware::new(Arc::new(DemoClient::new())).context("Failed to start API runtime")?,
    ));

    store.dispatch(Action::Catalog(CatalogAction::LoadRequested));
    store.wait_idle(REQUEST_TIMEOUT);

    let result = run_console(&mut store);

    log::info!("Exiting storefront");
    result
}

fn run_console(store: &mut Store) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n", views::render(store.state()))?;
    writeln!(stdout, "Type 'help' for commands.")?;

    let mut lines = stdin.lock().lines();
    while store.state().running {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line.context("Failed to read from stdin")?;

        match parse_command(&line, store.state()) {
            Ok(ConsoleInput::Nothing) => continue,
            Ok(ConsoleInput::Help) => {
                writeln!(stdout, "{}", help_text())?;
                continue;
            }
            Ok(ConsoleInput::Dispatch(action)) => {
                // A new command replaces the last error
                if store.state().ui.error.is_some() {
                    store.dispatch(Action::Ui(UiAction::ClearError));
                }
                store.dispatch(action);
                store.wait_idle(REQUEST_TIMEOUT);
            }
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        }

        if store.state().running {
            writeln!(stdout, "{}\n", views::render(store.state()))?;
        }
    }

    Ok(())
}
