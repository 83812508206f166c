mod input;
mod render;
mod runtime;
mod ui;

use anyhow::Result;
use clap::Parser;

use spendview_core::config::{CoreConfig, DEFAULT_BACKEND_URL};
use spendview_core::tracing_setup::init_tracing;
use spendview_core::BackendClient;

use crate::runtime::run_app;
use crate::ui::App;

/// Terminal UI for reviewing AI-categorized spend data.
#[derive(Parser)]
#[command(name = "spendview", version, about)]
struct Cli {
    /// Base URL of the categorization backend.
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Restore the terminal before the panic output so it is readable.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));

    let config = CoreConfig {
        backend_url: cli.backend_url,
    };
    let client = BackendClient::new(&config);
    let mut app = App::new();
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app, client).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
