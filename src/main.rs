//! Countdown Timer - count down to a picked clock time
//!
//! This is the main entry point for the countdown binary.

use std::sync::Arc;
use tracing::{error, info};

use countdown_timer::{
    clock::SystemClock,
    config::{Config, Timings},
    params::{location::DEFAULT_BASE, Location},
    render::OutputFormat,
    state::{CountdownApp, UiMode},
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_timer={},countdown={}", config.log_level(), config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown v1.0.0");

    let location = Location::parse(config.location.as_deref().unwrap_or(DEFAULT_BASE))?;
    info!("Location: {}", location.url());

    let app = Arc::new(CountdownApp::new(
        Arc::new(SystemClock),
        location,
        Timings::default(),
    ));
    let mut view_rx = app.subscribe();
    let mount = app.mount()?;

    // Picker events from the command line
    if let Some(hour) = &config.hour {
        app.on_hour_change(hour)?;
    }
    if let Some(minute) = &config.minute {
        app.on_minute_change(minute)?;
    }
    if config.help_panel {
        app.toggle_help()?;
    }
    if config.start {
        app.start_countdown()?;
    }

    let format = OutputFormat::from_json_flag(config.json);
    let mut counted_down = false;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    print_snapshot(format, &view_rx.borrow_and_update());

    loop {
        tokio::select! {
            changed = view_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = view_rx.borrow_and_update().clone();
                print_snapshot(format, &snapshot);

                match snapshot.mode {
                    UiMode::ShowingCountdown => counted_down = true,
                    UiMode::ShowingPicker if config.once && counted_down => {
                        info!("Countdown finished, exiting");
                        break;
                    }
                    UiMode::ShowingPicker => {}
                }
            }
            result = &mut shutdown => {
                match result {
                    Ok(()) => info!("Shutdown signal received"),
                    Err(e) => error!("{}", e),
                }
                break;
            }
        }
    }

    mount.unmount();
    info!("Countdown shutdown complete");
    Ok(())
}

fn print_snapshot(format: OutputFormat, snapshot: &countdown_timer::ViewSnapshot) {
    match format.render(snapshot) {
        Ok(line) => println!("{}", line),
        Err(e) => error!("Failed to render view: {}", e),
    }
}
