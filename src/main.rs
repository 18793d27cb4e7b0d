use anyhow::Result;
use marksheet::ui::terminal_guard::install_panic_hook;
use marksheet::{util, App, Config};
use std::fs::{self, OpenOptions};

fn main() -> Result<()> {
    // Log to ~/.marksheet/logs/marksheet.log; stdout belongs to the TUI
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // No color codes in the log file
        .init();

    // Restore the terminal before the default panic output
    install_panic_hook();

    // Creates ~/.marksheet/config.toml on first run
    let config = Config::load();

    let mut app = App::new(config);
    app.run()
}
