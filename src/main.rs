use timekeeper::commands::Cli;
use timekeeper::libs::messages::{macros::is_debug_mode, Message};
use timekeeper::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timekeeper=debug")))
            .init();
    }

    if let Err(e) = Cli::menu() {
        msg_error!(Message::CommandFailed(format!("{:#}", e)));
        std::process::exit(1);
    }
}
