mod app;
mod audio;
mod catalog;
mod clipboard;
mod config;
mod error;
mod filter;
mod logging;
mod notify;
mod playback;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
