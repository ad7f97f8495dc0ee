//! Demo site: opens a window with the landing page.

use std::process::ExitCode;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_swatch::{site, SiteConfig};

fn main() -> ExitCode {
    env_logger::init();

    let config = SiteConfig::from_env();
    match config.to_json() {
        Ok(json) => log::info!("site metadata: {json}"),
        Err(err) => log::warn!("could not serialize site metadata: {err}"),
    }
    let title = config.name.clone();

    let app = floem::Application::new();
    let page = match site::page(&config) {
        Ok(page) => page,
        Err(err) => {
            log::error!("cannot build page: {err}");
            return ExitCode::FAILURE;
        }
    };

    app.window(
        move |_| {
            page.on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                floem::quit_app()
            })
        },
        Some(WindowConfig::default().size((820.0, 900.0)).title(title)),
    )
    .run();

    ExitCode::SUCCESS
}
