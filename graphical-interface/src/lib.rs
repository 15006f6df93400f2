use std::error::Error;

use config::AppConfig;
use logger::{Color, Logger};
use map::RegionSearchApp;
use places_client::HttpPlacesService;
use strings::UiStrings;

pub mod config;
mod map;
mod plugins;
mod state;
pub mod strings;
mod viewport;
mod widgets;

const LOG_NAME: &str = "region_search_map";

/// Opens the map window with the configuration found in the environment.
pub fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    let logger = match Logger::new(&config.log_dir, LOG_NAME) {
        Ok(logger) => Some(logger),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let strings = match &config.strings_path {
        Some(path) => UiStrings::from_csv(path)?,
        None => UiStrings::default(),
    };

    let service = HttpPlacesService::new(config.service.clone())?;

    if let Some(logger) = &logger {
        let _ = logger.info(
            &format!(
                "places service at {}, logging to {}",
                service.api_url(),
                logger.log_file().display()
            ),
            Color::Green,
            true,
        );
    }

    let title = strings.window_title.clone();
    eframe::run_native(
        &title,
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(RegionSearchApp::new(
                cc.egui_ctx.clone(),
                config,
                strings,
                service,
                logger,
            )))
        }),
    )?;

    Ok(())
}
