// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        /// Use the light theme.
        #[arg(long)]
        light: bool,
    }

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let init_size = [640.0, 360.0];
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(init_size)
            .with_min_inner_size(init_size)
            .with_title("Cardplay"),
        ..Default::default()
    };

    let cli = Cli::parse();

    let config = cardplay_gui::Config {
        theme: if cli.light {
            eframe::egui::Theme::Light
        } else {
            eframe::egui::Theme::Dark
        },
    };

    eframe::run_native(
        "cardplay",
        native_options,
        Box::new(|cc| Ok(Box::new(cardplay_gui::AppFrame::new(config, cc)))),
    )
}

/// The page element the hand and trick regions are drawn into.
#[cfg(target_arch = "wasm32")]
const TABLE_CANVAS_ID: &str = "cardplay-table";

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    // A page without the table canvas cannot show the hand, stop here.
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(TABLE_CANVAS_ID))
        .unwrap_or_else(|| panic!("Missing table canvas element #{TABLE_CANVAS_ID}"))
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap_or_else(|_| panic!("Element #{TABLE_CANVAS_ID} is not a canvas"));

    wasm_bindgen_futures::spawn_local(async move {
        let config = cardplay_gui::Config::default();
        log::info!("Starting cardplay on #{TABLE_CANVAS_ID}");

        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                Default::default(),
                Box::new(|cc| Ok(Box::new(cardplay_gui::AppFrame::new(config, cc)))),
            )
            .await
        {
            log::error!("Failed to start cardplay table: {e:?}");
        }
    });
}
