// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardplay egui app implementation.
use anyhow::Result;
use eframe::egui::*;
use log::{error, info};

use cardplay_core::{Action, HandTrick};

use crate::TableView;

/// App configuration parameters.
#[derive(Debug)]
pub struct Config {
    /// The UI theme.
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self { theme: Theme::Dark }
    }
}

/// The application state.
#[derive(Debug)]
pub struct App {
    /// The application configuration.
    pub config: Config,
    table: HandTrick,
}

impl App {
    /// Creates the application state with the starting hand.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            table: HandTrick::default(),
        }
    }

    /// The hand and trick view-model.
    pub fn table(&self) -> &HandTrick {
        &self.table
    }

    /// Applies a player action to the view-model.
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        self.table.apply(action)
    }
}

/// The UI main frame.
pub struct AppFrame {
    app: App,
    view: TableView,
}

impl AppFrame {
    /// Creates a new App instance.
    pub fn new(config: Config, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_theme(config.theme);

        info!("Creating new app with config: {config:?}");

        AppFrame {
            app: App::new(config),
            view: TableView::default(),
        }
    }
}

impl eframe::App for AppFrame {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Apply the action after drawing so the next frame redraws from the new state.
        if let Some(action) = self.view.show(ctx, self.app.table()) {
            if let Err(e) = self.app.handle_action(action) {
                error!("Action {action:?} failed: {e}");
            }

            ctx.request_repaint();
        }
    }
}
