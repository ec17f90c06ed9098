// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardplay GUI client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod gui;
pub use gui::{App, AppFrame, Config};

pub mod table_view;
pub use table_view::TableView;
