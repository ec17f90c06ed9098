// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardplay core types.
//!
//! This crate defines the [HandTrick] view-model that moves cards from a
//! player hand to a trick:
//!
//! ```
//! # use cardplay_core::{Action, HandTrick};
//! let mut table = HandTrick::default();
//! let card = table.play(0).unwrap().clone();
//! assert_eq!(card.as_str(), "AS");
//! assert_eq!(table.hand().len(), 6);
//!
//! table.apply(Action::Reset).unwrap();
//! assert_eq!(table.hand().len(), 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod cards;
pub use cards::CardLabel;

pub mod table;
pub use table::{Action, CardButton, HandTrick, Render};
