// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand and trick view-model.
use ahash::AHashMap;
use anyhow::{Context, Result, bail};
use log::info;

use crate::CardLabel;

/// The cards in the hand at start and after a reset.
const STARTING_HAND: [&str; 7] = ["AS", "KH", "QD", "JC", "10S", "9H", "8D"];

/// A player action on the view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the hand card at the given index.
    Play(usize),
    /// Restore the starting hand.
    Reset,
}

/// A hand card button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardButton {
    /// The card position in the hand.
    pub index: usize,
    /// The button label.
    pub label: CardLabel,
}

/// The visible output for a view-model state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    /// One button for each hand card in hand order.
    pub hand: Vec<CardButton>,
    /// The trick text.
    pub trick: String,
}

/// A player hand and the trick cards played from it.
#[derive(Debug)]
pub struct HandTrick {
    hand: Vec<CardLabel>,
    trick: Vec<CardLabel>,
}

impl Default for HandTrick {
    fn default() -> Self {
        Self {
            hand: Self::starting_hand(),
            trick: Vec::default(),
        }
    }
}

impl HandTrick {
    /// The number of cards in the starting hand.
    pub const HAND_SIZE: usize = STARTING_HAND.len();

    /// The trick text when no cards have been played.
    pub const TRICK_PLACEHOLDER: &'static str = "No cards played";

    /// The separator between trick cards.
    pub const TRICK_SEPARATOR: &'static str = ", ";

    /// The starting hand cards.
    pub fn starting_hand() -> Vec<CardLabel> {
        STARTING_HAND.into_iter().map(CardLabel::from).collect()
    }

    /// The cards in hand.
    pub fn hand(&self) -> &[CardLabel] {
        &self.hand
    }

    /// The played cards in play order.
    pub fn trick(&self) -> &[CardLabel] {
        &self.trick
    }

    /// Checks if all cards have been played.
    pub fn is_hand_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Moves the hand card at `index` to the end of the trick.
    pub fn play(&mut self, index: usize) -> Result<&CardLabel> {
        if index >= self.hand.len() {
            bail!(
                "Invalid card index {index} for a hand of {} cards",
                self.hand.len()
            );
        }

        let card = self.hand.remove(index);
        info!("Played card {card} at index {index}");
        self.trick.push(card);

        debug_assert!(self.check_invariant().is_ok());

        self.trick.last().context("Empty trick after play")
    }

    /// Restores the starting hand and clears the trick.
    pub fn reset(&mut self) {
        self.hand = Self::starting_hand();
        self.trick.clear();
        info!("Reset hand");
    }

    /// Applies a player action.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Play(index) => {
                self.play(index)?;
            }
            Action::Reset => self.reset(),
        }

        Ok(())
    }

    /// Renders the current state.
    pub fn render(&self) -> Render {
        let hand = self
            .hand
            .iter()
            .enumerate()
            .map(|(index, label)| CardButton {
                index,
                label: label.clone(),
            })
            .collect();

        let trick = if self.trick.is_empty() {
            Self::TRICK_PLACEHOLDER.to_string()
        } else {
            self.trick
                .iter()
                .map(CardLabel::as_str)
                .collect::<Vec<_>>()
                .join(Self::TRICK_SEPARATOR)
        };

        Render { hand, trick }
    }

    /// Checks that hand and trick together hold exactly the starting cards.
    pub fn check_invariant(&self) -> Result<()> {
        let mut counts = AHashMap::with_capacity(STARTING_HAND.len());
        for card in STARTING_HAND {
            *counts.entry(card).or_insert(0i32) += 1;
        }

        for card in self.hand.iter().chain(&self.trick) {
            match counts.get_mut(card.as_str()) {
                Some(count) => *count -= 1,
                None => bail!("Unknown card {card}"),
            }
        }

        if let Some((card, count)) = counts.iter().find(|(_, count)| **count != 0) {
            if *count < 0 {
                bail!("Duplicated card {card}");
            } else {
                bail!("Missing card {card}");
            }
        }

        Ok(())
    }
}
