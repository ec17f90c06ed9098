// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand and trick view.
use eframe::egui::*;

use cardplay_core::{Action, HandTrick, Render};

/// Draws the hand buttons, the trick text, and the reset button.
#[derive(Debug)]
pub struct TableView {
    /// Hand buttons screen rects from the last draw, in hand order.
    card_rects: Vec<Rect>,
    /// Reset button screen rect from the last draw.
    reset_rect: Rect,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            card_rects: Vec::new(),
            reset_rect: Rect::NOTHING,
        }
    }
}

impl TableView {
    const TEXT_COLOR: Color32 = Color32::from_rgb(20, 150, 20);
    const TEXT_FONT: FontId = FontId::new(16.0, FontFamily::Monospace);
    const CARD_FONT: FontId = FontId::new(20.0, FontFamily::Monospace);
    const CARD_SIZE: Vec2 = vec2(54.0, 80.0);

    /// Draws the view and returns the action selected by the player if any.
    ///
    /// The whole view is redrawn from `table` at every call.
    pub fn show(&mut self, ctx: &Context, table: &HandTrick) -> Option<Action> {
        let render = table.render();
        let mut action = None;
        self.card_rects.clear();

        Window::new("Cardplay")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                let hand_width = HandTrick::HAND_SIZE as f32 * (Self::CARD_SIZE.x + 8.0);
                ui.set_min_width(hand_width);

                ui.label(RichText::new("Hand").font(Self::TEXT_FONT));
                if let Some(index) = self.paint_hand(ui, &render) {
                    action = Some(Action::Play(index));
                }

                ui.separator();

                ui.label(RichText::new("Trick").font(Self::TEXT_FONT));
                self.paint_trick(ui, &render);

                ui.separator();

                let reset = ui.button(RichText::new("Reset").font(Self::TEXT_FONT));
                self.reset_rect = reset.rect;
                if reset.clicked() {
                    action = Some(Action::Reset);
                }
            });

        action
    }

    fn paint_hand(&mut self, ui: &mut Ui, render: &Render) -> Option<usize> {
        let mut clicked = None;

        ui.horizontal(|ui| {
            // Keep the row height when the hand is empty.
            ui.set_min_height(Self::CARD_SIZE.y);

            for card in &render.hand {
                let text = RichText::new(card.label.as_str()).font(Self::CARD_FONT);
                let btn = Button::new(text)
                    .min_size(Self::CARD_SIZE)
                    .corner_radius(5.0);

                let response = ui.add(btn);
                self.card_rects.push(response.rect);
                if response.clicked() {
                    clicked = Some(card.index);
                }
            }
        });

        clicked
    }

    fn paint_trick(&self, ui: &mut Ui, render: &Render) {
        let text = RichText::new(&render.trick)
            .font(Self::TEXT_FONT)
            .color(Self::TEXT_COLOR);
        ui.label(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{App, Config};

    fn run_frame(
        ctx: &Context,
        view: &mut TableView,
        table: &HandTrick,
        events: Vec<Event>,
    ) -> Option<Action> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };

        let mut action = None;
        let _ = ctx.run(input, |ctx| {
            action = view.show(ctx, table);
        });
        action
    }

    /// Draws a few frames so that the window layout settles.
    fn settle(ctx: &Context, view: &mut TableView, table: &HandTrick) {
        for _ in 0..3 {
            assert_eq!(run_frame(ctx, view, table, Vec::new()), None);
        }
    }

    fn click(
        ctx: &Context,
        view: &mut TableView,
        table: &HandTrick,
        pos: Pos2,
    ) -> Option<Action> {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        };

        let pressed = run_frame(ctx, view, table, vec![Event::PointerMoved(pos), button(true)]);
        let released = run_frame(ctx, view, table, vec![button(false)]);
        pressed.or(released)
    }

    #[test]
    fn show_without_input() {
        let ctx = Context::default();
        let mut view = TableView::default();
        let mut table = HandTrick::default();

        assert_eq!(run_frame(&ctx, &mut view, &table, Vec::new()), None);

        while !table.is_hand_empty() {
            table.play(0).unwrap();
            assert_eq!(run_frame(&ctx, &mut view, &table, Vec::new()), None);
        }
    }

    #[test]
    fn one_button_per_hand_card() {
        let ctx = Context::default();
        let mut view = TableView::default();
        let mut table = HandTrick::default();

        settle(&ctx, &mut view, &table);
        assert_eq!(view.card_rects.len(), HandTrick::HAND_SIZE);

        table.play(3).unwrap();
        settle(&ctx, &mut view, &table);
        assert_eq!(view.card_rects.len(), table.hand().len());

        while !table.is_hand_empty() {
            table.play(0).unwrap();
        }
        settle(&ctx, &mut view, &table);
        assert!(view.card_rects.is_empty());
    }

    #[test]
    fn click_card_and_reset() {
        let ctx = Context::default();
        let mut view = TableView::default();
        let mut app = App::new(Config::default());

        settle(&ctx, &mut view, app.table());
        let pos = view.card_rects[2].center();
        let action = click(&ctx, &mut view, app.table(), pos);
        assert_eq!(action, Some(Action::Play(2)));

        app.handle_action(Action::Play(2)).unwrap();
        assert_eq!(app.table().trick()[0].as_str(), "QD");
        assert_eq!(app.table().hand().len(), HandTrick::HAND_SIZE - 1);

        // The hand shrinks so the buttons move, use the new layout.
        settle(&ctx, &mut view, app.table());
        assert_eq!(view.card_rects.len(), HandTrick::HAND_SIZE - 1);
        let pos = view.card_rects[0].center();
        let action = click(&ctx, &mut view, app.table(), pos);
        assert_eq!(action, Some(Action::Play(0)));

        app.handle_action(Action::Play(0)).unwrap();
        assert_eq!(
            app.table().render().trick,
            format!("QD{}KH", HandTrick::TRICK_SEPARATOR)
        );

        settle(&ctx, &mut view, app.table());
        let pos = view.reset_rect.center();
        let action = click(&ctx, &mut view, app.table(), pos);
        assert_eq!(action, Some(Action::Reset));

        app.handle_action(Action::Reset).unwrap();
        assert_eq!(app.table().hand(), HandTrick::starting_hand());
        assert!(app.table().trick().is_empty());
    }
}
