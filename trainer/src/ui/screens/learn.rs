//! # Learn Screen
//!
//! Flashcards for the active menu. Tap flips the card; a horizontal drag past
//! the threshold (or the buttons below) swipes it away.

use std::time::Instant;

use shared::MenuItem;

use crate::app::{AppLike, AppState, FlashcardDeck, SwipeDirection, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const CARD_SIZE: egui::Vec2 = egui::vec2(320.0, 400.0);
/// Horizontal travel of a card leaving the deck
const EXIT_DISTANCE: f32 = 160.0;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    if forms::render_back_header(ui, "Learn the menu", &theme) {
        app.navigate(View::Home);
        return;
    }

    if state.learn.loading {
        forms::render_loading(ui, "Loading the menu...", &theme);
        return;
    }

    let deck = &state.learn.deck;
    if deck.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            forms::render_hint(ui, "No active dishes on the menu yet.", &theme);
        });
        return;
    }

    if deck.is_complete() {
        render_complete(ui, deck, app, &theme);
        return;
    }

    let Some(card) = deck.current() else {
        return;
    };

    ui.vertical_centered(|ui| {
        forms::render_hint(ui, &deck.progress_label(), &theme);
        ui.add_space(8.0);
        render_card(ui, deck, card, app, &theme);
        ui.add_space(12.0);

        let busy = deck.pending_swipe().is_some();
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 260.0).max(0.0) / 2.0);
            if forms::render_button(ui, "Repeat", Some("↺"), Some(theme.colors.red), !busy).clicked() {
                app.swipe_card(SwipeDirection::Repeat);
            }
            ui.add_space(20.0);
            if forms::render_button(ui, "Know", Some("✔"), Some(theme.colors.green), !busy).clicked() {
                app.swipe_card(SwipeDirection::Know);
            }
        });
    });
}

fn render_card(
    ui: &mut egui::Ui,
    deck: &FlashcardDeck,
    card: &MenuItem,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    let now = Instant::now();
    let (offset, opacity) = match deck.pending_swipe() {
        Some(swipe) => {
            let progress = swipe.progress(now);
            let direction = match swipe.direction {
                SwipeDirection::Know => 1.0,
                SwipeDirection::Repeat => -1.0,
            };
            (direction * progress * EXIT_DISTANCE, 1.0 - progress)
        }
        None => (0.0, 1.0),
    };

    let (slot, _) = ui.allocate_exact_size(CARD_SIZE, egui::Sense::hover());
    let rect = slot.translate(egui::vec2(offset, 0.0));

    let mut card_ui = ui.new_child(egui::UiBuilder::new().max_rect(rect));
    card_ui.multiply_opacity(opacity);
    egui::Frame::new()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(14)
        .inner_margin(egui::Margin::same(14))
        .show(&mut card_ui, |ui| {
            ui.set_min_size(CARD_SIZE - egui::vec2(28.0, 28.0));
            if deck.is_flipped() {
                render_back(ui, card, theme);
            } else {
                render_front(ui, card, theme);
            }
        });

    let response = ui.interact(rect, ui.id().with("flashcard"), egui::Sense::click_and_drag());
    let pointer_x = || {
        response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()))
            .map(|pos| pos.x)
    };

    if response.drag_started() {
        if let Some(x) = pointer_x() {
            app.card_drag_start(x);
        }
    } else if response.drag_stopped() {
        if let Some(x) = pointer_x() {
            app.card_drag_end(x);
        }
    } else if response.clicked() {
        app.flip_card();
    }
}

fn render_front(ui: &mut egui::Ui, card: &MenuItem, theme: &Theme) {
    ui.vertical_centered(|ui| {
        if card.image_url.is_empty() {
            ui.label(egui::RichText::new("🍽").size(96.0));
        } else {
            ui.add(
                egui::Image::new(card.image_url.as_str())
                    .fit_to_exact_size(egui::vec2(280.0, 260.0))
                    .corner_radius(10),
            );
        }
        ui.add_space(10.0);
        ui.label(egui::RichText::new(&card.name).size(22.0).strong().color(theme.normal));
        forms::render_hint(ui, "Tap to see the details", theme);
    });
}

fn render_back(ui: &mut egui::Ui, card: &MenuItem, theme: &Theme) {
    ui.label(egui::RichText::new(&card.name).size(20.0).strong().color(theme.selected));
    ui.add_space(6.0);
    ui.label(&card.description);
    ui.add_space(10.0);

    let ingredients = card.ingredients();
    if !ingredients.is_empty() {
        ui.label(egui::RichText::new("Ingredients").strong());
        ui.label(ingredients.join(", "));
        ui.add_space(6.0);
    }

    let allergens = card.allergens();
    if !allergens.is_empty() {
        ui.label(egui::RichText::new("Allergens").strong().color(theme.warning));
        ui.label(allergens.join(", "));
        ui.add_space(6.0);
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new(format!("{:.0} ₽", card.price)).size(18.0).strong());
}

fn render_complete(ui: &mut egui::Ui, deck: &FlashcardDeck, app: &mut impl AppLike, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(egui::RichText::new("🎉").size(56.0));
        ui.label(egui::RichText::new("All cards reviewed").size(22.0).strong());
        forms::render_hint(ui, &format!("{} dishes in this round", deck.len()), theme);
        ui.add_space(16.0);
        if forms::render_button(ui, "Start over", Some("↻"), Some(theme.selected), true).clicked() {
            app.restart_deck();
        }
    });
}
