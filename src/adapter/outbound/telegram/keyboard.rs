//! Conversion of engine keyboards to Telegram inline markup.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::domain::screen::Keyboard;

/// Inline markup with one callback button per engine button.
#[must_use]
pub fn inline_markup(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| {
                    InlineKeyboardButton::callback(button.label.clone(), button.action.clone())
                })
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}
