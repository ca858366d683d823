//! Menu state machine driving chat conversations.
//!
//! The engine maps an inbound command or button press plus the chat's
//! current settings to the next screen, an optional settings mutation, and
//! the render to show. Every transition is synchronous except the transfers
//! screen, which first renders a placeholder and hands back a [`FollowUp`]
//! that [`ConversationEngine::complete`] resolves once aggregation finishes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::screen::{RenderedScreen, ScreenId};
use crate::domain::settings::ChatId;

use super::aggregator::TransferAggregator;
use super::catalog::WalletCatalog;
use super::settings_store::SettingsStore;

mod dispatch;
mod mutate;
mod render;

pub use mutate::SettingsMutation;

/// Number of wallets listed on the top-wallets screen.
const TOP_WALLETS_DISPLAY_LIMIT: usize = 10;

/// Work left to do after the immediate render of a slow transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Aggregate recent transfers and render them for this chat.
    Transfers { chat_id: ChatId },
}

/// Outcome of handling one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: ScreenId,
    /// Shown immediately. For slow transitions this is a placeholder.
    pub render: RenderedScreen,
    pub follow_up: Option<FollowUp>,
}

/// Finite-state menu router over [`ScreenId`]s, one position per chat.
pub struct ConversationEngine {
    settings: Arc<SettingsStore>,
    catalog: Arc<WalletCatalog>,
    aggregator: Arc<TransferAggregator>,
    screens: DashMap<ChatId, ScreenId>,
    started_at: DateTime<Utc>,
}

impl ConversationEngine {
    #[must_use]
    pub fn new(
        settings: Arc<SettingsStore>,
        catalog: Arc<WalletCatalog>,
        aggregator: Arc<TransferAggregator>,
    ) -> Self {
        Self {
            settings,
            catalog,
            aggregator,
            screens: DashMap::new(),
            started_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Screen the chat is currently on. New chats start at [`ScreenId::Main`].
    #[must_use]
    pub fn current_screen(&self, chat_id: ChatId) -> ScreenId {
        self.screens
            .get(&chat_id)
            .map(|screen| *screen)
            .unwrap_or_default()
    }

    fn enter(&self, chat_id: ChatId, screen: ScreenId) -> ScreenId {
        self.screens
            .insert(chat_id, screen)
            .unwrap_or_default()
    }
}

fn format_uptime(started_at: DateTime<Utc>) -> String {
    let elapsed = Utc::now() - started_at;
    let total_seconds = elapsed.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
