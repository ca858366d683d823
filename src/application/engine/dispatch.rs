use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::action::{parse_command, BotCommand, CommandParseError, MenuAction};
use crate::domain::screen::{RenderedScreen, ScreenId};
use crate::domain::settings::{ChatId, Threshold};
use crate::port::inbound::event::{ChatUser, InboundEvent};

use super::mutate::SettingsMutation;
use super::render::{main_screen, welcome_screen};
use super::{ConversationEngine, FollowUp, Transition};

impl ConversationEngine {
    /// Handle one inbound event.
    ///
    /// Returns `None` when the event is ignored: plain text, unknown
    /// commands, and unknown action tokens all leave state untouched.
    pub fn handle(&self, event: &InboundEvent) -> Option<Transition> {
        match event {
            InboundEvent::Command {
                chat_id,
                user,
                text,
            } => match parse_command(text) {
                Ok(command) => Some(self.handle_command(*chat_id, user, command)),
                Err(CommandParseError::NotACommand) => None,
                Err(err) => {
                    debug!(chat_id = chat_id.0, error = %err, "Ignoring command");
                    None
                }
            },
            InboundEvent::MenuAction { chat_id, token, .. } => {
                let Some(action) = MenuAction::parse(token) else {
                    debug!(chat_id = chat_id.0, token = %token, "Ignoring unknown menu action");
                    return None;
                };
                Some(self.handle_action(*chat_id, action))
            }
        }
    }

    /// Finish the slow part of a transition.
    pub async fn complete(&self, follow_up: FollowUp) -> RenderedScreen {
        match follow_up {
            FollowUp::Transfers { chat_id } => {
                let report = self.aggregator.recent_transfers().await;
                let settings = self.settings.get(chat_id);
                self.transfers_screen(&report, &settings)
            }
        }
    }

    fn handle_command(&self, chat_id: ChatId, user: &ChatUser, command: BotCommand) -> Transition {
        debug!(chat_id = chat_id.0, ?command, "Handling command");
        match command {
            BotCommand::Start => {
                let (settings, _) = self.mutate(chat_id, SettingsMutation::Resume);
                self.transition(
                    chat_id,
                    welcome_screen(&settings, user.display_name()),
                    None,
                )
            }
            BotCommand::Stop => {
                let (settings, _) = self.mutate(chat_id, SettingsMutation::Pause);
                let notice = "🔕 <b>Alerts stopped</b>\nUse /start or Settings to resume.";
                self.transition(chat_id, main_screen(&settings).with_notice(notice), None)
            }
            BotCommand::Help | BotCommand::Info => self.show(chat_id, ScreenId::Info),
            BotCommand::Wallets => self.transition(chat_id, self.top_wallets_screen(), None),
            BotCommand::Settings => self.show(chat_id, ScreenId::Settings),
            BotCommand::Transfers => self.show(chat_id, ScreenId::Transfers),
            BotCommand::Status => self.show(chat_id, ScreenId::Status),
        }
    }

    fn handle_action(&self, chat_id: ChatId, action: MenuAction) -> Transition {
        debug!(chat_id = chat_id.0, ?action, "Handling menu action");
        match action {
            MenuAction::LiveAlerts => self.show(chat_id, ScreenId::Alerts),
            MenuAction::TopWallets => self.show(chat_id, ScreenId::TopWallets),
            MenuAction::RecentTransfers => self.show(chat_id, ScreenId::Transfers),
            MenuAction::Settings | MenuAction::BackSettings => {
                self.show(chat_id, ScreenId::Settings)
            }
            MenuAction::SetThreshold => self.show(chat_id, ScreenId::ThresholdPicker),
            MenuAction::SetChains => self.show(chat_id, ScreenId::ChainPicker),
            MenuAction::BackMain => self.show(chat_id, ScreenId::Main),
            MenuAction::Threshold(value) => match Threshold::new(Decimal::from(value)) {
                Some(threshold) => self.apply(
                    chat_id,
                    SettingsMutation::SetThreshold(threshold),
                    ScreenId::Settings,
                ),
                None => self.show(chat_id, ScreenId::ThresholdPicker),
            },
            MenuAction::PauseAlerts => {
                self.apply(chat_id, SettingsMutation::Pause, ScreenId::Settings)
            }
            MenuAction::ResumeAlerts => {
                self.apply(chat_id, SettingsMutation::Resume, ScreenId::Settings)
            }
            MenuAction::ToggleChain(chain) => self.apply(
                chat_id,
                SettingsMutation::ToggleChain(chain),
                ScreenId::ChainPicker,
            ),
        }
    }

    /// Navigate to `screen` without touching settings.
    fn show(&self, chat_id: ChatId, screen: ScreenId) -> Transition {
        let settings = self.settings.get(chat_id);
        let render = self.render(screen, &settings);
        let follow_up =
            (screen == ScreenId::Transfers).then_some(FollowUp::Transfers { chat_id });
        self.transition(chat_id, render, follow_up)
    }

    /// Apply a mutation, then land on `screen` with its confirmation notice.
    fn apply(&self, chat_id: ChatId, mutation: SettingsMutation, screen: ScreenId) -> Transition {
        let (settings, notice) = self.mutate(chat_id, mutation);
        let render = self.render(screen, &settings).with_notice(&notice);
        self.transition(chat_id, render, None)
    }

    fn transition(
        &self,
        chat_id: ChatId,
        render: RenderedScreen,
        follow_up: Option<FollowUp>,
    ) -> Transition {
        let from = self.enter(chat_id, render.screen);
        debug!(
            chat_id = chat_id.0,
            from = %from,
            to = %render.screen,
            "Screen transition"
        );
        Transition {
            from,
            render,
            follow_up,
        }
    }
}

