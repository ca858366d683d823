use tracing::info;

use crate::domain::chain::ChainId;
use crate::domain::settings::{ChatId, SettingsRejection, Threshold, UserSettings};

use super::ConversationEngine;

/// Settings changes a transition can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMutation {
    SetThreshold(Threshold),
    Pause,
    Resume,
    ToggleChain(ChainId),
}

impl SettingsMutation {
    /// Apply to `settings`, returning the confirmation notice to show.
    pub fn apply(self, settings: &mut UserSettings) -> Result<String, SettingsRejection> {
        match self {
            Self::SetThreshold(threshold) => {
                settings.set_threshold(threshold);
                Ok(format!(
                    "✅ <b>Threshold updated</b>\nNew threshold: <b>{threshold} ETH</b>. \
                    You'll only see transfers ≥ {threshold} ETH."
                ))
            }
            Self::Pause => {
                settings.set_paused(true);
                Ok("⏸️ <b>Alerts paused</b>\nYou won't receive whale alerts until you resume."
                    .to_string())
            }
            Self::Resume => {
                settings.set_paused(false);
                Ok(format!(
                    "▶️ <b>Alerts resumed</b>\nYou'll receive alerts for transfers ≥ {} ETH.",
                    settings.threshold()
                ))
            }
            Self::ToggleChain(chain) => {
                let selected = settings.toggle_chain(chain)?;
                Ok(if selected {
                    format!("✅ {chain} added")
                } else {
                    format!("⬜ {chain} removed")
                })
            }
        }
    }
}

impl ConversationEngine {
    /// Apply a mutation for `chat_id` and return the stored settings plus the
    /// notice describing the result.
    pub(super) fn mutate(
        &self,
        chat_id: ChatId,
        mutation: SettingsMutation,
    ) -> (UserSettings, String) {
        let (outcome, settings) = self
            .settings
            .update(chat_id, |settings| mutation.apply(settings));

        let notice = match outcome {
            Ok(notice) => {
                info!(chat_id = chat_id.0, ?mutation, "Updated chat settings");
                notice
            }
            Err(rejection) => {
                info!(chat_id = chat_id.0, %rejection, "Rejected settings change");
                format!("⚠️ {rejection}.")
            }
        };
        (settings, notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn threshold_notice_mentions_value() {
        let mut settings = UserSettings::new(ChatId(1));
        let threshold = Threshold::new(dec!(1000)).unwrap();

        let notice = SettingsMutation::SetThreshold(threshold)
            .apply(&mut settings)
            .unwrap();

        assert!(notice.contains("1000 ETH"));
        assert_eq!(settings.threshold(), threshold);
    }

    #[test]
    fn pause_then_resume() {
        let mut settings = UserSettings::new(ChatId(1));

        SettingsMutation::Pause.apply(&mut settings).unwrap();
        assert!(settings.is_paused());

        let notice = SettingsMutation::Resume.apply(&mut settings).unwrap();
        assert!(!settings.is_paused());
        assert!(notice.contains("100 ETH"));
    }

    #[test]
    fn removing_last_chain_is_rejected() {
        let mut settings = UserSettings::new(ChatId(1));

        let result = SettingsMutation::ToggleChain(ChainId::Eth).apply(&mut settings);

        assert_eq!(result, Err(SettingsRejection::LastChain(ChainId::Eth)));
        assert_eq!(settings.chains().len(), 1);
    }
}
