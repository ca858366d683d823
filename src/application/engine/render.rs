use rust_decimal::Decimal;

use crate::domain::action::MenuAction;
use crate::domain::chain::ChainId;
use crate::domain::screen::{Button, Keyboard, RenderedScreen, ScreenId};
use crate::domain::settings::{UserSettings, THRESHOLD_CHOICES};
use crate::domain::transfer::{Direction, ReportStatus, TransferReport, UnavailableReason};

use super::{format_uptime, ConversationEngine, TOP_WALLETS_DISPLAY_LIMIT};

const TITLE: &str = "🐋 <b>Whale Tracker</b>";

/// Sample transfers shown when no live data is available.
const DEMO_TRANSFERS: [(&str, &str, u32, Direction); 3] = [
    ("Binance Hot", "Unknown", 500, Direction::Out),
    ("OKX", "DeFi protocol", 1200, Direction::Out),
    ("Unknown", "Kraken", 850, Direction::In),
];

impl ConversationEngine {
    /// Render `screen` for the given settings.
    ///
    /// Pure: the same screen and settings always produce identical output,
    /// except [`ScreenId::Status`] which carries the clock.
    /// [`ScreenId::Transfers`] renders its loading placeholder.
    #[must_use]
    pub fn render(&self, screen: ScreenId, settings: &UserSettings) -> RenderedScreen {
        match screen {
            ScreenId::Main => main_screen(settings),
            ScreenId::Alerts => alerts_screen(settings),
            ScreenId::TopWallets => self.top_wallets_screen(),
            ScreenId::Transfers => transfers_placeholder(),
            ScreenId::Settings => settings_screen(settings),
            ScreenId::ThresholdPicker => threshold_picker(settings),
            ScreenId::ChainPicker => chain_picker(settings),
            ScreenId::Info => info_screen(),
            ScreenId::Status => self.status_screen(),
        }
    }

    pub(super) fn top_wallets_screen(&self) -> RenderedScreen {
        let mut text = String::from("📊 <b>Top Whale Wallets</b>\n\n");
        for (i, wallet) in self
            .catalog
            .list()
            .iter()
            .take(TOP_WALLETS_DISPLAY_LIMIT)
            .enumerate()
        {
            text.push_str(&format!(
                "{}. <b>{}</b>\n   <code>{}</code>\n\n",
                i + 1,
                escape_html(&wallet.label),
                wallet.address.short()
            ));
        }
        text.push_str(&format!(
            "<i>Tracking {} wallets in total</i>",
            self.catalog.count()
        ));

        RenderedScreen::new(ScreenId::TopWallets, text, back_keyboard())
    }

    pub(super) fn transfers_screen(
        &self,
        report: &TransferReport,
        settings: &UserSettings,
    ) -> RenderedScreen {
        let text = match report.status {
            ReportStatus::Unavailable(reason) => demo_transfers_text(reason),
            ReportStatus::Complete | ReportStatus::Partial { .. } => {
                let config = self.aggregator.config();
                live_transfers_text(report, settings, config.sample_wallets, config.max_display)
            }
        };
        RenderedScreen::new(ScreenId::Transfers, text, transfers_keyboard())
    }

    fn status_screen(&self) -> RenderedScreen {
        let explorer = if self.aggregator.is_live() {
            "connected"
        } else {
            "demo mode"
        };
        let text = format!(
            "📈 <b>Bot Status</b>\n\n\
            • Chats with active alerts: {}\n\
            • Known chats: {}\n\
            • Tracked wallets: {}\n\
            • Explorer: {}\n\
            • Uptime: {}\n\
            • Last check: {} UTC",
            self.settings.active_count(),
            self.settings.len(),
            self.catalog.count(),
            explorer,
            format_uptime(self.started_at),
            chrono::Utc::now().format("%H:%M:%S")
        );
        RenderedScreen::new(ScreenId::Status, text, main_keyboard())
    }
}

pub(super) fn main_screen(settings: &UserSettings) -> RenderedScreen {
    let text = format!(
        "{TITLE}\n\n\
        <b>Status:</b>\n\
        • Threshold: {} ETH\n\
        • Alerts: {}\n\
        • Chains: {}\n\n\
        Select an option:",
        settings.threshold(),
        settings.status_label(),
        settings.chains_label()
    );
    RenderedScreen::new(ScreenId::Main, text, main_keyboard())
}

/// The main menu with a greeting on top.
pub(super) fn welcome_screen(settings: &UserSettings, name: Option<&str>) -> RenderedScreen {
    let greeting = match name {
        Some(name) => format!("Welcome, {}!", escape_html(name)),
        None => "Welcome!".to_string(),
    };
    let text = format!(
        "{TITLE}\n\n\
        {greeting}\n\n\
        This bot follows known whale wallets on Ethereum and summarizes \
        their large transfers.\n\n\
        <b>Current settings:</b>\n\
        • Alert threshold: {} ETH\n\
        • Status: {}\n\n\
        Select an option:",
        settings.threshold(),
        settings.status_label()
    );
    RenderedScreen::new(ScreenId::Main, text, main_keyboard())
}

fn info_screen() -> RenderedScreen {
    let text = format!(
        "{TITLE}\n\n\
        Whale tracking for crypto traders.\n\n\
        <b>Features:</b>\n\
        • Recent transfers of exchange wallets\n\
        • Exchange inflow and outflow direction\n\
        • Adjustable alert threshold\n\
        • Chain selection\n\n\
        <b>Commands:</b>\n\
        /start, /transfers, /wallets, /settings, /status, /stop"
    );
    RenderedScreen::new(ScreenId::Info, text, main_keyboard())
}

fn alerts_screen(settings: &UserSettings) -> RenderedScreen {
    let threshold = settings.threshold();
    let text = format!(
        "🐋 <b>Live Whale Alerts</b>\n\n\
        Status: {}\n\
        Threshold: {threshold} ETH\n\n\
        You'll get alerts when:\n\
        • A transfer above {threshold} ETH happens\n\
        • Large deposits hit an exchange\n\
        • Large withdrawals leave an exchange\n\n\
        <i>Alerts are sent as soon as whale movements are detected.</i>",
        settings.status_label()
    );
    RenderedScreen::new(ScreenId::Alerts, text, back_keyboard())
}

fn settings_screen(settings: &UserSettings) -> RenderedScreen {
    let text = format!(
        "⚙️ <b>Settings</b>\n\n\
        <b>Current configuration:</b>\n\
        • Alert threshold: {} ETH\n\
        • Status: {}\n\
        • Chains: {}\n\n\
        Select what to change:",
        settings.threshold(),
        settings.status_label(),
        settings.chains_label()
    );
    let alerts_toggle = if settings.is_paused() {
        Button::new("▶️ Resume Alerts", MenuAction::ResumeAlerts.token())
    } else {
        Button::new("⏸️ Pause Alerts", MenuAction::PauseAlerts.token())
    };
    let keyboard = Keyboard::new()
        .button("🔔 Alert Threshold", MenuAction::SetThreshold.token())
        .button("⛓️ Chain Selection", MenuAction::SetChains.token())
        .row(vec![alerts_toggle])
        .button("« Back", MenuAction::BackMain.token());

    RenderedScreen::new(ScreenId::Settings, text, keyboard)
}

fn threshold_picker(settings: &UserSettings) -> RenderedScreen {
    let current = settings.threshold();
    let text = format!(
        "🔔 <b>Alert Threshold</b>\n\n\
        Current threshold: <b>{current} ETH</b>\n\n\
        You'll only see transfers above this amount.\n\n\
        Select a new threshold:"
    );

    let buttons: Vec<Button> = THRESHOLD_CHOICES
        .iter()
        .map(|&value| {
            let marker = if current.value() == Decimal::from(value) {
                "✅ "
            } else {
                ""
            };
            Button::new(
                format!("{marker}{value} ETH"),
                MenuAction::Threshold(value).token(),
            )
        })
        .collect();

    let mut keyboard = Keyboard::new();
    for pair in buttons.chunks(2) {
        keyboard = keyboard.row(pair.to_vec());
    }
    let keyboard = keyboard.button("« Back to Settings", MenuAction::BackSettings.token());

    RenderedScreen::new(ScreenId::ThresholdPicker, text, keyboard)
}

fn chain_picker(settings: &UserSettings) -> RenderedScreen {
    let text = format!(
        "⛓️ <b>Chain Selection</b>\n\n\
        Active: <b>{}</b>\n\n\
        Tap to toggle chains. Transfer reports currently cover Ethereum.",
        settings.chains_label()
    );

    let keyboard = ChainId::ALL
        .into_iter()
        .fold(Keyboard::new(), |keyboard, chain| {
            let status = if settings.has_chain(chain) { "✅" } else { "⬜" };
            keyboard.button(
                format!("{status} {chain}"),
                MenuAction::ToggleChain(chain).token(),
            )
        })
        .button("« Back to Settings", MenuAction::BackSettings.token());

    RenderedScreen::new(ScreenId::ChainPicker, text, keyboard)
}

fn transfers_placeholder() -> RenderedScreen {
    RenderedScreen::new(
        ScreenId::Transfers,
        "🔄 <b>Fetching recent whale transfers...</b>",
        Keyboard::new(),
    )
}

fn live_transfers_text(
    report: &TransferReport,
    settings: &UserSettings,
    top: usize,
    limit: usize,
) -> String {
    let threshold = settings.threshold();
    let mut text = format!(
        "💰 <b>Recent Whale Transfers</b>\n\
        <i>Top {top} wallets · transfers ≥ {threshold} ETH</i>\n\n"
    );

    let mut shown = 0;
    for event in report.displayed(threshold, limit) {
        shown += 1;
        let (marker, route) = match event.direction {
            Direction::Out => (
                "🔴",
                format!(
                    "{} → {}",
                    escape_html(&event.wallet_label),
                    escape_html(&event.counterparty)
                ),
            ),
            Direction::In => (
                "🟢",
                format!(
                    "{} → {}",
                    escape_html(&event.counterparty),
                    escape_html(&event.wallet_label)
                ),
            ),
        };
        text.push_str(&format!(
            "{marker} <b>{} ETH</b> {}\n   {route}\n   <code>{}</code>\n\n",
            format_eth(event.value_eth),
            event.direction.as_str(),
            escape_html(&event.tx_hash_prefix)
        ));
    }

    if shown == 0 {
        text.push_str(&format!(
            "No transfers ≥ {threshold} ETH in the latest activity of these wallets.\n\n"
        ));
    }

    text.push_str("🟢 = into a tracked wallet · 🔴 = out of a tracked wallet");

    if let ReportStatus::Partial { failed } = report.status {
        text.push_str(&format!(
            "\n\n⚠️ {failed} of {} wallets could not be reached; results are partial.",
            report.sampled
        ));
    }
    text
}

fn demo_transfers_text(reason: UnavailableReason) -> String {
    let notice = match reason {
        UnavailableReason::ConfigurationMissing => "⚠️ Explorer API key not configured.",
        UnavailableReason::NoData => {
            "⚠️ The explorer isn't responding right now. Please try again shortly."
        }
    };
    let mut text = format!(
        "💰 <b>Recent Whale Transfers</b>\n\n\
        {notice}\n\
        <i>Demo mode: showing sample data.</i>\n\n"
    );
    for (from, to, amount, direction) in DEMO_TRANSFERS {
        let marker = match direction {
            Direction::Out => "🔴",
            Direction::In => "🟢",
        };
        text.push_str(&format!("{marker} {from} → {to}: {amount} ETH\n"));
    }
    text
}

fn main_keyboard() -> Keyboard {
    Keyboard::new()
        .button("🐋 Live Whale Alerts", MenuAction::LiveAlerts.token())
        .button("📊 Top Wallets", MenuAction::TopWallets.token())
        .button("💰 Recent Transfers", MenuAction::RecentTransfers.token())
        .button("⚙️ Settings", MenuAction::Settings.token())
}

fn back_keyboard() -> Keyboard {
    Keyboard::new().button("« Back to menu", MenuAction::BackMain.token())
}

fn transfers_keyboard() -> Keyboard {
    Keyboard::new()
        .button("🔄 Refresh", MenuAction::RecentTransfers.token())
        .button("« Back to menu", MenuAction::BackMain.token())
}

/// Two decimal places, trailing zeros kept for alignment.
fn format_eth(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Escape text for Telegram's HTML parse mode.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
