//! Builders for ledger transactions and engine events.

use crate::domain::settings::ChatId;
use crate::domain::wallet::WalletAddress;
use crate::port::inbound::event::{ChatUser, InboundEvent};
use crate::port::outbound::gateway::MessageId;
use crate::port::outbound::ledger::LedgerTransaction;

/// One ETH in wei.
pub const ETH: u128 = 1_000_000_000_000_000_000;

/// An untracked address used as counterparty.
pub const STRANGER: &str = "0x00000000000000000000000000000000000000aa";

/// Outgoing transfer of whole `eth` from `wallet` to `to`.
pub fn outgoing(hash: &str, wallet: &WalletAddress, to: &str, eth: u128) -> LedgerTransaction {
    LedgerTransaction {
        hash: hash.to_string(),
        from: wallet.to_lower_hex(),
        to: to.to_string(),
        value_wei: eth * ETH,
    }
}

/// Incoming transfer of whole `eth` from `from` to `wallet`.
pub fn incoming(hash: &str, from: &str, wallet: &WalletAddress, eth: u128) -> LedgerTransaction {
    LedgerTransaction {
        hash: hash.to_string(),
        from: from.to_string(),
        to: wallet.to_lower_hex(),
        value_wei: eth * ETH,
    }
}

/// A chat message from a user called Ada.
pub fn message(chat_id: ChatId, text: &str) -> InboundEvent {
    InboundEvent::Command {
        chat_id,
        user: ChatUser {
            id: Some(7),
            first_name: Some("Ada".to_string()),
            username: Some("ada".to_string()),
        },
        text: text.to_string(),
    }
}

/// A button press on message 1.
pub fn press(chat_id: ChatId, query_id: &str, token: &str) -> InboundEvent {
    InboundEvent::MenuAction {
        chat_id,
        message_id: MessageId(1),
        query_id: query_id.to_string(),
        token: token.to_string(),
    }
}
