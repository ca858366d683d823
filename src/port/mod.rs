//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the conversation core and the outside
//! world: the ledger explorer it queries, the chat transport it renders
//! into, and the event shapes that drive it.
//!
//! ```text
//!   chat transport ──InboundEvent──▶ ConversationEngine ──▶ MessageGateway
//!                                          │
//!                                          ▼
//!                                  TransferAggregator ──▶ LedgerApi
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::event::{ChatUser, InboundEvent};
pub use outbound::gateway::{MessageGateway, MessageId};
pub use outbound::ledger::{LedgerApi, LedgerTransaction};
