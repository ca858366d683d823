//! Recording [`MessageGateway`] for delivery assertions.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::screen::RenderedScreen;
use crate::domain::settings::ChatId;
use crate::error::GatewayError;
use crate::port::outbound::gateway::{MessageGateway, MessageId};

/// One call made on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent {
        chat_id: ChatId,
        message_id: MessageId,
        screen: RenderedScreen,
    },
    Edited {
        chat_id: ChatId,
        message_id: MessageId,
        screen: RenderedScreen,
    },
    Acknowledged {
        query_id: String,
    },
}

/// Thread-safe delivery collector.
#[derive(Clone)]
pub struct RecordingGateway {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    next_id: Arc<AtomicI32>,
    editing: bool,
    failing: Arc<AtomicBool>,
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            deliveries: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI32::new(100)),
            editing: true,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Gateway that reports it cannot edit messages.
    pub fn without_editing() -> Self {
        Self {
            editing: false,
            ..Self::new()
        }
    }

    /// Make every send and edit fail until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }

    /// Screens sent or edited, in order, ignoring acknowledgements.
    pub fn screens(&self) -> Vec<RenderedScreen> {
        self.deliveries
            .lock()
            .iter()
            .filter_map(|delivery| match delivery {
                Delivery::Sent { screen, .. } | Delivery::Edited { screen, .. } => {
                    Some(screen.clone())
                }
                Delivery::Acknowledged { .. } => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.deliveries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.lock().is_empty()
    }

    fn check(&self) -> Result<(), GatewayError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Request("scripted failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageGateway for RecordingGateway {
    async fn send_message(
        &self,
        chat_id: ChatId,
        screen: &RenderedScreen,
    ) -> Result<MessageId, GatewayError> {
        self.check()?;
        let message_id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.deliveries.lock().push(Delivery::Sent {
            chat_id,
            message_id,
            screen: screen.clone(),
        });
        Ok(message_id)
    }

    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        screen: &RenderedScreen,
    ) -> Result<(), GatewayError> {
        self.check()?;
        self.deliveries.lock().push(Delivery::Edited {
            chat_id,
            message_id,
            screen: screen.clone(),
        });
        Ok(())
    }

    async fn acknowledge_action(&self, query_id: &str) -> Result<(), GatewayError> {
        self.deliveries.lock().push(Delivery::Acknowledged {
            query_id: query_id.to_string(),
        });
        Ok(())
    }

    fn supports_editing(&self) -> bool {
        self.editing
    }
}
