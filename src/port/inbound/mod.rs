//! Inbound (driving) ports consumed by inbound adapters.
//!
//! The chat transport and the local console both translate their input into
//! an [`event::InboundEvent`] before handing it to the conversation service.

pub mod event;
