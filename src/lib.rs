//! A single-currency vault with recurring subscriptions.
//!
//! [`ledger::Ledger`] holds the balance and the subscription set and is the
//! only thing allowed to mutate them. [`engine::Engine`] feeds it user
//! intents from a [`domain::CommandStream`], waiting on a
//! [`domain::Settlement`] backend before any balance change is applied.

pub mod clock;
pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod ledger;
pub mod logging;
pub mod output;
pub mod settlement;
