pub mod account;
pub mod command;
pub mod error;
pub mod money;
pub mod subscription;
pub mod traits;

pub use account::VaultAccount;
pub use command::Command;
pub use error::Error;
pub use subscription::{Frequency, NewSubscription, Subscription, SubscriptionId};
pub use traits::{
    Clock, CommandStream, OutputSink, RejectionSink, Settlement, SettlementRequest,
};
