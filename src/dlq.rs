use crate::domain::{Error, RejectionSink};

/// Surfaces rejected commands as warnings on the log stream.
#[derive(Default, Debug)]
pub struct LogRejections {}

impl RejectionSink for LogRejections {
    fn report(&self, error: &Error) {
        tracing::warn!(%error, "command rejected");
    }
}
