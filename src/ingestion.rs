use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::money::parse_amount;
use crate::domain::traits::CommandStream;
use crate::domain::{Command, Error, Frequency, NewSubscription, SubscriptionId};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
///
/// Amounts stay as text so a malformed number can be reported as the
/// domain error for the command it belongs to.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    frequency: Option<String>,
    #[serde(default)]
    recipient: Option<String>,
    #[serde(default)]
    id: Option<u64>,
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let amount = row.amount.as_deref().unwrap_or_default();

        match row.kind.to_ascii_lowercase().as_str() {
            "deposit" => Ok(Command::Deposit {
                amount: parse_amount(amount)?,
            }),
            "withdraw" | "withdrawal" => Ok(Command::Withdraw {
                amount: parse_amount(amount)?,
            }),
            "add" | "add_subscription" => {
                let amount = parse_amount(amount).map_err(|e| match e {
                    Error::InvalidAmount(msg) => Error::InvalidInput(msg),
                    other => other,
                })?;
                let frequency = match row.frequency.as_deref() {
                    Some(f) if !f.is_empty() => f.parse::<Frequency>()?,
                    _ => Frequency::Monthly,
                };

                let mut request =
                    NewSubscription::new(row.name.unwrap_or_default(), amount, frequency);
                request.recipient = row.recipient;
                Ok(Command::AddSubscription(request))
            }
            "toggle" => {
                let id = row.id.ok_or_else(|| {
                    Error::Ingestion("toggle requires a subscription id".to_string())
                })?;
                Ok(Command::ToggleSubscription {
                    id: SubscriptionId(id),
                })
            }
            other => Err(Error::Ingestion(format!("Invalid command type: {}", other))),
        }
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvReader<R> {
    type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::CmdStream {
        let Some(reader) = self.reader.take() else {
            // Already consumed.
            return Box::pin(stream::empty::<Result<Command, Error>>());
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
