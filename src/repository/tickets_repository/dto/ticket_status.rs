use serde::Deserialize;
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,

    /// any status written by the ticket owner that booking does not know about
    #[serde(other)]
    Other,
}
