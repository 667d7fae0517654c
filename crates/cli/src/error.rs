//! Error types for the kamictl CLI

use ble_kamigami_protocol::ProtocolError;
use kamigami_link::LinkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
