use std::io;

use reportspec_core::ReportError;
use reportspec_core::RequestError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
