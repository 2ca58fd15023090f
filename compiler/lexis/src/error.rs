use lexis_pos::PosError;

/// Errors reported by the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{0}` is not an integer")]
    InvalidNumber(String),

    #[error("no token kind is spelled or named `{0}`")]
    UnknownOperator(String),

    #[error("`{0}` is not a comparison operator")]
    NotAComparison(String),

    #[error(transparent)]
    Pos(#[from] PosError),
}
