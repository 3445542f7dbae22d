use sir_core::SirError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match population size {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] SirError),
}

impl SimError {
    /// `true` for invariant violations, which must abort the run.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, SimError::Core(SirError::InvariantViolation(_)))
    }
}

pub type SimResult<T> = Result<T, SimError>;
