use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Numerical divergence in {quantity} at step {step}")]
    NumericalDivergence { step: usize, quantity: &'static str },
}
