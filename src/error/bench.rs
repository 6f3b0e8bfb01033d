use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{label} runner stopped before signalling completion.")]
    RunnerLost { label: &'static str },
}
