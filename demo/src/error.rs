#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{form} round trip returned {actual}, expected {expected}")]
    Mismatch {
        form: &'static str,
        expected: i32,
        actual: i32,
    },
}

pub type Result<T> = std::result::Result<T, SmokeError>;
