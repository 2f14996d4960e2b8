use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigiSysError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Too many coefficients: got {len}, maximum is {max}")]
    Capacity { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, DigiSysError>;
