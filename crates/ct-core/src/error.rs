use thiserror::Error;

pub type CtResult<T> = Result<T, CtError>;

#[derive(Error, Debug)]
pub enum CtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
