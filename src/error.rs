use thiserror::Error;

pub type CommandResult<T> = Result<T, GreetError>;

#[derive(Debug, Error)]
pub enum GreetError {
    #[error("name must not be empty")]
    EmptyName,
}
