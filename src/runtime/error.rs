use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("`{name}` is not a function")]
    NotCallable { name: String },
    #[error("Expected an object but found {type_name}")]
    NotAnObject { type_name: &'static str },
    #[error("Cyclic prototype value")]
    CyclicPrototype,
}
