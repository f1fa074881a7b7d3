pub mod error;
pub mod function;
pub mod object;
pub mod value;

pub use error::{RuntimeError, RuntimeResult};
pub use function::{arg, Function};
pub use object::{receiver_object, Constructor, Object, PropertyDescriptor};
pub use value::{Array, Value};
