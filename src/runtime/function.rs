use crate::runtime::{error::RuntimeResult, value::Value};
use std::fmt;
use std::rc::Rc;

type NativeFn = dyn Fn(&Value, &[Value]) -> RuntimeResult<Value>;

/// A callable taking an explicit receiver plus positional arguments.
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    body: Rc<NativeFn>,
}

impl Function {
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> RuntimeResult<Value> + 'static,
    {
        Self {
            name: Rc::from(name),
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes with `receiver` standing in for the owning record.
    pub fn call(&self, receiver: &Value, args: &[Value]) -> RuntimeResult<Value> {
        (self.body)(receiver, args)
    }

    /// Same as [`Function::call`] with the arguments gathered into one sequence.
    pub fn apply(&self, receiver: &Value, args: Vec<Value>) -> RuntimeResult<Value> {
        self.call(receiver, &args)
    }

    /// Fixes the receiver and leading arguments, returning a callable that
    /// takes only the remaining ones.
    ///
    /// The receiver passed to the returned function is ignored. Binding an
    /// already bound function appends further leading arguments.
    pub fn bind(&self, receiver: Value, leading: Vec<Value>) -> Function {
        let target = self.clone();
        let name = format!("bound {}", self.name);
        Function::new(&name, move |_ignored, rest| {
            let mut args = Vec::with_capacity(leading.len() + rest.len());
            args.extend(leading.iter().cloned());
            args.extend(rest.iter().cloned());
            target.call(&receiver, &args)
        })
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name)
    }
}

/// Positional argument, `Undefined` when the caller passed fewer.
pub fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or_default()
}
