use crate::runtime::{function::Function, object::Object};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A dynamically typed value.
///
/// Scalars are copied on `clone`; objects, arrays and functions clone a handle
/// to the same underlying storage.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Number(f64),
    Bool(bool),
    String(String),
    Object(Object),
    Array(Array),
    Function(Function),
}

impl Value {
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Bool(b) => *b,
            Value::String(s) => !s.is_empty(),
            Value::Object(_) | Value::Array(_) | Value::Function(_) => true,
        }
    }

    /// Numeric view of the value. Anything without a numeric reading is `NaN`.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Value::Undefined | Value::Object(_) | Value::Array(_) | Value::Function(_) => f64::NAN,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
            Value::Object(_) | Value::Array(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Identity for reference values, equality for scalars.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Renders the value, printing `[Circular]` for any container already
    /// on the path from the top-level value.
    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        path: &mut Vec<*const ()>,
        nested: bool,
    ) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Number(n) => fmt_number(*n, f),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) if nested => write!(f, "'{s}'"),
            Value::String(s) => write!(f, "{s}"),
            Value::Object(object) => {
                if path.contains(&object.addr()) {
                    return write!(f, "[Circular]");
                }
                let fields = object.own_entries();
                if fields.is_empty() {
                    return write!(f, "{{}}");
                }
                path.push(object.addr());
                write!(f, "{{ ")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: ")?;
                    value.render(f, path, true)?;
                }
                path.pop();
                write!(f, " }}")
            }
            Value::Array(array) => array.render(f, path),
            Value::Function(function) => write!(f, "[Function: {}]", function.name()),
        }
    }
}

/// Plain decimal between 1e-6 and 1e21, exponent form outside it.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_infinite() {
        return if n > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        };
    }
    let magnitude = n.abs();
    if n.is_nan() || n == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{n}");
    }
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => write!(f, "{formatted}"),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &mut Vec::new(), false)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(Array::from_vec(items.into_iter().map(Into::into).collect()))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Array {
    items: Rc<RefCell<Vec<Value>>>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    pub fn push(&self, value: Value) {
        self.items.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.items) as *const ()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, path: &mut Vec<*const ()>) -> fmt::Result {
        if path.contains(&self.addr()) {
            return write!(f, "[Circular]");
        }
        let items = self.items.borrow();
        if items.is_empty() {
            return write!(f, "[]");
        }
        path.push(self.addr());
        write!(f, "[ ")?;
        for (idx, value) in items.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            value.render(f, path, true)?;
        }
        path.pop();
        write!(f, " ]")
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &mut Vec::new())
    }
}
