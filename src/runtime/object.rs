use crate::runtime::{
    error::{RuntimeError, RuntimeResult},
    function::Function,
    value::Value,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug)]
struct Property {
    value: Value,
    writable: bool,
}

#[derive(Default)]
struct ObjectData {
    // insertion ordered, matching how records print
    fields: Vec<(String, Property)>,
    prototype: Option<Object>,
}

impl ObjectData {
    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|(name, _)| name == key)
    }
}

/// Field value plus writability, used by [`Object::create_with`].
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    pub value: Value,
    pub writable: bool,
}

impl PropertyDescriptor {
    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            writable: false,
        }
    }

    pub fn writable(mut self) -> Self {
        self.writable = true;
        self
    }
}

/// A record with its own fields and an optional base record that absent
/// lookups are delegated to.
#[derive(Clone, Default)]
pub struct Object {
    data: Rc<RefCell<ObjectData>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(name, value)` pairs with no base.
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let object = Self::new();
        for (key, value) in fields {
            object.set(key, value);
        }
        object
    }

    /// An empty record delegating to `base`.
    pub fn create(base: &Object) -> Self {
        let object = Self::new();
        object.data.borrow_mut().prototype = Some(base.clone());
        object
    }

    /// A record delegating to `base` whose own fields are all supplied up front.
    pub fn create_with<K: Into<String>>(
        base: &Object,
        descriptors: impl IntoIterator<Item = (K, PropertyDescriptor)>,
    ) -> Self {
        let object = Self::create(base);
        {
            let mut data = object.data.borrow_mut();
            for (key, descriptor) in descriptors {
                let key = key.into();
                let property = Property {
                    value: descriptor.value,
                    writable: descriptor.writable,
                };
                match data.position(&key) {
                    Some(index) => data.fields[index].1 = property,
                    None => data.fields.push((key, property)),
                }
            }
        }
        object
    }

    pub fn prototype(&self) -> Option<Object> {
        self.data.borrow().prototype.clone()
    }

    pub fn set_prototype(&self, base: Option<&Object>) -> RuntimeResult<()> {
        if let Some(base) = base {
            let mut cursor = Some(base.clone());
            while let Some(current) = cursor {
                if current.ptr_eq(self) {
                    return Err(RuntimeError::CyclicPrototype);
                }
                cursor = current.prototype();
            }
        }
        self.data.borrow_mut().prototype = base.cloned();
        Ok(())
    }

    /// Own field first, then each base in turn. Absent everywhere reads as `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        let mut cursor = Some(self.clone());
        let mut depth = 0usize;
        while let Some(current) = cursor {
            {
                let data = current.data.borrow();
                if let Some(index) = data.position(key) {
                    if depth > 0 {
                        log::trace!("`{key}` resolved {depth} link(s) up the prototype chain");
                    }
                    return data.fields[index].1.value.clone();
                }
            }
            cursor = current.prototype();
            depth += 1;
        }
        Value::Undefined
    }

    /// Writes an own field. Fields created read-only keep their value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let mut data = self.data.borrow_mut();
        match data.position(&key) {
            Some(index) => {
                let property = &mut data.fields[index].1;
                if property.writable {
                    property.value = value.into();
                } else {
                    log::debug!("ignored write to read-only field `{key}`");
                }
            }
            None => data.fields.push((
                key,
                Property {
                    value: value.into(),
                    writable: true,
                },
            )),
        }
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.data.borrow().position(key).is_some()
    }

    pub fn own_keys(&self) -> Vec<String> {
        self.data
            .borrow()
            .fields
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn own_entries(&self) -> Vec<(String, Value)> {
        self.data
            .borrow()
            .fields
            .iter()
            .map(|(key, property)| (key.clone(), property.value.clone()))
            .collect()
    }

    /// Looks `method` up along the chain and calls it with `self` as receiver.
    pub fn invoke(&self, method: &str, args: &[Value]) -> RuntimeResult<Value> {
        match self.get(method) {
            Value::Function(function) => function.call(&Value::Object(self.clone()), args),
            _ => Err(RuntimeError::NotCallable {
                name: method.to_string(),
            }),
        }
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.data) as *const ()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("own_keys", &self.own_keys())
            .field("has_prototype", &self.prototype().is_some())
            .finish()
    }
}

/// A constructor routine paired with the prototype its instances delegate to.
#[derive(Clone, Debug)]
pub struct Constructor {
    init: Function,
    prototype: Object,
}

impl Constructor {
    pub fn new(init: Function) -> Self {
        Self {
            init,
            prototype: Object::new(),
        }
    }

    pub fn prototype(&self) -> &Object {
        &self.prototype
    }

    /// Creates an instance delegating to the prototype and runs the initializer on it.
    pub fn construct(&self, args: &[Value]) -> RuntimeResult<Object> {
        let instance = Object::create(&self.prototype);
        self.init.call(&Value::Object(instance.clone()), args)?;
        Ok(instance)
    }
}

/// Receiver as a record, as methods reading `this.field` expect.
pub fn receiver_object(receiver: &Value) -> RuntimeResult<&Object> {
    receiver.as_object().ok_or(RuntimeError::NotAnObject {
        type_name: receiver.type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_through_the_chain() {
        let root = Object::from_fields([("species", "human")]);
        let middle = Object::create(&root);
        middle.set("lastName", "Smith");
        let leaf = Object::create(&middle);
        leaf.set("name", "Mike");

        assert_eq!(leaf.get("name").to_string(), "Mike");
        assert_eq!(leaf.get("lastName").to_string(), "Smith");
        assert_eq!(leaf.get("species").to_string(), "human");
        assert!(leaf.get("missing").is_undefined());
        assert!(!leaf.has_own("lastName"));
    }

    #[test]
    fn base_mutation_is_visible_unless_overridden() {
        let base = Object::from_fields([("lastName", "Smith")]);
        let plain = Object::create(&base);
        let overriding = Object::create(&base);
        overriding.set("lastName", "Jones");

        base.set("lastName", "Doe");

        assert_eq!(plain.get("lastName").to_string(), "Doe");
        assert_eq!(overriding.get("lastName").to_string(), "Jones");
    }

    #[test]
    fn cyclic_prototype_is_rejected() {
        let a = Object::new();
        let b = Object::create(&a);
        assert_eq!(a.set_prototype(Some(&b)), Err(RuntimeError::CyclicPrototype));
        assert_eq!(a.set_prototype(Some(&a)), Err(RuntimeError::CyclicPrototype));
        assert!(a.prototype().is_none());
    }

    #[test]
    fn descriptor_fields_are_read_only_by_default() {
        let base = Object::new();
        let fixed = Object::create_with(
            &base,
            [
                ("name", PropertyDescriptor::value("Mike")),
                ("job", PropertyDescriptor::value("Designer").writable()),
            ],
        );
        fixed.set("name", "Other");
        fixed.set("job", "Driver");
        assert_eq!(fixed.get("name").to_string(), "Mike");
        assert_eq!(fixed.get("job").to_string(), "Driver");
    }

    #[test]
    fn invoking_a_non_function_fails() {
        let object = Object::from_fields([("name", "John")]);
        assert!(matches!(
            object.invoke("name", &[]),
            Err(RuntimeError::NotCallable { name }) if name == "name"
        ));
    }

    #[test]
    fn records_print_own_fields_in_order() {
        let object = Object::from_fields([("name", Value::from("John")), ("age", Value::from(32_i64))]);
        assert_eq!(Value::from(object).to_string(), "{ name: 'John', age: 32 }");
        assert_eq!(Value::from(Object::new()).to_string(), "{}");
    }
}
