use super::DemoContext;
use crate::runtime::{receiver_object, Object, RuntimeResult, Value};

/// Rebinds its scalar parameter and writes through its record parameter.
/// Only the write is visible to the caller.
pub fn change(a: Value, b: Value) -> RuntimeResult<()> {
    log::trace!("parameter received {a}");
    let a = Value::from(36_i64);
    log::trace!("local parameter now {a}");
    receiver_object(&b)?.set("city", "Paris");
    Ok(())
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let console = &ctx.console;

    let mut a = Value::from(23_i64);
    let b = a.clone();
    a = Value::from(90_i64);
    console.log(&a);
    console.log(&b);

    let obj1 = Object::from_fields([("name", Value::from("John")), ("age", Value::from(32_i64))]);
    let obj2 = obj1.clone();
    obj1.set("age", 66_i64);
    console.log(obj1.get("age"));
    console.log(obj2.get("age"));

    let age = Value::from(27_i64);
    let obj = Value::from(Object::from_fields([("name", "Basil"), ("city", "New York")]));
    change(age.clone(), obj.clone())?;
    console.log(&age);
    console.log(receiver_object(&obj)?.get("city"));
    Ok(())
}
