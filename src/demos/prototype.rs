use super::DemoContext;
use crate::console::Console;
use crate::runtime::{arg, receiver_object, Constructor, Function, Object, RuntimeResult, Value};

pub const REFERENCE_YEAR: i64 = 2019;

/// `Person(name, yearOfBirth, job)` with `calculateAge` and a default
/// `lastName` living on the shared prototype.
pub fn person_constructor(console: &Console) -> Constructor {
    let person = Constructor::new(Function::new("Person", |receiver, args| {
        let this = receiver_object(receiver)?;
        this.set("name", arg(args, 0));
        this.set("yearOfBirth", arg(args, 1));
        this.set("job", arg(args, 2));
        Ok(Value::Undefined)
    }));

    let out = console.clone();
    person.prototype().set(
        "calculateAge",
        Function::new("calculateAge", move |receiver, _args| {
            let this = receiver_object(receiver)?;
            let age = REFERENCE_YEAR as f64 - this.get("yearOfBirth").as_number();
            out.log(Value::from(age));
            Ok(Value::from(age))
        }),
    );
    person.prototype().set("lastName", "Smith");
    person
}

pub fn new_person(
    person: &Constructor,
    name: &str,
    year_of_birth: i64,
    job: &str,
) -> RuntimeResult<Object> {
    person.construct(&[name.into(), year_of_birth.into(), job.into()])
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let console = ctx.console.clone();

    // a plain literal: no prototype beyond the default, no shared method
    let john = Object::from_fields([
        ("name", Value::from("John")),
        ("yearOfBirth", Value::from(1983_i64)),
        ("job", Value::from("teacher")),
    ]);
    log::debug!("literal record has own keys {:?}", john.own_keys());

    let person = person_constructor(&console);
    let mike = new_person(&person, "Mike", 1956, "Driver")?;
    let jane = new_person(&person, "Jane", 1387, "Designer")?;
    let tom = new_person(&person, "Tom", 1008, "Dead")?;

    for instance in [&mike, &jane, &tom] {
        instance.invoke("calculateAge", &[])?;
    }
    for instance in [&mike, &jane, &tom] {
        console.log(instance.get("lastName"));
    }
    Ok(())
}
