use super::DemoContext;
use crate::console::Console;
use crate::runtime::{receiver_object, Function, Object, PropertyDescriptor, RuntimeResult, Value};

const PROTO_REFERENCE_YEAR: i64 = 2016;

pub fn person_proto(console: &Console) -> Object {
    let out = console.clone();
    Object::from_fields([(
        "calculateAge",
        Function::new("calculateAge", move |receiver, _args| {
            let this = receiver_object(receiver)?;
            let age = PROTO_REFERENCE_YEAR as f64 - this.get("yearOfBirth").as_number();
            out.log(Value::from(age));
            Ok(Value::from(age))
        }),
    )])
}

/// Empty record first, fields assigned one at a time.
pub fn fill_in(proto: &Object, name: &str, year_of_birth: i64, job: &str) -> Object {
    let record = Object::create(proto);
    record.set("name", name);
    record.set("yearOfBirth", year_of_birth);
    record.set("job", job);
    record
}

/// All own fields supplied in the same step that links the prototype.
pub fn from_descriptors(proto: &Object, name: &str, year_of_birth: i64, job: &str) -> Object {
    Object::create_with(
        proto,
        [
            ("name", PropertyDescriptor::value(name)),
            ("yearOfBirth", PropertyDescriptor::value(year_of_birth)),
            ("job", PropertyDescriptor::value(job)),
        ],
    )
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let proto = person_proto(&ctx.console);
    let john = fill_in(&proto, "John", 1983, "teacher");
    let mike = from_descriptors(&proto, "Mike", 1955, "Designer");

    john.invoke("calculateAge", &[])?;
    mike.invoke("calculateAge", &[])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_records_reach_the_proto_method() {
        let mut ctx = DemoContext::buffered(1);
        run(&mut ctx).unwrap();
        assert_eq!(ctx.console.lines(), vec!["33", "61"]);
    }

    #[test]
    fn both_construction_styles_look_the_same() {
        let proto = person_proto(&Console::buffered());
        let filled = fill_in(&proto, "Mike", 1955, "Designer");
        let described = from_descriptors(&proto, "Mike", 1955, "Designer");

        assert_eq!(filled.own_keys(), described.own_keys());
        assert!(filled.prototype().unwrap().ptr_eq(&proto));
        assert!(described.prototype().unwrap().ptr_eq(&proto));
        assert_eq!(
            Value::from(filled.clone()).to_string(),
            Value::from(described.clone()).to_string()
        );
        assert!(filled.get("lastName").is_undefined());
        assert!(described.get("lastName").is_undefined());
    }

    #[test]
    fn missing_fields_fall_back_to_the_base() {
        let proto = person_proto(&Console::buffered());
        proto.set("job", "unemployed");
        let partial = Object::create_with(&proto, [("name", PropertyDescriptor::value("Ann"))]);
        assert_eq!(partial.get("job").to_string(), "unemployed");
        assert!(partial.invoke("calculateAge", &[]).unwrap().as_number().is_nan());
    }
}
