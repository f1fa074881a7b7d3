use super::DemoContext;
use super::higher_order::array_calc;
use crate::console::Console;
use crate::runtime::{arg, receiver_object, Function, Object, RuntimeError, RuntimeResult, Value};

const JAPAN_REFERENCE_YEAR: i64 = 2016;

/// `presentation(style, timeOfDay)` reading name, age and job from whatever
/// receiver it is called with. Unknown styles print nothing.
pub fn presentation(console: &Console) -> Function {
    let out = console.clone();
    Function::new("presentation", move |receiver, args| {
        let this = receiver_object(receiver)?;
        let (name, job, age) = (this.get("name"), this.get("job"), this.get("age"));
        let time_of_day = arg(args, 1);
        match arg(args, 0) {
            Value::String(style) if style == "formal" => out.log(format!(
                "Good {time_of_day}, Ladies and gentlemen! I'm {name}, I'm a {job} and I'm {age} years old."
            )),
            Value::String(style) if style == "friendly" => out.log(format!(
                "Hey! What's up! I'm {name}, I'm a {job} and I'm {age} years old. Have a nice {time_of_day}."
            )),
            other => log::debug!("presentation style {other} has no branch"),
        }
        Ok(Value::Undefined)
    })
}

pub fn john(console: &Console) -> Object {
    Object::from_fields([
        ("name", Value::from("John")),
        ("age", Value::from(33_i64)),
        ("job", Value::from("teacher")),
        ("presentation", Value::from(presentation(console))),
    ])
}

pub fn emily() -> Object {
    Object::from_fields([
        ("name", Value::from("Emily")),
        ("age", Value::from(42_i64)),
        ("job", Value::from("designer")),
    ])
}

/// `isFullAge(limit, el)`, meant to have `limit` fixed up front.
pub fn is_full_age() -> Function {
    Function::new("isFullAge", |_receiver, args| {
        Ok(Value::from(arg(args, 1).as_number() >= arg(args, 0).as_number()))
    })
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let console = &ctx.console;
    let john = john(console);
    let emily = Value::from(emily());
    let present = john
        .get("presentation")
        .as_function()
        .cloned()
        .ok_or_else(|| RuntimeError::NotCallable {
            name: "presentation".into(),
        })?;

    present.call(&emily, &["friendly".into(), "afternoon".into()])?;
    john.invoke("presentation", &["formal".into(), "morning".into()])?;
    present.apply(&emily, vec!["friendly".into(), "afternoon".into()])?;

    let john_friendly = present.bind(Value::from(john.clone()), vec!["friendly".into()]);
    john_friendly.call(&Value::Undefined, &["morning".into()])?;
    john_friendly.call(&Value::Undefined, &["night".into()])?;

    let emily_formal = present.bind(emily, vec!["formal".into()]);
    emily_formal.call(&Value::Undefined, &["afternoon".into()])?;

    let years = [1990_i64, 1965, 1937, 2005, 1998];
    let ages = array_calc(&years, |year| JAPAN_REFERENCE_YEAR - year);
    let full_japan = is_full_age().bind(Value::Undefined, vec![20_i64.into()]);
    let full = array_calc(&ages, |age| full_japan.call(&Value::Undefined, &[(*age).into()]))
        .into_iter()
        .collect::<RuntimeResult<Vec<_>>>()?;

    console.log(Value::from(ages));
    console.log(Value::from(full));
    Ok(())
}
