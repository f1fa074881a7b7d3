use super::DemoContext;
use crate::console::Console;
use crate::runtime::RuntimeResult;

pub type Question = Box<dyn Fn(&str)>;

/// Picks the question-asking closure for `job` once, at creation time.
pub fn interview_question(console: &Console, job: &str) -> Question {
    let out = console.clone();
    match job {
        "designer" => Box::new(move |name: &str| {
            out.log(format!("{name}, could you please explain what UX design is?"))
        }),
        "teacher" => Box::new(move |name: &str| {
            out.log(format!("{name}, what is your experience as a teacher?"))
        }),
        _ => Box::new(move |name: &str| out.log(format!("Hello {name}, what do you do?"))),
    }
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let console = &ctx.console;

    let teacher_question = interview_question(console, "teacher");
    let designer_question = interview_question(console, "designer");
    interview_question(console, "designer")("Lola");
    let cook_question = interview_question(console, "cook");

    teacher_question("John");
    designer_question("Mike");
    cook_question("Cory");
    Ok(())
}
