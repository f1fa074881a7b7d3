use super::DemoContext;
use crate::console::Console;
use crate::runtime::RuntimeResult;

pub const REFERENCE_YEAR: i64 = 2019;

/// Returns a calculator that keeps `retirement_age` and the message suffix
/// alive after this call has returned.
pub fn retirement(retirement_age: i64) -> impl Fn(i64) -> String {
    let suffix = " years left until retirement.";
    move |year_of_birth| {
        let age = REFERENCE_YEAR - year_of_birth;
        format!("{}{}", retirement_age - age, suffix)
    }
}

/// Captures `job` and decides which question to ask on every call.
pub fn interview_question(console: &Console, job: &str) -> impl Fn(&str) {
    let out = console.clone();
    let job = job.to_string();
    move |name: &str| match job.as_str() {
        "designer" => out.log(format!("{name}, could you please explain what UX design is?")),
        "teacher" => out.log(format!("{name}, what is your experience as a teacher?")),
        _ => out.log(format!("Hello {name}, what do you do?")),
    }
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let console = &ctx.console;

    let retirement_us = retirement(66);
    console.log(retirement_us(1983));
    console.log(retirement(55)(1983));

    let retirement_fr = retirement(60);
    let retirement_bel = retirement(50);
    console.log(retirement_us(1983));
    console.log(retirement_fr(1983));
    console.log(retirement_bel(1983));

    interview_question(console, "teacher")("John");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_years_left_per_country() {
        let mut ctx = DemoContext::buffered(1);
        run(&mut ctx).unwrap();
        assert_eq!(
            ctx.console.lines(),
            vec![
                "30 years left until retirement.",
                "19 years left until retirement.",
                "30 years left until retirement.",
                "24 years left until retirement.",
                "14 years left until retirement.",
                "John, what is your experience as a teacher?",
            ]
        );
    }

    #[test]
    fn factory_calls_do_not_share_captures() {
        let us = retirement(66);
        let first = us(1983);
        let other = retirement(55);
        assert_eq!(other(1983), "19 years left until retirement.");
        assert_eq!(us(1983), first);
        assert_eq!(us(1990), "37 years left until retirement.");
    }

    #[test]
    fn question_closure_branches_on_captured_job() {
        let console = Console::buffered();
        let ask = interview_question(&console, "designer");
        ask("Lola");
        ask("Mike");
        interview_question(&console, "pilot")("Cory");
        assert_eq!(
            console.lines(),
            vec![
                "Lola, could you please explain what UX design is?",
                "Mike, could you please explain what UX design is?",
                "Hello Cory, what do you do?",
            ]
        );
    }
}
