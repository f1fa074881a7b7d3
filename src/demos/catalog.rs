use super::{
    binding, closures, construction, higher_order, iife, prototype, returning, values, DemoContext,
};
use crate::runtime::RuntimeResult;

#[derive(Debug)]
pub struct Demo {
    pub key: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub aliases: &'static [&'static str],
    pub run: fn(&mut DemoContext) -> RuntimeResult<()>,
}

impl Demo {
    pub fn all_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key).chain(self.aliases.iter().copied())
    }
}

pub const DEMOS: &[Demo] = &[
    Demo {
        key: "prototype-chain",
        title: "Inheritance and the Prototype Chain",
        category: "Objects",
        summary: "Instances built by a constructor keep their own name, birth year and job, while `calculateAge` and a default `lastName` live once on the shared prototype. Lookups that miss on the instance continue up the chain.",
        aliases: &["prototype", "inheritance", "constructor"],
        run: prototype::run,
    },
    Demo {
        key: "object-create",
        title: "Creating Objects from a Prototype",
        category: "Objects",
        summary: "Two ways to link a record straight to a chosen prototype: create it empty and fill it in, or hand over every field as a descriptor in the same step.",
        aliases: &["create", "object.create", "descriptors"],
        run: construction::run,
    },
    Demo {
        key: "primitives-vs-objects",
        title: "Primitives vs Objects",
        category: "Values",
        summary: "Scalars are copied on assignment and when passed to a function. Records are shared: every name bound to one sees writes made through any other.",
        aliases: &["primitives", "references", "values"],
        run: values::run,
    },
    Demo {
        key: "higher-order-functions",
        title: "Passing Functions as Arguments",
        category: "Functions",
        summary: "One generic `arrayCalc` maps a sequence through any callback: ages from birth years, adult checks, and a heart-rate formula that answers -1 outside ages 18 to 81.",
        aliases: &["first-class", "callbacks", "array-calc"],
        run: higher_order::run,
    },
    Demo {
        key: "returning-functions",
        title: "Functions Returning Functions",
        category: "Functions",
        summary: "`interviewQuestion(job)` returns a job-specific question function, callable right away or stored for later. Unknown jobs get a generic question.",
        aliases: &["factories", "interview"],
        run: returning::run,
    },
    Demo {
        key: "iife",
        title: "Immediately Invoked Function Expressions",
        category: "Functions",
        summary: "A block that runs once where it is written keeps its random score private. A second form takes a `goodLuck` argument that lowers the winning threshold.",
        aliases: &["immediately-invoked", "game"],
        run: iife::run,
    },
    Demo {
        key: "closures",
        title: "Closures",
        category: "Functions",
        summary: "`retirement(age)` returns a calculator that still sees `age` and its message suffix after `retirement` has returned. Each call captures its own copy.",
        aliases: &["closure", "retirement"],
        run: closures::run,
    },
    Demo {
        key: "call-apply-bind",
        title: "Bind, Call and Apply",
        category: "Functions",
        summary: "Borrowing `presentation` from one record for another: `call` with positional arguments, `apply` with an argument list, and `bind` to fix the receiver and leading arguments for later.",
        aliases: &["call", "apply", "bind", "currying"],
        run: binding::run,
    },
];
