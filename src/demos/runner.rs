use std::collections::BTreeSet;
use std::io::{self, Write};

use super::{Demo, DemoContext, DEMOS};
use crate::runtime::RuntimeError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("unknown demo(s): {}", .names.join(", "))]
#[diagnostic(code(playground::catalog::unknown_demo))]
pub struct CatalogError {
    pub names: Vec<String>,
    #[help]
    help: Option<String>,
}

impl CatalogError {
    fn unknown(names: Vec<String>) -> Self {
        let keys: Vec<_> = DEMOS.iter().map(|demo| demo.key).collect();
        Self {
            names,
            help: Some(format!("available demos: {}", keys.join(", "))),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("demo `{key}` failed")]
#[diagnostic(code(playground::demo::failed))]
pub struct DemoFailure {
    pub key: &'static str,
    #[source]
    pub source: RuntimeError,
}

pub fn print_demo_list() -> io::Result<()> {
    write_demo_list(&mut io::stdout().lock())
}

/// One block per demo: key and category, title, summary, then any aliases.
pub fn write_demo_list(out: &mut impl Write) -> io::Result<()> {
    for (idx, demo) in DEMOS.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} ({}) - {}", demo.key, demo.category, demo.title)?;
        writeln!(out, "    {}", demo.summary)?;
        if !demo.aliases.is_empty() {
            writeln!(out, "    also: {}", demo.aliases.join(", "))?;
        }
    }
    Ok(())
}

pub fn find_demo(query: &str) -> Option<&'static Demo> {
    let query = query.trim().to_lowercase();
    DEMOS
        .iter()
        .find(|demo| demo.all_keys().any(|key| key == query))
}

/// Resolves comma-separated filters to demos in catalog order. No filters
/// selects everything.
pub fn select_demos(queries: &[String]) -> Result<Vec<&'static Demo>, CatalogError> {
    let mut unknown = BTreeSet::new();
    let mut wanted = Vec::new();
    for query in queries.iter().flat_map(|raw| raw.split(',')) {
        if query.trim().is_empty() {
            continue;
        }
        match find_demo(query) {
            Some(demo) => wanted.push(demo.key),
            None => {
                unknown.insert(query.trim().to_lowercase());
            }
        }
    }
    if !unknown.is_empty() {
        return Err(CatalogError::unknown(unknown.into_iter().collect()));
    }
    Ok(DEMOS
        .iter()
        .filter(|demo| wanted.is_empty() || wanted.contains(&demo.key))
        .collect())
}

pub fn run_demo(demo: &'static Demo, ctx: &mut DemoContext) -> Result<(), DemoFailure> {
    log::debug!("running demo `{}`", demo.key);
    (demo.run)(ctx).map_err(|source| DemoFailure {
        key: demo.key,
        source,
    })?;
    log::debug!("finished demo `{}`", demo.key);
    Ok(())
}

/// Runs each demo under a `== title ==` header line.
pub fn run_selected(demos: &[&'static Demo], ctx: &mut DemoContext) -> Result<(), DemoFailure> {
    for &demo in demos {
        ctx.console.log(format!("== {} ==", demo.title));
        run_demo(demo, ctx)?;
    }
    Ok(())
}

pub fn run_all(ctx: &mut DemoContext) -> Result<(), DemoFailure> {
    let all: Vec<&'static Demo> = DEMOS.iter().collect();
    run_selected(&all, ctx)
}
