use clap::{Parser, Subcommand};

use crate::console::Console;
use crate::demos::DemoContext;

#[derive(Parser, Debug)]
#[command(name = "semantics-playground")]
#[command(about = "Runnable lessons on prototypes, closures and function binding")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every demo with its aliases
    List,
    /// Run demos in catalog order (all of them when none are named)
    Run {
        /// Demo keys or aliases, comma separated or repeated
        demos: Vec<String>,
        /// Seed for the random draws in the `iife` demo
        #[arg(long, env = "PLAYGROUND_SEED")]
        seed: Option<u64>,
        /// Record output without printing it
        #[arg(long, short)]
        quiet: bool,
    },
}

/// Run-time options after command line and environment are merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub filters: Vec<String>,
    pub seed: Option<u64>,
    pub echo: bool,
}

impl Settings {
    pub fn new(filters: Vec<String>, seed: Option<u64>, quiet: bool) -> Self {
        Self {
            filters,
            seed,
            echo: !quiet,
        }
    }

    pub fn context(&self) -> DemoContext {
        let console = if self.echo {
            Console::echoing()
        } else {
            Console::buffered()
        };
        DemoContext::new(console, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_flags_become_settings() {
        let cli = Cli::try_parse_from([
            "semantics-playground",
            "run",
            "closures,iife",
            "bind",
            "--seed",
            "7",
            "--quiet",
        ])
        .unwrap();
        let Commands::Run { demos, seed, quiet } = cli.command else {
            panic!("expected run");
        };
        let settings = Settings::new(demos, seed, quiet);
        assert_eq!(
            settings,
            Settings {
                filters: vec!["closures,iife".into(), "bind".into()],
                seed: Some(7),
                echo: false,
            }
        );
    }

    #[test]
    fn seeded_contexts_draw_the_same_values() {
        let settings = Settings::new(Vec::new(), Some(3), true);
        let mut a = settings.context();
        let mut b = settings.context();
        assert_eq!(a.rng.u64(..), b.rng.u64(..));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
