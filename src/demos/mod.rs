mod catalog;
mod runner;

pub mod binding;
pub mod closures;
pub mod construction;
pub mod higher_order;
pub mod iife;
pub mod prototype;
pub mod returning;
pub mod values;

pub use catalog::{Demo, DEMOS};
pub use runner::{
    find_demo, print_demo_list, run_all, run_demo, run_selected, select_demos, write_demo_list,
    CatalogError, DemoFailure,
};

use crate::console::Console;

/// Everything a demo may touch: the output sink and the random source.
pub struct DemoContext {
    pub console: Console,
    pub rng: fastrand::Rng,
}

impl DemoContext {
    pub fn new(console: Console, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { console, rng }
    }

    /// Quiet context with a fixed seed.
    pub fn buffered(seed: u64) -> Self {
        Self::new(Console::buffered(), Some(seed))
    }
}
