use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// Shared, ordered output sink. Clones write into the same buffer, so a
/// closure holding a clone logs in line with its caller.
#[derive(Clone, Debug, Default)]
pub struct Console {
    lines: Rc<RefCell<Vec<String>>>,
    echo: bool,
}

impl Console {
    /// Records lines and prints each one to stdout as it is logged.
    pub fn echoing() -> Self {
        Self {
            lines: Rc::default(),
            echo: true,
        }
    }

    /// Records lines without printing them.
    pub fn buffered() -> Self {
        Self::default()
    }

    pub fn log(&self, line: impl Display) {
        let line = line.to_string();
        if self.echo {
            println!("{line}");
        }
        self.lines.borrow_mut().push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn take_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}
