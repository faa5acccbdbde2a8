use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::state::State;

pub struct StateFormatter<'a> {
    state: &'a State,
    format: Format,
}

impl<'a> StateFormatter<'a> {
    pub(crate) fn new(state: &'a State, format: Format) -> Self {
        Self { state, format }
    }

    fn write_grid(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // wide enough for the largest tile
        let max = self.state.size() * self.state.size() - 1;
        let width = max.to_string().len();

        self.write_border(width, f)?;
        for row in self.state.rows() {
            write!(f, "|")?;
            for &value in row {
                if value == 0 {
                    write!(f, " {:w$} |", "", w = width)?;
                } else {
                    write!(f, " {:>w$} |", value, w = width)?;
                }
            }
            writeln!(f)?;
            self.write_border(width, f)?;
        }
        Ok(())
    }

    fn write_border(&self, width: usize, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "+")?;
        for _ in 0..self.state.size() {
            write!(f, "{}+", "-".repeat(width + 2))?;
        }
        writeln!(f)
    }

    fn write_compact(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &value) in self.state.cells().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if value == 0 {
                write!(f, " ")?;
            } else {
                write!(f, "{}", value)?;
            }
        }
        write!(f, "]")
    }
}

impl<'a> Display for StateFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Grid => self.write_grid(f),
            Format::Compact => self.write_compact(f),
        }
    }
}

impl<'a> Debug for StateFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
