use std::io::{self, Stdout, Write};

use crossterm::style::{PrintStyledContent, Stylize};
use crossterm::QueueableCommand;

use super::elevator_status::ElevatorStatus;

/// Request table printed on the `status` command.
pub struct Debug<W: Write> {
    out: W,
}

impl Debug<Stdout> {
    pub fn new() -> Self {
        Debug { out: io::stdout() }
    }
}

impl Default for Debug<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Debug<W> {
    pub fn with_writer(out: W) -> Self {
        Debug { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn printstatus(&mut self, status: &ElevatorStatus) -> io::Result<()> {
        writeln!(self.out, "+---------------------------------------------------+")?;
        writeln!(self.out, "| PENDING REQUESTS                                  |")?;
        writeln!(self.out, "+------------+------------+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "FLOOR", "HALL UP", "HALL DOWN", "INSIDE")?;
        for floor in (1..=status.num_floors).rev() {
            writeln!(self.out, "+------------+------------+------------+------------+")?;
            let flags = status.get_requests_at_floor(floor);
            let row = format!(
                "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
                floor,
                mark(flags[0]),
                mark(flags[1]),
                mark(flags[2])
            );
            if floor == status.floor {
                self.out.queue(PrintStyledContent(row.bold()))?;
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "{}", row)?;
            }
        }
        writeln!(self.out, "+------------+------------+------------+------------+")?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "FLOOR", status.floor)?;
        writeln!(self.out, "| {0:<10} | {1:<10} |", "DIRECTION", status.motion.as_string())?;
        writeln!(self.out, "+------------+------------+")?;
        self.out.flush()
    }
}

fn mark(pressed: bool) -> &'static str {
    if pressed {
        "x"
    } else {
        ""
    }
}
