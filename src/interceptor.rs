use std::io::{self, Write};

pub const STATUS_LINE: &str = "Program running";

/// Write the three-line interrupt report for `signal`.
///
/// Runs on the main loop thread, never inside the OS signal handler, so it
/// is free to do ordinary buffered I/O.
pub fn report_interrupt<W: Write>(out: &mut W, signal: i32) -> io::Result<()> {
    writeln!(out, "Ctrl-C pressed")?;
    writeln!(out, "Program did'nt quit execution")?;
    writeln!(out, "as sig:{} got re defined", signal)?;
    out.flush()
}
