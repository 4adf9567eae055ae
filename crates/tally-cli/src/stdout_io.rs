use std::io::{self, Write};

/// Writes a line to stdout, treating a closed pipe as success so piping into
/// `head` never surfaces as a failure.
pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    tolerate_broken_pipe(stdout.write_all(text.as_bytes()))?;
    tolerate_broken_pipe(stdout.write_all(b"\n"))?;
    tolerate_broken_pipe(stdout.flush())
}

fn tolerate_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
