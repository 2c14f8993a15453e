use std::io::{self, Write};

/// Writes to stdout, treating a closed pipe (`walletview ... | head`) as
/// success.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    ignore_broken_pipe(write_locked(text, false))
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    ignore_broken_pipe(write_locked(text, true))
}

fn write_locked(text: &str, newline: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if newline {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::ignore_broken_pipe;

    #[test]
    fn broken_pipes_are_not_failures() {
        let closed = Err(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(ignore_broken_pipe(closed).is_ok());

        let denied = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(ignore_broken_pipe(denied).is_err());
    }
}
