use std::result;
use std::fmt::{self, Display};
use std::io::{self, Write};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { line: usize },
    /// The scanner accepted something it cannot turn into a value.
    /// Seeing one of these means the scanner itself is wrong, not the input.
    Internal { line: usize },
}

#[derive(Debug, PartialEq, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical<S: Into<String>>(line: usize, message: S) -> Error {
        let kind = ErrorKind::Lexical { line };
        Error { kind, message: message.into() }
    }

    pub fn internal<S: Into<String>>(line: usize, message: S) -> Error {
        let kind = ErrorKind::Internal { line };
        Error { kind, message: message.into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> usize {
        match self.kind() {
            ErrorKind::Lexical { line } | ErrorKind::Internal { line } => *line,
        }
    }

    pub fn is_internal(&self) -> bool {
        match self.kind() {
            ErrorKind::Internal { line: _ } => true,
            _ => false,
        }
    }

    fn loc(&self) -> String {
        match self.kind() {
            ErrorKind::Internal { line: _ } => " (internal)".to_string(),
            _ => "".to_string(),
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line(), self.loc(), self.message)
    }
}

/// Writes diagnostics to `out` and remembers whether any were written since
/// the last [`Reporter::reset`].
pub struct Reporter<W> {
    out: W,
    had_error: bool,
}

impl <W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, had_error: false }
    }

    pub fn report(&mut self, line: usize, loc: &str, message: &str) -> io::Result<()> {
        self.had_error = true;
        writeln!(self.out, "[line {}] Error{}: {}", line, loc, message)
    }

    pub fn error(&mut self, line: usize, message: &str) -> io::Result<()> {
        self.report(line, "", message)
    }

    pub fn emit(&mut self, e: &Error) -> io::Result<()> {
        self.report(e.line(), e.loc().as_str(), e.message())
    }

    pub fn emit_all<'e>(&mut self, errors: impl IntoIterator<Item = &'e Error>) -> io::Result<()> {
        for e in errors {
            self.emit(e)?;
        }
        Ok(())
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
