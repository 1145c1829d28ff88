use lox_scanner::{
    error::Reporter,
    scanner::Scanner,
};
use std::{
    borrow::Cow,
    env,
    io::{self, Write},
};

const EXIT_USAGE: i32 = 64;
const EXIT_DATA_ERROR: i32 = 65;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run_prompt(&mut stdout, &mut stderr)?,
        2 => run_file(args[1].as_str(), &mut stdout, &mut stderr)?,
        _ => {
            writeln!(stderr, "Usage: lox-scanner [script]")?;
            std::process::exit(EXIT_USAGE);
        },
    };

    Ok(())
}

fn run_file(path: &str, out: &mut io::Stdout, err_out: &mut io::Stderr) -> io::Result<()> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            writeln!(err_out, "Could not open target file: {}", e)?;
            std::process::exit(EXIT_USAGE);
        },
    };

    let mut lox = Lox::new(out, err_out);
    lox.run(source_text(&bytes).as_ref())?;
    match lox.exit_code() {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}

fn run_prompt(out: &mut io::Stdout, err_out: &mut io::Stderr) -> io::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();

    let mut lox = Lox::new(io::stdout(), err_out);

    loop {
        write!(out, "> ")?;
        out.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        lox.run(prompt_line(buffer.as_str()))?;
        lox.reset();
    }

    Ok(())
}

/// Bytes that are not UTF-8 become U+FFFD, which the scanner reports as
/// unexpected characters instead of refusing the whole file.
fn source_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn prompt_line(line: &str) -> &str {
    line.trim_end_matches(&['\n', '\r'][..])
}

struct Lox<Out, ErrOut> {
    out: Out,
    reporter: Reporter<ErrOut>,
}

impl <Out: Write, ErrOut: Write> Lox<Out, ErrOut> {
    fn new(out: Out, err_out: ErrOut) -> Self {
        Self {
            out,
            reporter: Reporter::new(err_out),
        }
    }

    fn run(&mut self, source: &str) -> io::Result<()> {
        let scanned = Scanner::new(source).scan_tokens();
        self.reporter.emit_all(scanned.errors.iter())?;

        for token in scanned.tokens.iter() {
            writeln!(self.out, "{}", token)?;
        }
        self.out.flush()
    }

    fn exit_code(&self) -> i32 {
        if self.reporter.had_error() { EXIT_DATA_ERROR } else { 0 }
    }

    fn reset(&mut self) {
        self.reporter.reset();
    }
}
