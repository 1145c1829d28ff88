use crate::{
    error::{Error, Result},
    token::{Literal, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "break" => TokenKind::Break,
    "class" => TokenKind::Class,
    "continue" => TokenKind::Continue,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Looks up a reserved word. `None` means the text is an ordinary identifier.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Everything produced by scanning one source text.
///
/// `tokens` always ends with exactly one [`TokenKind::EndOfFile`] token, even
/// when `errors` is non-empty.
#[derive(Debug, Default, PartialEq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

impl Scan {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn scan(src: &str) -> Scan {
    Scanner::new(src).scan_tokens()
}

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    literal: Option<Literal>,
    line: usize,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        while self.src.peek().is_some() {
            let line = self.line;
            let kind = self.next_token_kind();

            let lexeme = std::mem::take(&mut self.lexeme_buffer);
            let literal = self.literal.take();

            if let Some(kind) = kind {
                return Some(kind.map(|kind| Token { kind, lexeme, literal, line }));
            }
        }
        None
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            literal: None,
            line: 1,
        }
    }

    pub fn scan_tokens(mut self) -> Scan {
        let mut scan = Scan::default();
        for scanned in &mut self {
            match scanned {
                Ok(token) => scan.tokens.push(token),
                Err(e) => scan.errors.push(e),
            }
        }
        scan.tokens.push(Token::end_of_file(self.line));
        scan
    }

    fn next_token_kind(&mut self) -> Option<Result<TokenKind>> {
        let next_char = self.advance()?;

        use TokenKind::*;
        match next_char {
            '(' => Some(Ok(LeftParen)),
            ')' => Some(Ok(RightParen)),
            '{' => Some(Ok(LeftBrace)),
            '}' => Some(Ok(RightBrace)),
            '[' => Some(Ok(LeftBracket)),
            ']' => Some(Ok(RightBracket)),
            ',' => Some(Ok(Comma)),
            '.' => Some(Ok(Dot)),
            ';' => Some(Ok(Semicolon)),
            '*' => Some(Ok(Star)),
            '-' => Some(Ok(if self.does_next_match('-') { MinusMinus } else { Minus })),
            '+' => Some(Ok(if self.does_next_match('+') { PlusPlus } else { Plus })),
            '!' => Some(Ok(if self.does_next_match('=') { BangEqual } else { Bang })),
            '=' => Some(Ok(if self.does_next_match('=') { EqualEqual } else { Equal })),
            '<' => Some(Ok(if self.does_next_match('=') { LessEqual } else { Less })),
            '>' => Some(Ok(if self.does_next_match('=') { GreaterEqual } else { Greater })),
            '/' => {
                if self.does_next_match('/') { // is this a comment?
                    self.advance_until_match('\n');
                    None
                } else {
                    Some(Ok(Slash))
                }
            },
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            '"' => Some(self.extract_string()),
            c if c.is_ascii_digit() => Some(self.extract_number()),
            c if can_start_identifier(&c) => Some(Ok(self.extract_identifier())),
            c => Some(Err(Error::lexical(self.line, format!("Unexpected character '{}'.", c)))),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let next = self.src.next()?;
        self.lexeme_buffer.push(next);
        Some(next)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        if self.src.peek() == Some(&c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn is_digit_at(&mut self, n: usize) -> bool {
        match self.src.peek_nth(n) {
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    fn extract_string(&mut self) -> Result<TokenKind> {
        let mut newline_count = 0;
        self.advance_until_match_for_each('"', |c| if c == '\n' { newline_count += 1 });
        self.line += newline_count;
        match self.advance() {
            None => Err(Error::lexical(self.line, "Unterminated string.")),
            Some(_) => { // closing quote, the only thing that stops the loop above early
                let contents = &self.lexeme_buffer[1..self.lexeme_buffer.len() - 1];
                self.literal = Some(Literal::String(contents.to_string()));
                Ok(TokenKind::String)
            },
        }
    }

    fn extract_number(&mut self) -> Result<TokenKind> {
        self.advance_until(|n| !n.is_ascii_digit());

        // The fraction may be empty: `11.` is a number.
        if self.does_next_match('.') {
            self.advance_until(|n| !n.is_ascii_digit());
        }

        if self.is_exponent_next() {
            self.advance();
            if !self.does_next_match('+') {
                self.does_next_match('-');
            }
            self.advance_until(|n| !n.is_ascii_digit());
        }

        match self.lexeme_buffer.parse() {
            Err(_) => Err(Error::internal(
                self.line,
                format!("'{}' was scanned as a number but is not a valid float.", self.lexeme_buffer)
            )),
            Ok(number) => {
                self.literal = Some(Literal::Number(number));
                Ok(TokenKind::Number)
            },
        }
    }

    /// `e`/`E` only starts an exponent when digits follow, optionally after a sign.
    fn is_exponent_next(&mut self) -> bool {
        match self.src.peek().copied() {
            Some('e') | Some('E') => (),
            _ => return false,
        }
        match self.src.peek_nth(1).copied() {
            Some('+') | Some('-') => self.is_digit_at(2),
            _ => self.is_digit_at(1),
        }
    }

    fn extract_identifier(&mut self) -> TokenKind {
        self.advance_until(|n| !is_part_of_valid_identifier(n));
        keyword(self.lexeme_buffer.as_str()).unwrap_or(TokenKind::Identifier)
    }

    fn advance_until_match(&mut self, c: char) {
        self.advance_until(|n| n == &c)
    }

    fn advance_until(&mut self, should_stop: impl Fn(&char) -> bool) {
        self.advance_until_for_each(should_stop, |_| {})
    }

    fn advance_until_match_for_each(
        &mut self,
        c: char,
        f: impl FnMut(char) -> ()
    ) {
        self.advance_until_for_each(|n| n == &c, f);
    }

    fn advance_until_for_each(
        &mut self,
        should_stop: impl Fn(&char) -> bool,
        mut f: impl FnMut(char) -> ()
    ) {
        while let Some(&next) = self.src.peek() {
            if should_stop(&next) {
                break;
            }
            self.advance();
            f(next);
        }
    }
}

fn can_start_identifier(c: &char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '?' | '!')
}
