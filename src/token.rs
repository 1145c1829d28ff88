use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    pub(crate) fn end_of_file(line: usize) -> Token {
        Token { kind: TokenKind::EndOfFile, lexeme: "".into(), literal: None, line }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: ('{}', line {}), ", self.kind, self.lexeme, self.line)?;
        match &self.literal {
            Some(literal) => write!(f, "{}}}", literal),
            None => write!(f, "<nil>}}"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(String),
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{}", s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace, LeftBracket, RightBracket,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,
    MinusMinus, PlusPlus,

    Identifier, String, Number,

    And, Break, Class, Continue, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            LeftBracket => "LEFT_BRACKET",
            RightBracket => "RIGHT_BRACKET",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Slash => "SLASH",
            Star => "STAR",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            MinusMinus => "MINUS_MINUS",
            PlusPlus => "PLUS_PLUS",
            Identifier => "IDENTIFIER",
            String => "STRING",
            Number => "NUMBER",
            And => "AND",
            Break => "BREAK",
            Class => "CLASS",
            Continue => "CONTINUE",
            Else => "ELSE",
            False => "FALSE",
            Fun => "FUN",
            For => "FOR",
            If => "IF",
            Nil => "NIL",
            Or => "OR",
            Print => "PRINT",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Var => "VAR",
            While => "WHILE",
            EndOfFile => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_without_literal() {
        let t = Token { kind: TokenKind::BangEqual, lexeme: "!=".into(), literal: None, line: 5 };
        assert_eq!("{BANG_EQUAL: ('!=', line 5), <nil>}", t.to_string());
    }

    #[test]
    fn string_token() {
        let t = Token {
            kind: TokenKind::String,
            lexeme: "\"hello\"".into(),
            literal: Some(Literal::String("hello".into())),
            line: 3,
        };
        assert_eq!("{STRING: ('\"hello\"', line 3), hello}", t.to_string());
    }

    #[test]
    fn number_tokens() {
        let whole = Token {
            kind: TokenKind::Number,
            lexeme: "1e2".into(),
            literal: Some(Literal::Number(100.0)),
            line: 2,
        };
        assert_eq!("{NUMBER: ('1e2', line 2), 100}", whole.to_string());

        let fraction = Token {
            kind: TokenKind::Number,
            lexeme: "2.5e-1".into(),
            literal: Some(Literal::Number(0.25)),
            line: 2,
        };
        assert_eq!("{NUMBER: ('2.5e-1', line 2), 0.25}", fraction.to_string());
    }

    #[test]
    fn end_of_file_has_empty_lexeme() {
        assert_eq!("{EOF: ('', line 6), <nil>}", Token::end_of_file(6).to_string());
    }
}
