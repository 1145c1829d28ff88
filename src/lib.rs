pub mod error;
pub mod scanner;
pub mod token;

pub use crate::error::{Error, Reporter, Result};
pub use crate::scanner::{scan, Scan, Scanner};
pub use crate::token::{Literal, Token, TokenKind};
