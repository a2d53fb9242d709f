//! Main module for scenario library functionality

pub mod config;
pub mod detokenizer;
pub mod formats;
pub mod lexing;
pub mod source;
pub mod token;

pub use lexing::{tokenize, LexError, Lexer};
pub use token::{Token, TokenKind};
