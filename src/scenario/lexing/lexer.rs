//! The scenario lexer
//!
//!     A lazy, single pass token producer. The lexer borrows the source, keeps a cursor into it
//!     and one token of lookahead. Every request runs the state machine just far enough to
//!     build one token and to decide the state for the following request.
//!
//! States
//!
//!     Standard:   top-level dispatch (labels, text, comments, function names).
//!     ParamStart: right after a function name. Consumes one character; a `(` opens a real
//!                 parameter list, anything else is dropped and the call gets synthetic
//!                 parentheses.
//!     ParamList:  a parameter or the closing `)` is expected.
//!     AfterParam: a `,` or the closing `)` is expected.
//!     FakeEnd:    emit the synthetic `)` of a call written without parentheses.
//!     Finished:   end of input was reached (or an error stopped the pass). Sticky.
//!
//!     Standard -> ParamStart -> ParamList <-> AfterParam -> Standard
//!     Standard -> ParamStart -> FakeEnd -> Standard
//!
//! Known Quirk
//!
//!     The character after a function name is consumed before it is looked at. When it is not
//!     `(` it is silently dropped: `@wait;note` lexes the comment marker away and yields the label
//!     `note`, and `@wait。abc` loses the `。`. Existing scripts depend on this, so it stays.

use tracing::trace;

use super::classification::{is_label_character, is_parameter_terminator, is_text_character};
use super::error::{LexError, MalformedFunction};
use crate::scenario::token::{Token, TokenKind};

/// Which routine builds the next token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Standard,
    ParamStart,
    ParamList,
    AfterParam,
    FakeEnd,
    Finished,
}

/// Pull-based token producer over a borrowed source string.
///
/// Use [`front`](Lexer::front) / [`advance`](Lexer::advance) for range-style access or iterate
/// over `Result<Token, LexError>` items. Iteration stops before `EndOfFile`.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the first unconsumed character. Only ever grows.
    offset: usize,
    state: State,
    current: Option<Token<'a>>,
    error: Option<LexError>,
    iteration_done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            offset: 0,
            state: State::Standard,
            current: None,
            error: None,
            iteration_done: false,
        }
    }

    /// The current token, produced on first access.
    ///
    /// Once `EndOfFile` is reached it is returned forever. Once an error occurred it is returned
    /// forever.
    pub fn front(&mut self) -> Result<&Token<'a>, LexError> {
        let token = match self.current.take() {
            Some(token) => token,
            None => self.fetch()?,
        };
        Ok(&*self.current.insert(token))
    }

    /// Take the current token and move past it.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        match self.current.take() {
            Some(token) => Ok(token),
            None => self.fetch(),
        }
    }

    /// Drop the current token.
    pub fn advance(&mut self) -> Result<(), LexError> {
        self.next_token().map(|_| ())
    }

    /// True once `EndOfFile` has been produced or lexing failed.
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// The unconsumed part of the source.
    ///
    /// The buffered current token, if any, has already been consumed.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn fetch(&mut self) -> Result<Token<'a>, LexError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        match self.produce() {
            Ok(token) => {
                trace!(kind = %token.kind, value = token.value, offset = token.span.start, "token");
                Ok(token)
            }
            Err(err) => {
                trace!(error = %err, offset = err.offset(), "lexing failed");
                self.state = State::Finished;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn produce(&mut self) -> Result<Token<'a>, LexError> {
        match self.state {
            State::Standard => self.standard(),
            State::ParamStart => Ok(self.param_start()),
            State::ParamList => self.param_list(),
            State::AfterParam => self.after_param(),
            State::FakeEnd => {
                self.state = State::Standard;
                Ok(Token::synthetic(TokenKind::FunctionParamEnd, ")", self.offset))
            }
            State::Finished => Ok(Token::end_of_file(self.offset)),
        }
    }

    fn standard(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                self.state = State::Finished;
                return Ok(Token::end_of_file(self.offset));
            };

            return match c {
                c if is_label_character(c) => {
                    Ok(self.take_while(TokenKind::Label, is_label_character))
                }
                '@' => {
                    self.bump();
                    let name = self.take_while(TokenKind::FunctionName, is_label_character);
                    self.state = State::ParamStart;
                    Ok(name)
                }
                ';' => Ok(self.comment()),
                '(' | ')' => {
                    // Stray parentheses outside a call carry no meaning.
                    self.bump();
                    continue;
                }
                ',' => Err(LexError::UnexpectedToken {
                    found: c,
                    offset: self.offset,
                }),
                _ => Ok(self.take_while(TokenKind::Text, is_text_character)),
            };
        }
    }

    fn comment(&mut self) -> Token<'a> {
        self.bump();
        let rest = self.remaining();
        let len = rest.find('\n').unwrap_or(rest.len());
        let token = self.take(TokenKind::Comment, len);
        if self.peek() == Some('\n') {
            self.bump();
        }
        token
    }

    fn param_start(&mut self) -> Token<'a> {
        let at = self.offset;
        match self.bump() {
            Some('(') => {
                self.state = State::ParamList;
                Token::new(
                    TokenKind::FunctionParamStart,
                    &self.source[at..self.offset],
                    at..self.offset,
                )
            }
            dropped => {
                if let Some(c) = dropped {
                    trace!(dropped = ?c, offset = at, "function without parameter list");
                }
                self.state = State::FakeEnd;
                Token::synthetic(TokenKind::FunctionParamStart, "(", at)
            }
        }
    }

    fn param_list(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.malformed(MalformedFunction::MissingParameterEnd)),
            Some(')') => {
                self.state = State::Standard;
                Ok(self.take(TokenKind::FunctionParamEnd, 1))
            }
            Some(_) => {
                let rest = self.remaining();
                match rest.char_indices().find(|&(_, c)| is_parameter_terminator(c)) {
                    None => Err(self.malformed(MalformedFunction::MissingParameterEnd)),
                    Some((0, _)) => Err(LexError::MalformedFunction {
                        reason: MalformedFunction::UnexpectedParameterToken,
                        offset: self.offset,
                    }),
                    Some((len, _)) => {
                        self.state = State::AfterParam;
                        Ok(self.take(TokenKind::FunctionParam, len))
                    }
                }
            }
        }
    }

    fn after_param(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();
        match self.peek() {
            Some(',') => {
                self.state = State::ParamList;
                Ok(self.take(TokenKind::FunctionParamSeparator, 1))
            }
            Some(')') => {
                self.state = State::Standard;
                Ok(self.take(TokenKind::FunctionParamEnd, 1))
            }
            Some(_) => Err(LexError::MalformedFunction {
                reason: MalformedFunction::UnexpectedParameterToken,
                offset: self.offset,
            }),
            None => Err(self.malformed(MalformedFunction::MissingSeparatorOrEnd)),
        }
    }

    /// Error for a call cut off by the end of the source
    fn malformed(&self, reason: MalformedFunction) -> LexError {
        LexError::MalformedFunction {
            reason,
            offset: self.source.len(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.offset += rest.len() - rest.trim_start().len();
    }

    /// Consume `len` bytes as a token of `kind`
    fn take(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.offset;
        self.offset += len;
        Token::new(kind, &self.source[start..self.offset], start..self.offset)
    }

    fn take_while(&mut self, kind: TokenKind, pred: impl Fn(char) -> bool) -> Token<'a> {
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.take(kind, len)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.iteration_done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.iteration_done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.iteration_done = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
