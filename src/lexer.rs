// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tokenizing path data.

use std::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::token::Arg;
use crate::{CommandKind, Expected, ParseError, Token};

/// Split path data into [`Token`]s.
///
/// The iterator is lazy and yields one token per command, including the
/// commands implied by repeating argument groups: after a moveto, extra
/// coordinate pairs are linetos of the same relativity, and after any other
/// command (except closepath) they repeat that command.
///
/// After the first error the iterator is exhausted. Error offsets are byte
/// offsets into `data`.
///
/// ```
/// use pathmark::{tokenize, CommandKind};
/// let kinds: Vec<_> = tokenize("M 10 10 20 20 z")
///     .map(|t| t.unwrap().command())
///     .collect();
/// assert_eq!(kinds, [CommandKind::MoveTo, CommandKind::LineTo, CommandKind::ClosePath]);
/// ```
pub fn tokenize(data: &str) -> Tokens<'_> {
    Tokens {
        data,
        ix: 0,
        last_cmd: None,
        done: false,
    }
}

/// Iterator returned by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    data: &'a str,
    ix: usize,
    last_cmd: Option<(CommandKind, bool)>,
    done: bool,
}

impl<'a> Tokens<'a> {
    /// The input not yet consumed.
    pub fn remainder(&self) -> &'a str {
        &self.data[self.ix..]
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !(c == b' ' || c == 9 || c == 10 || c == 12 || c == 13) {
                break;
            }
            self.ix += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).copied()
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if self.peek() == Some(b',') {
            self.ix += 1;
            self.skip_ws();
        }
    }

    /// Skip a comma after a complete argument group, but only when another
    /// group of the same command follows it.
    fn opt_group_comma(&mut self) {
        self.skip_ws();
        if self.peek() != Some(b',') {
            return;
        }
        let mark = self.ix;
        self.ix += 1;
        self.skip_ws();
        if !self.peek().is_some_and(is_number_start) {
            self.ix = mark;
        }
    }

    fn syntax(&self, offset: usize, expected: Expected) -> ParseError {
        if offset >= self.data.len() {
            ParseError::UnexpectedEnd { offset, expected }
        } else {
            ParseError::Syntax { offset, expected }
        }
    }

    fn get_cmd(&mut self) -> Result<(CommandKind, bool), ParseError> {
        let start = self.ix;
        let c = self.get_byte().ok_or(ParseError::UnexpectedEnd {
            offset: start,
            expected: Expected::Command,
        })?;
        if let Some(cmd) = CommandKind::from_letter(c) {
            return Ok(cmd);
        }
        self.unget();
        match self.last_cmd {
            // Plausible number start
            Some((kind, relative)) if is_number_start(c) => Ok(match kind {
                CommandKind::MoveTo => (CommandKind::LineTo, relative),
                _ => (kind, relative),
            }),
            _ => Err(self.syntax(start, Expected::Command)),
        }
    }

    fn get_number(&mut self) -> Result<f64, ParseError> {
        let start = self.ix;
        let err = |lexer: &Self| lexer.syntax(start, Expected::Number);
        if matches!(self.peek(), Some(b'-' | b'+')) {
            self.ix += 1;
        }
        let mut digit_count = self.digits();
        if self.peek() == Some(b'.') {
            self.ix += 1;
            digit_count += self.digits();
        }
        if digit_count == 0 {
            self.ix = start;
            return Err(err(self));
        }
        // An exponent needs at least one digit; otherwise the `e` is left
        // for the next command.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.ix;
            self.ix += 1;
            if matches!(self.peek(), Some(b'-' | b'+')) {
                self.ix += 1;
            }
            if self.digits() == 0 {
                self.ix = mark;
            }
        }
        match self.data[start..self.ix].parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => {
                self.ix = start;
                Err(ParseError::NonFinite { offset: start })
            }
            Err(_) => {
                self.ix = start;
                Err(err(self))
            }
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.ix;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.ix += 1;
        }
        self.ix - start
    }

    fn get_flag(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Some(b'0') => {
                self.ix += 1;
                Ok(0.)
            }
            Some(b'1') => {
                self.ix += 1;
                Ok(1.)
            }
            _ => Err(self.syntax(self.ix, Expected::Flag)),
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_ws();
        if self.ix >= self.data.len() {
            return Ok(None);
        }
        let (kind, relative) = self.get_cmd()?;
        self.skip_ws();
        let mut args = ArrayVec::<f64, 7>::new();
        for (i, arg) in kind.args().iter().enumerate() {
            if i > 0 {
                self.opt_comma();
            }
            let value = match arg {
                Arg::Number => self.get_number()?,
                Arg::Flag => self.get_flag()?,
            };
            args.push(value);
        }
        self.last_cmd = match kind {
            CommandKind::ClosePath => None,
            _ => Some((kind, relative)),
        };
        if self.last_cmd.is_some() {
            self.opt_group_comma();
        }
        let code = kind.letter(relative) as u8;
        Ok(Token::from_code(code, &args))
    }
}

fn is_number_start(c: u8) -> bool {
    c.is_ascii_digit() || c == b'-' || c == b'+' || c == b'.'
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}

impl FusedIterator for Tokens<'_> {}
