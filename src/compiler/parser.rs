//! # Parser
//!
//! Submodule of `compiler`: a Pratt parser that drives the [`Scanner`] and
//! emits bytecode directly into an owned [`Chunk`] as it recognizes each
//! grammar rule. Parse errors are reported as side effects (`had_error`,
//! `panic_mode`) rather than by unwinding, so a single `compile` call always
//! runs the scanner to `Eof` once.

use crate::{
  chunk::{Chunk, OpCode},
  compiler::Precedence,
  scanner::{Scanner, Token, TokenType},
  utils::Init,
  value::Value,
};

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod compile_time_error_handlers;
pub mod emit_methods;
pub mod parse_rules;

type ParseFn = for<'a> fn(&mut Parser<'a>);

/// ## ParseRule
///
/// Prefix parser, infix parser, and the precedence at which the infix
/// parser binds (for the token kind this rule is keyed under).
#[derive(Default, Clone, Copy)]
pub struct ParseRule {
  pub prefix: Option<ParseFn>,
  pub infix: Option<ParseFn>,
  pub precedence: Precedence,
}

impl ParseRule {
  pub fn new(prefix: Option<ParseFn>, infix: Option<ParseFn>, precedence: Precedence) -> Self {
    Self {
      prefix,
      infix,
      precedence,
    }
  }
}

/// Static parse-rule table, keyed by token kind. Every [`TokenType`] has an
/// entry; most non-operator kinds simply carry `(None, None, None)`.
static RULES: Lazy<HashMap<TokenType, ParseRule>> = Lazy::new(|| {
  use TokenType::*;

  // Kept fully qualified (`Precedence::Term`, not a glob import of
  // `Precedence::*`): `Precedence::None` would otherwise shadow
  // `Option::None` for every bare `None` below.
  let none = ParseRule::new(None, None, Precedence::None);
  let mut map = HashMap::new();

  map.insert(LeftParen, ParseRule::new(Some(Parser::grouping), None, Precedence::None));
  map.insert(RightParen, none);
  map.insert(LeftBrace, none);
  map.insert(RightBrace, none);
  map.insert(Comma, none);
  map.insert(Dot, none);
  map.insert(
    Minus,
    ParseRule::new(Some(Parser::unary), Some(Parser::binary), Precedence::Term),
  );
  map.insert(Plus, ParseRule::new(None, Some(Parser::binary), Precedence::Term));
  map.insert(Semicolon, none);
  map.insert(Slash, ParseRule::new(None, Some(Parser::binary), Precedence::Factor));
  map.insert(Star, ParseRule::new(None, Some(Parser::binary), Precedence::Factor));
  map.insert(Bang, ParseRule::new(Some(Parser::unary), None, Precedence::None));
  map.insert(BangEqual, ParseRule::new(None, Some(Parser::binary), Precedence::Equality));
  map.insert(Equal, none);
  map.insert(EqualEqual, ParseRule::new(None, Some(Parser::binary), Precedence::Equality));
  map.insert(Greater, ParseRule::new(None, Some(Parser::binary), Precedence::Comparison));
  map.insert(GreaterEqual, ParseRule::new(None, Some(Parser::binary), Precedence::Comparison));
  map.insert(Less, ParseRule::new(None, Some(Parser::binary), Precedence::Comparison));
  map.insert(LessEqual, ParseRule::new(None, Some(Parser::binary), Precedence::Comparison));
  // `Identifier`/`String` get a registered slot so the table stays total,
  // but no prefix/infix function: variables and string values are not part
  // of this grammar.
  map.insert(Identifier, none);
  map.insert(String, none);
  map.insert(Number, ParseRule::new(Some(Parser::number), None, Precedence::None));
  map.insert(And, none);
  map.insert(Class, none);
  map.insert(Else, none);
  map.insert(False, ParseRule::new(Some(Parser::literal), None, Precedence::None));
  map.insert(For, none);
  map.insert(Fun, none);
  map.insert(If, none);
  map.insert(Nil, ParseRule::new(Some(Parser::literal), None, Precedence::None));
  map.insert(Or, none);
  map.insert(Print, none);
  map.insert(Return, none);
  map.insert(Super, none);
  map.insert(This, none);
  map.insert(True, ParseRule::new(Some(Parser::literal), None, Precedence::None));
  map.insert(Var, none);
  map.insert(While, none);
  map.insert(Error, none);
  map.insert(Eof, none);

  map
});

/// ## Parser
///
/// Owns the chunk it compiles into. Built fresh for every `compile` call and
/// consumed by `into_chunk` once parsing finishes.
pub struct Parser<'a> {
  pub(crate) scanner: Scanner<'a>,
  pub(crate) current: Token<'a>,
  pub(crate) previous: Token<'a>,
  pub(crate) had_error: bool,
  pub(crate) panic_mode: bool,
  pub(crate) chunk: Chunk,
}

impl<'a> Parser<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      scanner: Scanner::init(source),
      current: Token::init(),
      previous: Token::init(),
      had_error: false,
      panic_mode: false,
      chunk: Chunk::init(),
    }
  }

  /// Hand the compiled chunk to the caller, consuming the parser.
  pub fn into_chunk(self) -> Chunk {
    self.chunk
  }
}

impl<'a> Parser<'a> {
  /// This function starts at the current token, then parses any expression
  /// at the given precedence level or higher.
  fn parse_precedence(&mut self, precedence: Precedence) {
    self.advance();
    let prefix_rule = match self.get_rule(self.previous.token_type).prefix {
      Some(rule) => rule,
      None => {
        self.error("Expect expression.");
        return;
      }
    };
    prefix_rule(self);

    while precedence <= self.get_rule(self.current.token_type).precedence {
      self.advance();
      let infix_rule = self.get_rule(self.previous.token_type).infix;
      match infix_rule {
        Some(rule) => rule(self),
        None => break,
      }
    }
  }

  fn get_rule(&self, token_type: TokenType) -> ParseRule {
    *RULES.get(&token_type).unwrap()
  }
}

impl<'a> Parser<'a> {
  /// Ask the scanner for the next token and store it, stashing the old
  /// current token as `previous`. Discards `Error` tokens after reporting
  /// each one at the current position.
  pub(crate) fn advance(&mut self) {
    self.previous = self.current;
    loop {
      self.current = self.scanner.scan_token();
      if self.current.token_type != TokenType::Error {
        break;
      }
      self.error_at_current(self.current.lexeme);
    }
  }

  /// Advance if the current token matches `token_type`; otherwise report
  /// `message` at the current position.
  pub(crate) fn consume(&mut self, token_type: TokenType, message: &str) {
    if self.current.token_type == token_type {
      self.advance();
    } else {
      self.error_at_current(message);
    }
  }

  /// Parse the (only) expression this grammar knows.
  pub(crate) fn expression(&mut self) {
    self.parse_precedence(Precedence::Assignment);
  }
}
