//! # Compiler
//!
//! Drives the scanner and a single-pass Pratt parser straight into bytecode
//! for one [`Chunk`]. There is no intermediate AST: every parse rule emits
//! bytes as soon as it has enough context to know what they are.

use crate::{
  chunk::Chunk,
  compiler::parser::Parser,
  debug::Debug,
  scanner::TokenType,
};

pub mod parser;

/// ## Precedence
///
/// Precedence levels, low to high. `Assignment` through `Primary` are kept
/// even though this grammar's only populated nonzero levels are `Term`,
/// `Factor`, `Equality`, and `Comparison` — the table stays total over the
/// same ladder a fuller grammar would use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
  #[default]
  None,
  Assignment,
  Or,
  And,
  Equality,
  Comparison,
  Term,
  Factor,
  Unary,
  Call,
  Primary,
}

impl Precedence {
  /// The next-higher precedence level, used by `binary` to parse its
  /// right operand left-associatively. Saturates at `Primary`.
  pub fn next(self) -> Self {
    match self {
      Precedence::None => Precedence::Assignment,
      Precedence::Assignment => Precedence::Or,
      Precedence::Or => Precedence::And,
      Precedence::And => Precedence::Equality,
      Precedence::Equality => Precedence::Comparison,
      Precedence::Comparison => Precedence::Term,
      Precedence::Term => Precedence::Factor,
      Precedence::Factor => Precedence::Unary,
      Precedence::Unary => Precedence::Call,
      Precedence::Call | Precedence::Primary => Precedence::Primary,
    }
  }
}

/// Compile `source` into `chunk`, returning whether compilation succeeded.
///
/// Parse errors are reported to stderr as they are discovered, but
/// compilation always runs to `Eof` rather than aborting on the first one
/// (panic-mode suppresses cascading reports in the meantime).
pub fn compile(source: &str, chunk: &mut Chunk, trace: bool) -> bool {
  let mut parser = Parser::new(source);

  parser.advance();
  parser.expression();
  parser.consume(TokenType::Eof, "Expect end of expression.");
  parser.end_compiler();

  let had_error = parser.had_error;
  *chunk = parser.into_chunk();

  if trace && !had_error {
    chunk.disassemble("code");
  }

  !had_error
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chunk::OpCode;

  fn compiled(source: &str) -> (Chunk, bool) {
    let mut chunk = Chunk::init();
    let ok = compile(source, &mut chunk, false);
    (chunk, ok)
  }

  #[test]
  fn precedence_multiplies_before_adding() {
    // 1 + 2 * 3
    let (chunk, ok) = compiled("1 + 2 * 3");
    assert!(ok);
    assert_eq!(
      chunk.code,
      vec![
        OpCode::Constant as u8,
        0,
        OpCode::Constant as u8,
        1,
        OpCode::Constant as u8,
        2,
        OpCode::Multiply as u8,
        OpCode::Add as u8,
        OpCode::Return as u8,
      ]
    );
  }

  #[test]
  fn grouping_overrides_precedence() {
    // (1 + 2) * 3
    let (chunk, ok) = compiled("(1 + 2) * 3");
    assert!(ok);
    assert_eq!(
      chunk.code,
      vec![
        OpCode::Constant as u8,
        0,
        OpCode::Constant as u8,
        1,
        OpCode::Add as u8,
        OpCode::Constant as u8,
        2,
        OpCode::Multiply as u8,
        OpCode::Return as u8,
      ]
    );
  }

  #[test]
  fn comparison_operators_desugar_to_a_negated_opposite() {
    // >= is emitted as `LESS, NOT`; <= as `GREATER, NOT`.
    let (chunk, ok) = compiled("1 >= 2");
    assert!(ok);
    assert_eq!(
      chunk.code,
      vec![
        OpCode::Constant as u8,
        0,
        OpCode::Constant as u8,
        1,
        OpCode::Less as u8,
        OpCode::Not as u8,
        OpCode::Return as u8,
      ]
    );
  }

  #[test]
  fn dangling_operator_reports_one_suppressed_error() {
    let (_, ok) = compiled("1 +");
    assert!(!ok);
  }

  #[test]
  fn empty_input_fails_to_compile() {
    let (_, ok) = compiled("");
    assert!(!ok);
  }

  #[test]
  fn the_257th_constant_is_a_compile_error() {
    let mut source = String::new();
    for i in 0..257 {
      if i > 0 {
        source.push_str(" + ");
      }
      source.push_str(&i.to_string());
      source.push_str(".0");
    }
    let (_, ok) = compiled(&source);
    assert!(!ok);
  }
}
