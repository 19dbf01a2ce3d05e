//! # Chunk
//!
//! A module which represents a sequence of bytecode, with its dependent
//! components.

use crate::{utils::Init, value::ValueArray};
use enum_repr::EnumFromU8;

/// ## OpCode
///
/// An enum which represents the different opcodes used in the virtual
/// machine. `Constant` is the only opcode with an inline operand (one byte:
/// an index into the chunk's constant pool); every other opcode is
/// operand-less.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumFromU8)]
pub enum OpCode {
  Constant = 0,
  Nil,
  True,
  False,
  Equal,
  Greater,
  Less,
  Add,
  Subtract,
  Multiply,
  Divide,
  Not,
  Negate,
  Return,
}

/// ## Chunk
///
/// A struct which represents a chunk/sequence of bytecode: a flat byte
/// stream, a parallel line-number table (one entry per byte, used only for
/// error reporting) and a constant pool.
#[derive(Debug, Default, Clone)]
pub struct Chunk {
  pub(crate) code: Vec<u8>,
  pub(crate) lines: Vec<usize>,
  pub(crate) constants: ValueArray,
}

impl Chunk {
  /// Write a byte to the given chunk, tagging it with the source line that
  /// produced it. Growth of the backing arrays is delegated to `Vec`'s own
  /// amortized-doubling strategy.
  pub fn write(&mut self, byte: u8, line: usize) {
    self.code.push(byte);
    self.lines.push(line);
  }

  /// Add a constant to the given chunk, then return its index. Callers must
  /// check the index still fits in a `u8` before emitting an `OP_CONSTANT`.
  pub fn add_constant(&mut self, value: crate::value::Value) -> usize {
    self.constants.write(value);
    self.constants.len() - 1
  }

  pub fn len(&self) -> usize {
    self.code.len()
  }

  pub fn is_empty(&self) -> bool {
    self.code.is_empty()
  }

  /// Clear the given chunk.
  pub fn clear(&mut self) {
    self.code.clear();
    self.lines.clear();
    self.constants.clear();
  }
}

impl Init for Chunk {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::value::Value;

  #[test]
  fn write_keeps_code_and_lines_in_lockstep() {
    let mut chunk = Chunk::init();
    chunk.write(OpCode::Return as u8, 1);
    chunk.write(OpCode::Constant as u8, 2);
    chunk.write(3, 2);
    assert_eq!(chunk.code.len(), chunk.lines.len());
    assert_eq!(chunk.lines, vec![1, 2, 2]);
  }

  #[test]
  fn add_constant_returns_sequential_indices() {
    let mut chunk = Chunk::init();
    assert_eq!(chunk.add_constant(Value::number_val(1.2)), 0);
    assert_eq!(chunk.add_constant(Value::number_val(2.3)), 1);
    assert_eq!(chunk.constants.len(), 2);
  }
}
