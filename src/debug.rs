//! # Debug
//!
//! Disassembly for [`Chunk`], used by the `--trace` driver flag both after
//! compilation (one-shot dump of the whole chunk) and during execution (one
//! instruction at a time, interleaved with stack dumps).

use crate::chunk::{Chunk, OpCode};

pub trait Debug {
  /// Disassemble every instruction in the chunk under a `== name ==` banner.
  fn disassemble(&self, name: &str);

  /// Disassemble the instruction at `offset`, returning the offset of the
  /// next one.
  fn disassemble_instruction(&self, offset: usize) -> usize;

  /// Print an opcode with no operands.
  fn simple_instruction(&self, name: &str, offset: usize) -> usize;

  /// Print an opcode that takes a one-byte constant-pool index operand,
  /// along with the constant's value.
  fn constant_instruction(&self, name: &str, offset: usize) -> usize;
}

impl Debug for Chunk {
  fn disassemble(&self, name: &str) {
    println!("== {} ==", name);

    let mut offset = 0;
    while offset < self.code.len() {
      offset = self.disassemble_instruction(offset);
    }
  }

  fn disassemble_instruction(&self, offset: usize) -> usize {
    print!("{:04} ", offset);

    if offset > 0 && self.lines[offset] == self.lines[offset - 1] {
      print!("   | ");
    } else {
      print!("{:4} ", self.lines[offset]);
    }

    let instruction = self.code[offset];
    match OpCode::from(instruction) {
      OpCode::Constant => self.constant_instruction("OP_CONSTANT", offset),
      OpCode::Nil => self.simple_instruction("OP_NIL", offset),
      OpCode::True => self.simple_instruction("OP_TRUE", offset),
      OpCode::False => self.simple_instruction("OP_FALSE", offset),
      OpCode::Equal => self.simple_instruction("OP_EQUAL", offset),
      OpCode::Greater => self.simple_instruction("OP_GREATER", offset),
      OpCode::Less => self.simple_instruction("OP_LESS", offset),
      OpCode::Add => self.simple_instruction("OP_ADD", offset),
      OpCode::Subtract => self.simple_instruction("OP_SUBTRACT", offset),
      OpCode::Multiply => self.simple_instruction("OP_MULTIPLY", offset),
      OpCode::Divide => self.simple_instruction("OP_DIVIDE", offset),
      OpCode::Not => self.simple_instruction("OP_NOT", offset),
      OpCode::Negate => self.simple_instruction("OP_NEGATE", offset),
      OpCode::Return => self.simple_instruction("OP_RETURN", offset),
    }
  }

  fn simple_instruction(&self, name: &str, offset: usize) -> usize {
    println!("{}", name);
    offset + 1
  }

  fn constant_instruction(&self, name: &str, offset: usize) -> usize {
    let index = self.code[offset + 1];
    println!("{:-16} {:4} '{}'", name, index, self.constants.values[index as usize]);
    offset + 2
  }
}
