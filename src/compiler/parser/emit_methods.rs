use super::*;

impl<'a> Parser<'a> {
  /// Append a single byte to the chunk, tagged with the line of the token
  /// that triggered its emission.
  pub(crate) fn emit_byte(&mut self, byte: u8) {
    let line = self.previous.line;
    self.chunk.write(byte, line);
  }

  /// Append two bytes in order (an opcode and its one-byte operand).
  pub(crate) fn emit_bytes(&mut self, byte1: u8, byte2: u8) {
    self.emit_byte(byte1);
    self.emit_byte(byte2);
  }

  pub(crate) fn emit_return(&mut self) {
    self.emit_byte(OpCode::Return as u8);
  }

  /// Emit a constant instruction for `value`.
  pub(crate) fn emit_constant(&mut self, value: Value) {
    let index = self.make_constant(value);
    self.emit_bytes(OpCode::Constant as u8, index);
  }

  /// Add `value` to the chunk's constant pool, returning its index. Reports
  /// "Too many constants in one chunk." and keeps compiling with index `0`
  /// if the pool has already grown past 256 entries.
  fn make_constant(&mut self, value: Value) -> u8 {
    let index = self.chunk.add_constant(value);
    if index > u8::MAX as usize {
      self.error("Too many constants in one chunk.");
      0
    } else {
      index as u8
    }
  }

  pub(crate) fn end_compiler(&mut self) {
    self.emit_return();
  }
}
