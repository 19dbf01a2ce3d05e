//! Prefix/infix parse handlers. Each one runs with `self.previous` already
//! pointing at the token it was registered for in [`super::RULES`].

use super::*;

impl<'a> Parser<'a> {
  pub(crate) fn grouping(&mut self) {
    self.expression();
    self.consume(TokenType::RightParen, "Expect ')' after expression.");
  }

  pub(crate) fn number(&mut self) {
    match self.previous.lexeme.parse::<f64>() {
      Ok(value) => self.emit_constant(Value::number_val(value)),
      Err(_) => self.error("Failed to parse number."),
    }
  }

  pub(crate) fn unary(&mut self) {
    let operator_type = self.previous.token_type;

    // Compile the operand.
    self.parse_precedence(Precedence::Unary);

    match operator_type {
      TokenType::Bang => self.emit_byte(OpCode::Not as u8),
      TokenType::Minus => self.emit_byte(OpCode::Negate as u8),
      _ => unreachable!("unary() registered for a non-unary token"),
    }
  }

  pub(crate) fn binary(&mut self) {
    let operator_type = self.previous.token_type;
    let rule = self.get_rule(operator_type);
    // +1 precedence for left-associativity.
    self.parse_precedence(rule.precedence.next());

    match operator_type {
      TokenType::BangEqual => self.emit_bytes(OpCode::Equal as u8, OpCode::Not as u8),
      TokenType::EqualEqual => self.emit_byte(OpCode::Equal as u8),
      TokenType::Greater => self.emit_byte(OpCode::Greater as u8),
      TokenType::GreaterEqual => self.emit_bytes(OpCode::Less as u8, OpCode::Not as u8),
      TokenType::Less => self.emit_byte(OpCode::Less as u8),
      TokenType::LessEqual => self.emit_bytes(OpCode::Greater as u8, OpCode::Not as u8),
      TokenType::Plus => self.emit_byte(OpCode::Add as u8),
      TokenType::Minus => self.emit_byte(OpCode::Subtract as u8),
      TokenType::Star => self.emit_byte(OpCode::Multiply as u8),
      TokenType::Slash => self.emit_byte(OpCode::Divide as u8),
      _ => unreachable!("binary() registered for a non-binary token"),
    }
  }

  pub(crate) fn literal(&mut self) {
    match self.previous.token_type {
      TokenType::False => self.emit_byte(OpCode::False as u8),
      TokenType::Nil => self.emit_byte(OpCode::Nil as u8),
      TokenType::True => self.emit_byte(OpCode::True as u8),
      _ => unreachable!("literal() registered for a non-literal token"),
    }
  }
}
