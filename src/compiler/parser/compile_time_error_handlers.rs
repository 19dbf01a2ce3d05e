use super::*;

impl<'a> Parser<'a> {
  /// Report an error anchored at the current token.
  pub(crate) fn error_at_current(&mut self, message: &str) {
    self.error_at(self.current, message);
  }

  /// Report an error anchored at the previous token.
  pub(crate) fn error(&mut self, message: &str) {
    self.error_at(self.previous, message);
  }

  /// Report `message` at `token`, unless panic mode is already suppressing
  /// cascaded reports. This is a pure side effect: it never unwinds the
  /// parse, so callers keep running after calling it.
  pub(crate) fn error_at(&mut self, token: Token<'a>, message: &str) {
    self.had_error = true;
    if self.panic_mode {
      return;
    }
    self.panic_mode = true;

    eprint!("[line {}] Error", token.line);
    match token.token_type {
      TokenType::Eof => eprint!(" at end"),
      TokenType::Error => {}
      _ => eprint!(" at '{}'", token.lexeme),
    }
    eprintln!(": {}", message);
  }
}
