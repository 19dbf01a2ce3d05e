//! # VM
//!
//! ## Based on Stack
//!
//! The VM (aka. Virtual Machine) is the core of the interpreter. It is
//! responsible for executing the bytecode a [`Chunk`] holds.

use crate::{
  chunk::{Chunk, OpCode},
  compiler::compile,
  debug::Debug,
  utils::Init,
  value::Value,
};

/// The operand stack is bounded rather than growable: the reference leaves
/// overflow as undefined behavior, this implementation raises a runtime
/// error instead.
pub const STACK_MAX: usize = 256;

/// ## InterpretError
///
/// The internal, message-carrying error used to build the exact stderr text
/// for a compile or runtime failure.
#[derive(Debug, Clone)]
pub enum InterpretError {
  CompileError(String),
  RuntimeError(String),
}

/// ## InterpretResult
///
/// The externally visible, payload-less outcome of `interpret` — the
/// contract the driver maps to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretResult {
  Ok,
  CompileError,
  RuntimeError,
}

/// ## VM
///
/// A struct which represents the virtual machine.
#[derive(Debug, Default)]
pub struct VM {
  chunk: Chunk,
  ip: usize,
  stack: Vec<Value>,
  /// Mirrors the driver's `--trace` flag: when set, `run` dumps the stack
  /// and disassembles each instruction before executing it.
  trace: bool,
}

impl Init for VM {}

impl VM {
  pub fn new(trace: bool) -> Self {
    Self {
      chunk: Chunk::init(),
      ip: 0,
      stack: Vec::with_capacity(STACK_MAX),
      trace,
    }
  }

  /// Release owned buffers. Kept for symmetry with the reference's explicit
  /// alloc/free lifecycle; Rust's `Drop` already reclaims this memory.
  pub fn free(&mut self) {
    self.chunk.clear();
    self.stack.clear();
  }

  /// Compile `source` and, if it compiles, run it.
  pub fn interpret(&mut self, source: &str) -> InterpretResult {
    let mut chunk = Chunk::init();
    if !compile(source, &mut chunk, self.trace) {
      return InterpretResult::CompileError;
    }

    self.chunk = chunk;
    self.ip = 0;

    match self.run() {
      Ok(()) => InterpretResult::Ok,
      Err(InterpretError::RuntimeError(_)) => InterpretResult::RuntimeError,
      Err(InterpretError::CompileError(_)) => InterpretResult::CompileError,
    }
  }
}

impl VM {
  fn push(&mut self, value: Value) -> Result<(), InterpretError> {
    if self.stack.len() >= STACK_MAX {
      return Err(self.runtime_error("Stack overflow.".to_owned()));
    }
    self.stack.push(value);
    Ok(())
  }

  fn pop(&mut self) -> Value {
    self.stack.pop().expect("pop from an empty VM stack")
  }

  fn unary_op<F>(&mut self, op: F) -> Result<(), InterpretError>
  where
    F: FnOnce(Value) -> Result<Value, InterpretError>,
  {
    let value = self.pop();
    match op(value) {
      Ok(result) => self.push(result),
      Err(InterpretError::RuntimeError(message)) => Err(self.runtime_error(message)),
      Err(err) => Err(err),
    }
  }

  fn binary_op<F>(&mut self, op: F) -> Result<(), InterpretError>
  where
    F: FnOnce(Value, Value) -> Result<Value, InterpretError>,
  {
    let b = self.pop();
    let a = self.pop();
    match op(a, b) {
      Ok(result) => self.push(result),
      Err(InterpretError::RuntimeError(message)) => Err(self.runtime_error(message)),
      Err(err) => Err(err),
    }
  }

  /// `>`/`<` require both operands to be numbers; unlike `==`, there is no
  /// meaningful cross-type comparison to fall back to.
  fn compare<F>(&mut self, op: F) -> Result<(), InterpretError>
  where
    F: FnOnce(f64, f64) -> bool,
  {
    let b = self.pop();
    let a = self.pop();
    if !a.is_number() || !b.is_number() {
      return Err(self.runtime_error("Operands must be numbers.".to_owned()));
    }
    self.push(Value::bool_val(op(a.as_number(), b.as_number())))
  }
}

impl VM {
  fn read_byte(&mut self) -> u8 {
    let byte = self.chunk.code[self.ip];
    self.ip += 1;
    byte
  }

  fn read_constant(&mut self) -> Value {
    let index = self.read_byte();
    self.chunk.constants.values[index as usize]
  }
}

impl VM {
  fn trace_stack(&self) {
    print!("          ");
    for value in &self.stack {
      print!("[ {} ]", value);
    }
    println!();
  }

  /// Run the virtual machine against the chunk currently installed.
  fn run(&mut self) -> Result<(), InterpretError> {
    loop {
      if self.trace {
        self.trace_stack();
        self.chunk.disassemble_instruction(self.ip);
      }

      let instruction = self.read_byte();
      match OpCode::from(instruction) {
        OpCode::Constant => {
          let constant = self.read_constant();
          self.push(constant)?;
        }
        OpCode::Nil => self.push(Value::nil_val())?,
        OpCode::True => self.push(Value::bool_val(true))?,
        OpCode::False => self.push(Value::bool_val(false))?,
        OpCode::Equal => {
          let b = self.pop();
          let a = self.pop();
          self.push(Value::bool_val(a == b))?;
        }
        OpCode::Greater => self.compare(|a, b| a > b)?,
        OpCode::Less => self.compare(|a, b| a < b)?,
        OpCode::Add => self.binary_op(|a, b| a + b)?,
        OpCode::Subtract => self.binary_op(|a, b| a - b)?,
        OpCode::Multiply => self.binary_op(|a, b| a * b)?,
        OpCode::Divide => self.binary_op(|a, b| a / b)?,
        OpCode::Not => {
          let value = self.pop();
          self.push(Value::bool_val(value.is_falsey()))?;
        }
        OpCode::Negate => self.unary_op(|v| -v)?,
        OpCode::Return => {
          println!("{}", self.pop());
          return Ok(());
        }
      }
    }
  }
}

impl VM {
  /// Print `message`, then the faulting line, reset the stack, and hand
  /// back a `RuntimeError` the caller can propagate with `?`.
  fn runtime_error(&mut self, message: String) -> InterpretError {
    let line = self.chunk.lines[self.ip - 1];
    eprintln!("{}", message);
    eprintln!("[line {}] in script", line);
    self.stack.clear();
    InterpretError::RuntimeError(message)
  }
}
