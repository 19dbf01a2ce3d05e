//! End-to-end scenarios driven through the public `VM::interpret` API, one
//! source string at a time. These check the tri-state `InterpretResult`
//! only — `interpret`'s stdout/stderr text is covered by the formatting
//! unit tests alongside `Value` and the compiler's own bytecode tests.

use loxcc::vm::{InterpretResult, VM};

fn run(source: &str) -> InterpretResult {
  VM::new(false).interpret(source)
}

#[test]
fn arithmetic_and_grouping_succeed() {
  assert_eq!(run("1 + 2"), InterpretResult::Ok);
  assert_eq!(run("(-1 + 2) * 3 - -4"), InterpretResult::Ok);
  assert_eq!(run("1 + 2 * 3"), InterpretResult::Ok);
  assert_eq!(run("(1 + 2) * 3"), InterpretResult::Ok);
}

#[test]
fn boolean_and_comparison_expressions_succeed() {
  assert_eq!(run("!nil"), InterpretResult::Ok);
  assert_eq!(run("!(5 - 4 > 3 * 2 == !nil)"), InterpretResult::Ok);
  assert_eq!(run("1 <= 2"), InterpretResult::Ok);
  assert_eq!(run("2 >= 1"), InterpretResult::Ok);
}

#[test]
fn type_errors_are_runtime_errors() {
  assert_eq!(run("-true"), InterpretResult::RuntimeError);
  assert_eq!(run("-nil"), InterpretResult::RuntimeError);
  assert_eq!(run("true + 1"), InterpretResult::RuntimeError);
  assert_eq!(run("1 > true"), InterpretResult::RuntimeError);
}

#[test]
fn dangling_operator_is_a_compile_error() {
  assert_eq!(run("1 +"), InterpretResult::CompileError);
}

#[test]
fn empty_input_is_a_compile_error() {
  assert_eq!(run(""), InterpretResult::CompileError);
}

#[test]
fn unterminated_string_is_a_compile_error() {
  assert_eq!(run("\"unterminated"), InterpretResult::CompileError);
}

#[test]
fn unbalanced_grouping_is_a_compile_error() {
  assert_eq!(run("(1 + 2"), InterpretResult::CompileError);
}

#[test]
fn left_associative_chain_never_overflows() {
  // `1 + 1 + 1 + ...` is left-associative: each `Add` fires as soon as its
  // right operand is a single constant, so the stack never holds more than
  // two values regardless of chain length. Capped at 200 terms so the
  // chunk's own 256-entry constant pool (one distinct entry per literal,
  // since constants are never deduplicated) isn't what's under test here.
  let mut source = String::from("1");
  for _ in 0..200 {
    source.push_str(" + 1");
  }
  assert_eq!(run(&source), InterpretResult::Ok);
}

#[test]
fn deeply_right_nested_grouping_overflows_the_stack() {
  // Every `(true + ...)` layer pushes its `true` before descending into the
  // next layer, so none of the `Add`s can fire until the whole chain
  // bottoms out — nesting past 256 pushes more operands than the stack
  // holds. `true`/`nil` literals are used instead of numbers so this stays
  // well clear of the constant-pool limit (`OP_TRUE` carries no constant
  // index at all).
  let mut source = String::from("true");
  for _ in 0..300 {
    source = format!("(true + {})", source);
  }
  assert_eq!(run(&source), InterpretResult::RuntimeError);
}
