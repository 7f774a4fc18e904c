/// Core Skibidi runtime value type and its coercion rules.
///
/// Lives in its own module so the interpreter, the REPL and the test suites
/// can import the coercions without pulling in the evaluator.
use thiserror::Error;

// ---------------------------------------------------------------------------
// RuntimeError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Undefined function: {0}")]
    UndefinedFunction(String),
    #[error("Function {name} expects {expected} args, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("Division by zero")]
    DivisionByZero,
    /// Built-in argument errors and other one-off runtime failures.
    #[error("{0}")]
    Message(String),
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    /// The result of a function that never ran `alpha`; prints as "".
    Unit,
}

// ---------------------------------------------------------------------------
// Coercions
// ---------------------------------------------------------------------------

pub fn to_bool(val: &Value) -> bool {
    match val {
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0,
        Value::Str(s) => !s.is_empty(),
        Value::Unit => false,
    }
}

/// Strings that fail to parse coerce to 0, not an error.
pub fn to_float(val: &Value) -> f64 {
    match val {
        Value::Number(n) => *n,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Str(s) => s.parse().unwrap_or(0.0),
        Value::Unit => 0.0,
    }
}

/// Display form used by `gyatt`, `str()` and the REPL echo. Integral numbers
/// print with no decimal point; everything else uses the shortest general
/// float form.
pub fn to_str(val: &Value) -> String {
    match val {
        Value::Str(s) => s.clone(),
        Value::Number(n) => {
            if n.fract() == 0.0 && n.is_finite() {
                format!("{:.0}", n)
            } else {
                format!("{}", n)
            }
        }
        Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Unit => String::new(),
    }
}
