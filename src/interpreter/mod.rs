use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::ast::FnDef;
// Re-export the value types so `use skibidi::interpreter::Value` works.
pub use crate::value::{to_bool, to_float, to_str, RuntimeError, Value};

mod builtins;
mod eval;
mod exec;

/// One entry on the scope stack. Function activations are marked so that
/// `alpha` resolves its return slot past any block scopes pushed inside the
/// activation; the bottom (global) frame counts as an activation.
struct Frame {
    vars: HashMap<String, Value>,
    return_value: Value,
    returned: bool,
    is_function: bool,
}

impl Frame {
    fn scope() -> Self {
        Frame {
            vars: HashMap::new(),
            return_value: Value::Unit,
            returned: false,
            is_function: false,
        }
    }

    fn activation() -> Self {
        Frame {
            is_function: true,
            ..Frame::scope()
        }
    }
}

/// The tree-walking evaluator. Owns the frame stack, the function table and
/// the reader/writer pair that `input`, `gyatt` and the REPL go through.
/// Both the global frame and the function table survive across REPL turns.
pub struct Interpreter<'io> {
    frames: Vec<Frame>,
    functions: HashMap<String, Rc<FnDef>>,
    input: Box<dyn BufRead + 'io>,
    output: Box<dyn Write + 'io>,
}

impl<'io> Interpreter<'io> {
    pub fn new() -> Self {
        Interpreter::with_io(Box::new(io::stdin().lock()), Box::new(io::stdout()))
    }

    pub fn with_io(input: Box<dyn BufRead + 'io>, output: Box<dyn Write + 'io>) -> Self {
        Interpreter {
            frames: vec![Frame::activation()],
            functions: HashMap::new(),
            input,
            output,
        }
    }

    // -------------------------------------------------------------------------
    // Frame management
    // -------------------------------------------------------------------------
    fn push_scope(&mut self) {
        self.frames.push(Frame::scope());
    }

    fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// The innermost function activation (global frame at top level). This is
    /// where `alpha` stores its result, regardless of how many block scopes
    /// sit above it.
    fn function_frame_mut(&mut self) -> &mut Frame {
        let idx = self
            .frames
            .iter()
            .rposition(|f| f.is_function)
            .unwrap_or(0);
        &mut self.frames[idx]
    }

    pub(crate) fn returned(&self) -> bool {
        self.frames
            .iter()
            .rev()
            .find(|f| f.is_function)
            .map_or(false, |f| f.returned)
    }

    /// Number of frames on the stack; 1 means only the global frame.
    pub fn stack_depth(&self) -> usize {
        self.frames.len()
    }

    // -------------------------------------------------------------------------
    // Name resolution
    // -------------------------------------------------------------------------
    pub fn lookup(&self, name: &str) -> Result<Value, RuntimeError> {
        for frame in self.frames.iter().rev() {
            if let Some(v) = frame.vars.get(name) {
                return Ok(v.clone());
            }
        }
        Err(RuntimeError::UndefinedVariable(name.to_string()))
    }

    /// `skibidi` declaration: always writes the innermost frame.
    pub fn declare(&mut self, name: String, val: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.vars.insert(name, val);
        }
    }

    /// Assignment updates the innermost frame that already binds `name`;
    /// an unbound name falls through to a fresh innermost binding (the
    /// language has no assignment-before-declaration error).
    pub fn assign(&mut self, name: &str, val: Value) {
        for frame in self.frames.iter_mut().rev() {
            if frame.vars.contains_key(name) {
                frame.vars.insert(name.to_string(), val);
                return;
            }
        }
        self.declare(name.to_string(), val);
    }

    /// Bindings of the innermost frame, for the REPL's `:vars` listing.
    pub fn current_frame_bindings(&self) -> Vec<(&str, &Value)> {
        self.frames
            .last()
            .map(|f| f.vars.iter().map(|(k, v)| (k.as_str(), v)).collect())
            .unwrap_or_default()
    }

    /// Names in the function table, for the REPL's `:funcs` listing.
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    // -------------------------------------------------------------------------
    // I/O
    // -------------------------------------------------------------------------

    /// Read one line from the reader, without its terminator. `None` on EOF.
    pub(crate) fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }

    pub(crate) fn out(&mut self) -> &mut (dyn Write + 'io) {
        self.output.as_mut()
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Interpreter::new()
    }
}
