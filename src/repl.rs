//! Interactive read-eval-print loop.
//!
//! Multi-line inputs are collected by brace balance, then dispatched
//! expression-first: if the buffer parses and evaluates as a single
//! expression its value is echoed, otherwise the same text runs as a full
//! program. One interpreter instance lives across turns, so definitions
//! persist.

use crate::interpreter::{to_str, Interpreter};
use crate::source::{parse_expression, parse_source};

const FAREWELL: &str = "Goodbye! Stay sigma! 🗿";

pub struct Repl<'io> {
    interp: Interpreter<'io>,
    buffer: Vec<String>,
    open_braces: i64,
}

impl<'io> Repl<'io> {
    pub fn new(interp: Interpreter<'io>) -> Self {
        Repl {
            interp,
            buffer: Vec::new(),
            open_braces: 0,
        }
    }

    pub fn run(&mut self) {
        self.say("🚽 Skibidi Interactive Mode v2.0 🚽");
        self.say("Type :help for commands. Type 'exit' or :exit to quit.");

        loop {
            let prompt = if self.open_braces > 0 {
                "... "
            } else {
                "skibidi> "
            };
            let _ = write!(self.interp.out(), "{}", prompt);
            let _ = self.interp.out().flush();

            let Some(line) = self.interp.read_line() else {
                self.say(FAREWELL);
                break;
            };
            if !self.handle_line(line) {
                break;
            }
        }
    }

    /// Process one raw line. Returns false when the session should end.
    fn handle_line(&mut self, line: String) -> bool {
        let trimmed = line.trim();

        // Meta-commands and `exit` are only recognized outside an open block;
        // inside one they are ordinary source text.
        if self.open_braces == 0 {
            if let Some(cmd) = trimmed.strip_prefix(':') {
                return self.run_meta(cmd);
            }
            if trimmed == "exit" {
                self.say(FAREWELL);
                return false;
            }
            if trimmed.is_empty() {
                return true;
            }
        }

        self.open_braces += line.matches('{').count() as i64;
        self.open_braces -= line.matches('}').count() as i64;
        self.buffer.push(line);

        if self.open_braces > 0 {
            return true;
        }

        let source = self.buffer.join("\n");
        self.buffer.clear();
        // A stray closing brace can leave the balance negative; reset it so
        // the prompt recovers.
        self.open_braces = 0;

        let input = complete_input(source);
        self.dispatch(&input);
        true
    }

    fn run_meta(&mut self, cmd: &str) -> bool {
        match cmd.trim().to_lowercase().as_str() {
            "exit" => {
                self.say(FAREWELL);
                false
            }
            "help" => {
                self.say("Available commands: :help, :vars, :funcs, :exit");
                true
            }
            "vars" => {
                self.say("Variables:");
                let mut bindings = self.interp.current_frame_bindings();
                bindings.sort_by_key(|(name, _)| *name);
                let lines: Vec<String> = bindings
                    .into_iter()
                    .map(|(name, val)| format!("  {} = {}", name, to_str(val)))
                    .collect();
                for line in lines {
                    self.say(&line);
                }
                true
            }
            "funcs" => {
                self.say("Functions:");
                let mut names: Vec<String> = self
                    .interp
                    .function_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                names.sort();
                for name in names {
                    self.say(&format!("  {}", name));
                }
                true
            }
            _ => {
                self.say("Unknown command. Type :help for help.");
                true
            }
        }
    }

    /// Expression-first dispatch. A failed expression attempt may already
    /// have run side effects; the program fallback re-executes the input
    /// from the top.
    fn dispatch(&mut self, source: &str) {
        if let Ok(expr) = parse_expression(source) {
            if let Ok(val) = self.interp.eval_expr(&expr) {
                let text = to_str(&val);
                self.say(&text);
                return;
            }
        }

        let result = parse_source(source)
            .and_then(|program| self.interp.execute(&program).map_err(|e| e.to_string()));
        if let Err(e) = result {
            self.say(&format!("Skibidi Error: {}", e));
        }
    }

    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.interp.out(), "{}", msg);
    }
}

/// Single-statement convenience: a buffer with no block that does not end in
/// `ohio` gets one appended.
fn complete_input(source: String) -> String {
    let trimmed = source.trim();
    if !trimmed.ends_with("ohio") && !trimmed.contains('{') {
        format!("{} ohio", source)
    } else {
        source
    }
}
