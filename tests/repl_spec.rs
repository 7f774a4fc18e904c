/// Spec tests for the REPL driver.
///
/// Each test feeds a scripted session through an injected reader and asserts
/// on the captured writer, prompts and banner included. Sessions end at EOF
/// unless the script exits explicitly.
use skibidi::interpreter::Interpreter;
use skibidi::repl::Repl;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn session(script: &str) -> String {
    let mut out = Vec::new();
    {
        let interp = Interpreter::with_io(Box::new(script.as_bytes()), Box::new(&mut out));
        let mut repl = Repl::new(interp);
        repl.run();
    }
    String::from_utf8(out).expect("utf8 output")
}

// ---------------------------------------------------------------------------
// Prompts and session lifecycle
// ---------------------------------------------------------------------------

#[test]
fn prints_banner_and_prompt() {
    let out = session("");
    assert!(out.contains("Skibidi Interactive Mode"));
    assert!(out.contains("skibidi> "));
}

#[test]
fn eof_says_goodbye() {
    let out = session("");
    assert!(out.contains("Goodbye! Stay sigma!"));
}

#[test]
fn exit_ends_the_session() {
    let out = session("exit\n1 + 1\n");
    assert!(out.contains("Goodbye! Stay sigma!"));
    assert!(!out.contains("2\n"));
}

#[test]
fn exit_meta_command_ends_the_session() {
    let out = session(":exit\n1 + 1\n");
    assert!(!out.contains("2\n"));
}

#[test]
fn empty_lines_are_ignored() {
    let out = session("\n\n1 + 1\n");
    assert!(out.contains("2\n"));
}

#[test]
fn continuation_prompt_inside_open_block() {
    let out = session("cap (1 < 2) {\ngyatt \"y\" ohio\n}\n");
    assert!(out.contains("... "));
    assert!(out.contains("y\n"));
}

// ---------------------------------------------------------------------------
// Expression-first dispatch
// ---------------------------------------------------------------------------

#[test]
fn expressions_echo_their_value() {
    let out = session("1 + 2\n");
    assert!(out.contains("3\n"));
}

#[test]
fn string_expressions_echo_unquoted() {
    let out = session("\"hi\" + \"!\"\n");
    assert!(out.contains("hi!\n"));
}

#[test]
fn definitions_persist_across_turns() {
    let out = session("skibidi x rizz 1 ohio\nx + 2\nx\n");
    assert!(out.contains("3\n"));
    assert!(out.contains("1\n"));
}

#[test]
fn functions_persist_across_turns() {
    let out = session("sigma add(a,b) { alpha a + b ohio }\nadd(2,3)\n");
    assert!(out.contains("5\n"));
}

#[test]
fn single_statement_gets_ohio_appended() {
    let out = session("gyatt 5\n");
    assert!(out.contains("5\n"));
}

#[test]
fn assignment_fallback_runs_when_expression_fails() {
    // `y` is undefined, so the expression attempt fails and the statement
    // path performs the assignment.
    let out = session("y rizz 4\ny\n");
    assert!(out.contains("4\n"));
}

#[test]
fn expression_dispatch_wins_over_assignment() {
    // With `x` bound, `x rizz 99` parses as the expression `x` (trailing
    // tokens ignored) and echoes the current value; no assignment happens.
    let out = session("skibidi x rizz 1 ohio\nx rizz 99\nx\n");
    assert!(!out.contains("99"));
    assert!(out.contains("1\n"));
}

#[test]
fn errors_are_reported_and_session_continues() {
    let out = session("gyatt y ohio\n1 + 1\n");
    assert!(out.contains("Skibidi Error: Undefined variable: y"));
    assert!(out.contains("2\n"));
}

#[test]
fn exit_inside_open_block_is_source_text() {
    let out = session("cap (1) {\nexit\n}\n1 + 1\n");
    assert!(out.contains("Skibidi Error:"));
    assert!(out.contains("2\n"));
}

#[test]
fn stray_closing_brace_does_not_wedge_the_prompt() {
    let out = session("}\n1 + 1\n");
    assert!(out.contains("2\n"));
}

// ---------------------------------------------------------------------------
// Meta-commands
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    let out = session(":help\n");
    assert!(out.contains("Available commands: :help, :vars, :funcs, :exit"));
}

#[test]
fn meta_commands_are_case_insensitive() {
    let out = session(":HELP\n");
    assert!(out.contains("Available commands"));
}

#[test]
fn vars_lists_global_bindings() {
    let out = session("skibidi x rizz 1 ohio\nskibidi s rizz \"hi\" ohio\n:vars\n");
    assert!(out.contains("Variables:"));
    assert!(out.contains("  s = hi"));
    assert!(out.contains("  x = 1"));
}

#[test]
fn funcs_lists_defined_functions() {
    let out = session("sigma add(a,b) { alpha a + b ohio }\n:funcs\n");
    assert!(out.contains("Functions:"));
    assert!(out.contains("  add"));
}

#[test]
fn unknown_meta_command_is_reported() {
    let out = session(":wat\n");
    assert!(out.contains("Unknown command. Type :help for help."));
}
