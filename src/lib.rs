#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;
#[cfg(feature = "llvm")]
pub mod verify;

extern crate regex;

pub use compiler::compiler::generate;
pub use options::{CompileOptions, DEFAULT_MAX_DEPTH};
pub use parser::parser::{parse, parse_with_limit};

/// Byte offset into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Compiles `source` into the text of an LLVM IR module.
///
/// With `print_result` the generated `main` prints the 64-bit result through
/// `printf` and returns 0, otherwise it returns the result truncated to `i32`.
pub fn compile(source: &str, print_result: bool) -> Result<String, Error> {
    compile_with(source, &CompileOptions::default().print_result(print_result))
}

pub fn compile_with(source: &str, options: &CompileOptions) -> Result<String, Error> {
    let ast = parse_with_limit(source, options.max_depth)?;
    let module = generate(&ast, options.print_result);
    Ok(module.to_string())
}

/// Finds the line holding `position`.
///
/// Returns the 1-based line number, the line text (with its newline) and the
/// byte column inside that line. Positions in the trailing whitespace, which
/// is where end-of-input errors land, resolve to just after the last
/// non-blank character.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let position = position.min(source.trim_end().len());
    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return (line_number, line.to_string(), line_pos);
        }

        last_line = line;
        start = end;
        line_number += 1;
    }

    let line_number = (line_number - 1).max(1);
    let column = last_line.trim_end_matches(['\n', '\r']).len();
    (line_number, last_line.to_string(), column)
}


/// Renders `error` against its source with a caret under the offending column.
pub fn render_error(error: &Error, source: &str, file_name: &str) -> String {
    /*
        Error: name (tip)
        -> expr.txt
          |
        1 | 1+2&3
          | ---^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file_name));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end().replace('\t', TAB)
    ));

    let before = &line_text[removed_whitespace.min(line_pos)..line_pos];
    let arrows = display_width(before) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

/// Tabs are shown as this many spaces so the caret lines up.
const TAB: &str = "    ";

/// Strips leading whitespace, returning the rest and the number of bytes removed.
fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start();
    (String::from(trimmed), string.len() - trimmed.len())
}

fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c == '\t' { TAB.len() } else { 1 })
        .sum()
}
