//! Compilation settings shared by the library entry points and the CLI.

/// Deepest run of nested parentheses and unary operators accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for one compilation.
///
/// ```
/// use tinyexpr::CompileOptions;
///
/// let options = CompileOptions::default().print_result(false).max_depth(64);
/// assert!(!options.print_result);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Print the result with `printf` instead of returning it as the exit code.
    pub print_result: bool,
    /// Limit for nested parentheses and unary operators.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            print_result: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompileOptions {
    pub fn print_result(mut self, print_result: bool) -> Self {
        self.print_result = print_result;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
