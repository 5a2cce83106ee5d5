//! Checks emitted IR with LLVM itself (`llvm` feature).

use inkwell::{context::Context, memory_buffer::MemoryBuffer};

use crate::compiler::ir::MODULE_ID;

/// Parses `ir` into an LLVM module and runs the module verifier.
///
/// Returns LLVM's diagnostic text when the IR does not parse or verify.
pub fn verify_ir(ir: &str) -> Result<(), String> {
    let context = Context::create();
    let buffer = MemoryBuffer::create_from_memory_range_copy(ir.as_bytes(), MODULE_ID);

    let module = context
        .create_module_from_ir(buffer)
        .map_err(|error| error.to_string())?;

    module.verify().map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use crate::compile;

    #[test]
    fn test_generated_modules_verify() {
        for source in ["1+2*3", "--5", "-(1+2)", "2147483648", "7/0"] {
            for print_result in [true, false] {
                let ir = compile(source, print_result).unwrap();
                assert!(super::verify_ir(&ir).is_ok(), "{ir}");
            }
        }
    }

    #[test]
    fn test_malformed_ir_is_rejected() {
        assert!(super::verify_ir("define i32 @main() {\nentry:\n  ret i64 0\n}").is_err());
    }
}
