//! tinyexpr CLI: compiles the expression in a file to an LLVM IR file.
//!
//! ```text
//! tinyexpr expr.txt -o out.ll
//! lli out.ll
//! # or
//! llc -filetype=obj out.ll -o out.o && clang out.o -o expr && ./expr
//! ```

use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser as ClapParser;
use thiserror::Error;
use tinyexpr::{
    errors::errors::Error as CompileError, generate, lexer::lexer::tokenize, parse_with_limit,
    render_error, DEFAULT_MAX_DEPTH,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "tinyexpr")]
#[command(version)]
#[command(about = "Compiles an integer arithmetic expression to LLVM IR", long_about = None)]
struct Args {
    /// File containing a single arithmetic expression
    input: PathBuf,

    /// Output .ll path
    #[arg(short, long, default_value = "out.ll")]
    output: PathBuf,

    /// Return the result (truncated to 32 bits) as the process exit code instead of printing it
    #[arg(long)]
    retcode: bool,

    /// Deepest nesting of parentheses and unary operators to accept
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token stream
    #[arg(long)]
    emit_tokens: bool,

    /// Print the parsed expression tree
    #[arg(long)]
    emit_ast: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Check the generated module with LLVM before writing it
    #[cfg(feature = "llvm")]
    #[arg(long)]
    verify: bool,
}

#[derive(Debug, Error)]
enum Failure {
    #[error("error: failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Compile(String),
    #[error("error: failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[cfg(feature = "llvm")]
    #[error("error: LLVM rejected the generated module: {0}")]
    Verify(String),
}

impl Failure {
    fn exit_code(&self) -> u8 {
        match self {
            Failure::Read { .. } => 2,
            Failure::Compile(_) => 3,
            Failure::Write { .. } => 4,
            #[cfg(feature = "llvm")]
            Failure::Verify(_) => 5,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => {
            println!("Wrote LLVM IR to {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("{}", failure.to_string().trim_end());
            ExitCode::from(failure.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), Failure> {
    let source = fs::read_to_string(&args.input).map_err(|source| Failure::Read {
        path: args.input.clone(),
        source,
    })?;
    let file_name = args.input.display().to_string();
    let compile_error =
        |error: CompileError| Failure::Compile(render_error(&error, &source, &file_name));

    let start = Instant::now();

    if args.emit_tokens {
        for token in tokenize(&source).map_err(compile_error)? {
            println!("{}", token);
        }
    }

    let ast = parse_with_limit(&source, args.max_depth).map_err(compile_error)?;
    info!("Parsed in {:?}", start.elapsed());

    if args.emit_ast {
        println!("{}", ast);
    }

    let generate_start = Instant::now();
    let module = generate(&ast, !args.retcode);
    let ir = module.to_string();
    info!("Generated in {:?}", generate_start.elapsed());
    debug!(instructions = module.instructions.len(), "module ready");

    #[cfg(feature = "llvm")]
    {
        if args.verify {
            tinyexpr::verify::verify_ir(&ir).map_err(Failure::Verify)?;
            info!("Verified with LLVM");
        }
    }

    fs::write(&args.output, format!("{}\n", ir)).map_err(|source| Failure::Write {
        path: args.output.clone(),
        source,
    })?;

    info!("Total time: {:?}", start.elapsed());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
