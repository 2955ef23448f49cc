//! Brisk compiler CLI.

use briskc::commands::{explain_error, lex_file};
use briskc::{init_tracing, parse_lex_args, DriverError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "lex" => run_lex(&args[2..]),
        "explain" | "--explain" => match args.get(2) {
            Some(code) => explain_error(code).map(|text| println!("{text}")),
            None => Err(DriverError::Usage(
                "usage: brisk explain <ERROR_CODE>".to_owned(),
            )),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("Brisk {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => Err(DriverError::Usage(format!("unknown command '{other}'"))),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, DriverError::Usage(_)) {
            eprintln!();
            eprintln!("Run 'brisk help' for usage.");
        }
        std::process::exit(1);
    }
}

fn run_lex(args: &[String]) -> Result<(), DriverError> {
    let (path, options) = parse_lex_args(args)?;
    let report = lex_file(&path, &options)?;
    print!("{}", report.listing);
    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }
    report.check(&options)
}

fn print_usage() {
    println!("Brisk compiler");
    println!();
    println!("Usage: brisk <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and print its tokens");
    println!("  explain <code>       Describe an error code (e.g., E0002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --format=<fmt>       Diagnostic format: default, verbose");
    println!("  --deny-illegal       Exit with an error if any token is illegal");
    println!("  --no-positions       Omit line and column ranges");
    println!();
    println!("Logging: set BRISK_LOG (or RUST_LOG), e.g. BRISK_LOG=debug;");
    println!("BRISK_LOG_FORMAT=tree for hierarchical output.");
}
