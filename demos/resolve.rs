//! An example to resolve references against a base URL.

use net_url::{Config, Url};

const USAGE: &str = "\
USAGE:
    resolve [FLAGS] [--] BASE REFERENCE...

FLAGS:
    -h, --help      Prints this help

ARGS:
    <BASE>          Base URL
    <REFERENCE>...  References to resolve
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

fn main() {
    let mut positional = Vec::new();
    let mut args = std::env::args().skip(1);
    for arg in args.by_ref() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(1);
            }
            "--" => break,
            opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
            _ => positional.push(arg),
        }
    }
    positional.extend(args);

    let (base, references) = match positional.split_first() {
        Some((base, references)) if !references.is_empty() => (base, references),
        _ => die("base and at least one reference should be specified"),
    };

    let config = Config::default();
    let base = Url::parse_with(base, &config);
    println!("base: {}", base.build_with(&config));
    for reference in references {
        let reference = Url::parse_with(reference, &config);
        let resolved = base.resolve_with(&reference, &config);
        println!(
            "{} -> {}",
            reference.build_with(&config),
            resolved.build_with(&config)
        );
    }
}
