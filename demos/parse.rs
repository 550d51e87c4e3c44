//! An example to parse a URL from the CLI argument.

use net_url::{Config, Url};

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URL

FLAGS:
    -h, --help          Prints this help
    -n, --normalize     Normalize the URL before printing
    -c, --cumulative    Collect repeated query keys into sequences

ARGS:
    <URL>               URL or relative reference
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URL.
    url: String,
    /// Whether to normalize.
    normalize: bool,
    /// Whether repeated plain query keys are collected.
    cumulative: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut url = None;
        let mut normalize = false;
        let mut cumulative = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--normalize" | "-n" => normalize = true,
                "--cumulative" | "-c" => cumulative = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if url.replace(arg).is_some() {
                        die("URL can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if url.replace(arg).is_some() {
                die("URL can be specified at most once");
            }
        }

        let url = url.unwrap_or_else(|| die("URL should be specified"));
        Self {
            url,
            normalize,
            cumulative,
        }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let mut config = Config::default();
    config.options.set_cumulative_parameters(opt.cumulative);

    let mut url = Url::parse_with(&opt.url, &config);
    if opt.normalize {
        url.normalize_with(&config);
    }

    println!("scheme:    {:?}", url.scheme());
    println!("authority: {:?}", url.authority());
    println!("user:      {:?}", url.user());
    println!("password:  {:?}", url.password());
    match url.host() {
        Some(host) => println!("host:      {:?} ({:?})", host, url.host_kind()),
        None => println!("host:      None"),
    }
    println!("port:      {:?}", url.port());
    println!("path:      {:?}", url.path());
    println!("query:     {:?}", url.query());
    println!("fragment:  {:?}", url.fragment());
    println!();
    println!("{}", url.build_with(&config));
}
