use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "shunt")]
#[command(about = "Evaluate an arithmetic expression without eval()", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to evaluate; several words are joined with spaces.
    /// Reads one line from stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Maximum accepted expression length in bytes
    #[arg(long = "max-len", value_name = "BYTES", default_value_t = 512)]
    max_len: usize,

    /// Quiet operation, suppress warnings
    #[arg(short = 'q', conflicts_with = "verbose")]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn get_verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            1 + self.verbose.min(3)
        }
    }
}

fn init_logging(verbosity: u8) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new().filter_level(level).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.get_verbosity());

    let expression = if args.expression.is_empty() {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line
    } else {
        args.expression.join(" ")
    };

    // The library evaluates in time linear to input length; bounding that
    // length is the caller's job, and here the CLI is the caller
    if expression.trim().len() > args.max_len {
        anyhow::bail!(
            "Expression is {} bytes, over the {}-byte limit (raise with --max-len)",
            expression.trim().len(),
            args.max_len
        );
    }

    let result = shunt::evaluate(&expression)
        .map_err(|e| anyhow::anyhow!("Failed to evaluate expression: {}", e))?;

    println!("{}", result);
    io::stdout().flush()?;

    Ok(())
}
