use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::{convert, evaluate, tokens_to_string};
use log::info;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. "3+4*2/(1 - 5)^2^3".
    /// Write subtraction with a space after the minus ("3 - 4"); "-4" is a negative number.
    /// Put an expression that starts with a minus after "--", e.g. `-- -4+2`
    expression: String,

    /// Also print the expression in postfix notation
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    info!("evaluating {:?}", args.expression);

    if args.postfix {
        let postfix_tokens = convert(&args.expression)
            .with_context(|| format!("could not convert expression {:?}", args.expression))?;
        println!("{}", tokens_to_string(postfix_tokens)?);
    }

    let value = evaluate(&args.expression)
        .with_context(|| format!("could not evaluate expression {:?}", args.expression))?;
    println!("{}", value);

    Ok(())
}
