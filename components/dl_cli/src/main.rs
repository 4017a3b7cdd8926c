//! dl front end CLI
//!
//! Entry point for the `dl` binary. Parses CLI arguments and delegates to the
//! Pipeline for scanning, parsing and symbol resolution.

use clap::Parser as ClapParser;
use dl_cli::{logging, Cli, Pipeline};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let (tokens, ast, symbols) = cli.outputs();
    let pipeline = Pipeline::new()
        .with_print_tokens(tokens)
        .with_print_ast(ast)
        .with_print_symbols(symbols)
        .with_trace(cli.trace);

    let result = match &cli.eval {
        Some(source) => pipeline.run_string(source, "<eval>"),
        None => pipeline.run_file(&cli.file),
    };

    match result.and_then(|output| pipeline.render(&output)) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}
