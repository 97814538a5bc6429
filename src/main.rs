use mucalc::cli::{self, Invocation};
use mucalc::config::Config;
use mucalc::logging;
use std::env;

fn main() {
    logging::init();

    let mut args = env::args_os().map(|a| a.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_else(|| String::from(env!("CARGO_PKG_NAME")));
    let invocation = Invocation::parse(args);
    let config = Config::from_env();

    let code = cli::run(&program, invocation, &config).unwrap_or_else(|e| {
        eprintln!("{:#}", e);
        1
    });
    std::process::exit(code)
}
