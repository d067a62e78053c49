// src/bin/audit.rs
use color_eyre::eyre::WrapErr;

use school_audit::cli::{self, Command};
use school_audit::{log, progress::LogProgress, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = match cli::parse_args(std::env::args().skip(1)).wrap_err("invalid arguments")? {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    log::set_verbosity(opts.verbosity);
    let report = runner::run(&opts, Some(&mut LogProgress)).wrap_err("audit failed")?;
    println!("{report}");
    Ok(())
}
