use anyhow::Result;
use clap::Parser;
use log::debug;
use std::process;

mod cli;
mod error;
mod solver;
use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let polynomial = match cli.polynomial() {
        Ok(polynomial) => polynomial,
        Err(e) if e.is_usage() => {
            eprintln!("{}", e);
            eprintln!("{}", cli::usage());
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let (z0, z1) = polynomial.roots();
    for z in [z0, z1] {
        debug!("residual at {}: {}", z, polynomial.eval(z).norm());
    }

    println!("{}", polynomial.display(cli.variable));
    // Roots are always reported against x, whatever the display variable
    println!("x = {}", z0);
    println!("x = {}", z1);

    Ok(())
}
