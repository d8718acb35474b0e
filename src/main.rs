use std::io;

use anyhow::Result;
use tracing::info;

use ichess_console::{Command, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("ichess starting");

    println!("====================================");
    println!("|        ichess {:<19}|", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    println!("Type `help` for the list of commands.");

    let mut session = Session::new();
    session.execute(Command::Show, &mut io::stdout())?;
    session.run(io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}
