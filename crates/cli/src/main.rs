use std::io;

use anyhow::Context;
use backpack_cli::Session;

fn main() -> anyhow::Result<()> {
    backpack_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    session.run().context("console session failed")?;
    Ok(())
}
