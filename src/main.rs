use anyhow::Context;

fn main() -> anyhow::Result<()> {
    fundfish::run().context("fundfish command failed")?;
    Ok(())
}
