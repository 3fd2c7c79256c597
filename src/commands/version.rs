use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("hostprobe version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
