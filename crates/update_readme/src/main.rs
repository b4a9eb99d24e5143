use std::path::Path;

use anyhow::Result;
use update_readme::update_readme;

fn main() -> Result<()> {
    update_readme(Path::new("README.md"))?;
    println!("README.md updated successfully.");
    Ok(())
}
