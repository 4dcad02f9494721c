mod renderer;

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: vitrine-tui <website.config.json>");
        std::process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let data = std::fs::read(&path)?;
    let content = vitrine_core::content::parse_site_content(&data)?;

    renderer::render_tui(&content)?;
    Ok(())
}
