use anyhow::Result;
use evcal_core::Category;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    println!("{}", "TYPES".bold());

    for category in Category::ALL {
        println!(
            "  {:<10} {:<18} {}",
            category.key(),
            category.label(),
            category.color().dimmed()
        );
    }

    Ok(())
}
