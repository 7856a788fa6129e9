use anyhow::{Context, Result};
use evcal_core::{Category, Event, date};
use owo_colors::OwoColorize;

use crate::session::Session;

pub async fn run(
    session: &mut Session,
    id: String,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let current = session
        .agenda()
        .get(&id)
        .with_context(|| format!("Event not found: {}", id))?
        .clone();

    let category: Category = match category {
        Some(key) => key.parse()?,
        None => current.category(),
    };
    let start = match start {
        Some(input) => date::parse_day_month_year(&input)?,
        None => current.start,
    };
    let end = match end {
        Some(input) => date::parse_day_month_year(&input)?,
        None => current.end,
    };
    let title = title.unwrap_or(current.title);

    // Colors follow the category, so the replacement is drafted fresh
    let replacement = Event::new(title, start, end, category);
    session.edit(&id, replacement).await?;

    println!("{}", format!("Updated event #{}", id).yellow());

    Ok(())
}
