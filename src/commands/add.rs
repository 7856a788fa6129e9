use anyhow::Result;
use evcal_core::{Category, Event, date};
use owo_colors::OwoColorize;

use crate::session::Session;

pub async fn run(
    session: &mut Session,
    title: String,
    start: String,
    end: String,
    category: String,
) -> Result<()> {
    let start = date::parse_day_month_year(&start)?;
    let end = date::parse_day_month_year(&end)?;
    let category: Category = category.parse()?;

    let draft = Event::new(title, start, end, category);
    let title = draft.title.clone();
    let id = session.add(draft).await?;

    println!("{}", format!("Created event #{}: {}", id, title).green());

    Ok(())
}
