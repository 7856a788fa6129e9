use anyhow::Result;
use chrono::{Duration, NaiveDate};
use evcal_core::date;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let mut events: Vec<_> = session.agenda().events().iter().collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Sort by start date for display; ties keep list order
    events.sort_by_key(|event| event.start);

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in events {
        if current_date != Some(event.start) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(event.start).bold());
            current_date = Some(event.start);
        }

        let id_tag = format!("#{}", event.id.as_deref().unwrap_or("-"));
        let type_tag = format!("[{}]", event.category().label());

        if event.end != event.start {
            let until = format!("until {}", date::format_day_month_year(event.end));
            println!(
                "  {} {} {} {}",
                id_tag.dimmed(),
                event.title,
                until.dimmed(),
                type_tag.dimmed()
            );
        } else {
            println!("  {} {} {}", id_tag.dimmed(), event.title, type_tag.dimmed());
        }
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed 25 Feb 2026")
fn format_date_label(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%a %-d %b %Y").to_string()
    }
}
