use anyhow::Result;
use owo_colors::OwoColorize;

use crate::session::Session;

pub async fn run(session: &mut Session, id: String) -> Result<()> {
    let removed = session.delete(&id).await?;

    println!(
        "{}",
        format!("Deleted event #{}: {}", id, removed.title).red()
    );

    Ok(())
}
