use anyhow::Result;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::config::Config;

/// Print stored contact submissions, most recent first
pub async fn list_messages(config: Config, limit: u64) -> Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    let query = portfolio_contact::Query(pool.clone());

    let total = query.count().await?;
    let messages = query.list(limit).await?;

    println!("{} of {} contact messages", messages.len(), total);

    for contact in messages {
        let created_at =
            OffsetDateTime::from_unix_timestamp(contact.created_at)?.format(&Rfc3339)?;
        println!("\n[{}] {}", contact.id, created_at);
        println!("{}", contact.summary());
    }

    pool.close().await;

    Ok(())
}
