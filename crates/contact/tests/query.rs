use portfolio_contact::Query;
use temp_dir::TempDir;

mod helpers;

async fn insert_at(pool: &sqlx::SqlitePool, id: &str, created_at: i64) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO contact_message (id, name, email, subject, message, created_at) VALUES (?, 'n', 'e', 's', 'm', ?)",
    )
    .bind(id)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_list_most_recent_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;

    insert_at(&pool, "old", 100).await?;
    insert_at(&pool, "newest", 300).await?;
    insert_at(&pool, "middle", 200).await?;

    let query = Query(pool);
    let ids = query
        .list(10)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["newest", "middle", "old"]);

    let ids = query
        .list(2)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["newest", "middle"]);

    Ok(())
}

#[tokio::test]
async fn test_find_unknown_and_count() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = portfolio_contact::Command(pool.clone());
    let query = Query(pool);

    assert!(query.find("unknown").await?.is_none());
    assert_eq!(query.count().await?, 0);

    let ids = helpers::create_submit_all(&command, vec!["john", "jane", "joe"]).await?;
    assert_eq!(query.count().await?, 3);

    for id in ids {
        assert!(query.find(&id).await?.is_some());
    }

    Ok(())
}
