use std::{path::PathBuf, str::FromStr};

use portfolio_contact::SubmitFormInput;
use portfolio_db::{Migrate, Plan};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    portfolio_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub fn input(name: &str) -> SubmitFormInput {
    SubmitFormInput {
        name: Some(name.to_owned()),
        email: Some(format!("{name}@portfolio.localhost")),
        subject: Some("Hi".to_owned()),
        message: Some("Hello".to_owned()),
    }
}

#[allow(dead_code)]
pub async fn create_submit_all(
    cmd: &portfolio_contact::Command,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let name = name.into();
        let contact = cmd.submit_form(input(&name)).await?;
        ids.push(contact.id);
    }

    Ok(ids)
}
