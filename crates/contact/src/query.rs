use portfolio_db::table;
use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::ContactMessage;

const COLUMNS: [table::ContactMessage; 6] = [
    table::ContactMessage::Id,
    table::ContactMessage::Name,
    table::ContactMessage::Email,
    table::ContactMessage::Subject,
    table::ContactMessage::Message,
    table::ContactMessage::CreatedAt,
];

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> crate::Result<Option<ContactMessage>> {
        let statment = sea_query::Query::select()
            .columns(COLUMNS)
            .from(table::ContactMessage::Table)
            .and_where(Expr::col(table::ContactMessage::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactMessage, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Most recent submissions first.
    pub async fn list(&self, limit: u64) -> crate::Result<Vec<ContactMessage>> {
        let statment = sea_query::Query::select()
            .columns(COLUMNS)
            .from(table::ContactMessage::Table)
            .order_by(table::ContactMessage::CreatedAt, Order::Desc)
            .order_by(table::ContactMessage::Id, Order::Desc)
            .limit(limit)
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactMessage, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn count(&self) -> crate::Result<i64> {
        let statment = sea_query::Query::select()
            .expr(Func::count(Expr::col(table::ContactMessage::Id)))
            .from(table::ContactMessage::Table)
            .to_owned();

        let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
        let (total,): (i64,) = sqlx::query_as_with(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(total)
    }
}
