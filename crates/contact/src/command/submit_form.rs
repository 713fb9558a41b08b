use portfolio_db::table;
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::{Validate, ValidationErrors};

use crate::ContactMessage;

/// Raw submission as received from the client. Absent and empty values are
/// both rejected.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct SubmitFormInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl super::Command {
    pub async fn submit_form(&self, input: SubmitFormInput) -> crate::Result<ContactMessage> {
        input.validate()?;

        let (Some(name), Some(email), Some(subject), Some(message)) =
            (input.name, input.email, input.subject, input.message)
        else {
            return Err(ValidationErrors::new().into());
        };

        let contact = ContactMessage {
            id: Ulid::new().to_string(),
            name,
            email,
            subject,
            message,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };

        let statement = sea_query::Query::insert()
            .into_table(table::ContactMessage::Table)
            .columns([
                table::ContactMessage::Id,
                table::ContactMessage::Name,
                table::ContactMessage::Email,
                table::ContactMessage::Subject,
                table::ContactMessage::Message,
                table::ContactMessage::CreatedAt,
            ])
            .values_panic([
                contact.id.to_owned().into(),
                contact.name.to_owned().into(),
                contact.email.to_owned().into(),
                contact.subject.to_owned().into(),
                contact.message.to_owned().into(),
                contact.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(contact)
    }
}
