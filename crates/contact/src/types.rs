use sqlx::prelude::FromRow;

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: i64,
}

impl ContactMessage {
    /// Plain-text summary written to the operational log and used as the
    /// notification email body.
    pub fn summary(&self) -> String {
        format!(
            "New Contact Form Submission\n\n\
             Name: {}\n\
             Email: {}\n\
             Subject: {}\n\n\
             Message:\n\
             {}\n",
            self.name, self.email, self.subject, self.message
        )
    }
}
