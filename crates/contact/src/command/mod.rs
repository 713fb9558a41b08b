use sqlx::SqlitePool;

mod submit_form;

pub use submit_form::SubmitFormInput;

#[derive(Clone)]
pub struct Command(pub SqlitePool);
