use sqlx_migrator::{Info, Migrator, vec_box};

mod m0_1;
pub mod table;

pub use sqlx_migrator::migrator::{Migrate, Plan};

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec_box![m0_1::M0_1])?;

    Ok(migrator)
}
