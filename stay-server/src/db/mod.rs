//! Database access layer

pub mod bookings;
pub mod contacts;
pub mod lead_guests;
pub mod payments;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection, PgPool};

use crate::BoxError;
use crate::config::Config;

/// SQLSTATE for "database does not exist"
const INVALID_CATALOG_NAME: &str = "3D000";
/// SQLSTATE for "database already exists"
const DUPLICATE_DATABASE: &str = "42P04";

/// Connect the pool, creating the database on first run, then apply migrations.
pub async fn connect(config: &Config) -> Result<PgPool, BoxError> {
    let options = config.database.connect_options()?;
    let pool_options = PgPoolOptions::new().max_connections(config.database_max_connections);

    let pool = match pool_options.clone().connect_with(options.clone()).await {
        Ok(pool) => pool,
        Err(e) if has_code(&e, INVALID_CATALOG_NAME) => {
            let database = options
                .get_database()
                .ok_or("database name missing from connection settings")?
                .to_string();
            tracing::warn!(%database, "Database does not exist, creating it");
            create_database(&options, &database).await?;
            pool_options.connect_with(options).await?
        }
        Err(e) => return Err(e.into()),
    };

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database schema ready");

    Ok(pool)
}

/// `CREATE DATABASE` through the `postgres` maintenance database.
async fn create_database(options: &PgConnectOptions, database: &str) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect_with(&options.clone().database("postgres")).await?;
    let sql = format!("CREATE DATABASE {}", quote_ident(database));
    let result = match sqlx::query(&sql).execute(&mut conn).await {
        Ok(_) => Ok(()),
        Err(e) if has_code(&e, DUPLICATE_DATABASE) => Ok(()),
        Err(e) => Err(e),
    };
    conn.close().await?;
    result
}

fn has_code(e: &sqlx::Error, code: &str) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|c| c == code)
}

/// Quote a SQL identifier, doubling embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
