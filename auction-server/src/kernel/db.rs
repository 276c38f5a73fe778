use {
    crate::config::server,
    anyhow::anyhow,
    sqlx::{
        migrate::Migrator,
        postgres::PgPoolOptions,
        Pool,
        Postgres,
    },
};

pub type DB = Pool<Postgres>;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn connect(options: &server::DatabaseOptions) -> anyhow::Result<DB> {
    PgPoolOptions::new()
        .max_connections(options.database_max_connections)
        .connect(&options.database_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to the database: {:?}", err))
}

pub async fn migrate(db: &DB) -> anyhow::Result<()> {
    MIGRATOR
        .run(db)
        .await
        .map_err(|err| anyhow!("Failed to run database migrations: {:?}", err))
}
