use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Args,
    Parser,
};

pub mod auction;
pub mod server;

// `Options` is a struct definition to provide clean command-line args for the auction expiry server.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction expiry server.
    Run(RunOptions),
    /// Apply the database migrations and exit.
    Migrate(MigrateOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    #[command(flatten)]
    pub database: server::DatabaseOptions,

    #[command(flatten)]
    pub auction: auction::Options,
}

#[derive(Args, Clone, Debug)]
pub struct MigrateOptions {
    #[command(flatten)]
    pub database: server::DatabaseOptions,
}
