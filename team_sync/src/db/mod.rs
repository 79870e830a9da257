//! Database utilities: tuned SQLite connections and embedded migrations.
//!
//! - [`connection::connect_sqlite`] opens a connection with WAL,
//!   `foreign_keys=ON`, and a 5000ms busy timeout.
//! - [`migrate::run_sqlite`] applies the embedded Diesel migrations.

pub mod connection;
pub mod migrate;
