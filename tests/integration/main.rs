//! PostgreSQL-backed integration tests.
//!
//! Set `ACTORDESK_TEST_DATABASE_URL` to a scratch database to run them;
//! every test truncates the `actor` table. Without it they pass vacuously.

mod actor_test;
mod export_test;
mod helpers;
