//! Seed the database with sample customers.
//!
//! Goes through the real service layer so seeded data obeys the same rules
//! as API traffic (email uniqueness included). Re-running is safe: sample
//! emails that already exist are skipped.

use secrecy::SecretString;

use patron_core::Email;
use patron_server::config::StorageBackend;
use patron_server::db::{self, build_dao};
use patron_server::models::CustomerRegistration;
use patron_server::services::{CustomerError, CustomerService};

const SAMPLE_NAMES: &[&str] = &[
    "Ada Lovelace",
    "Grace Hopper",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Tony Hoare",
    "Margaret Hamilton",
    "Donald Knuth",
    "Frances Allen",
];

/// Insert `count` sample customers.
///
/// # Errors
///
/// Returns an error when `DATABASE_URL` is unset, the database is
/// unreachable, or an insert fails for a reason other than a duplicate
/// email.
pub async fn run(count: u32) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    let service = CustomerService::new(build_dao(StorageBackend::Sql, pool));

    let mut inserted = 0_u32;
    let mut skipped = 0_u32;

    for (i, name) in SAMPLE_NAMES.iter().cycle().take(count as usize).enumerate() {
        let email = Email::parse(&format!("sample-{i}@patron.test"))?;
        let registration = CustomerRegistration {
            name: (*name).to_owned(),
            age: 20 + (i as i32 % 40),
            email,
        };

        match service.register(registration).await {
            Ok(()) => inserted += 1,
            Err(CustomerError::EmailTaken(email)) => {
                tracing::info!(%email, "Already present, skipping");
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(inserted, skipped, "Seed complete");
    Ok(())
}
