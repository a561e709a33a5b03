/// Isolated Postgres database per test, dropped again when the test completes
///
/// Connects to the server named by TEST_DATABASE_URL, creates a uniquely named
/// database, applies the embedded migrations and wires the services to it.
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use university_lib::shared::infrastructure::{Database, PgUnitOfWork};
use university_lib::AcademicServices;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct TestDb {
    server_url: String,
    name: String,
    database: Arc<Database>,
}

impl TestDb {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "university_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let server_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let mut conn = PgConnection::establish(&server_url)
            .expect("Failed to connect to test database server");
        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Replace the database name (everything after the last '/')
        let isolated_url = match server_url.rfind('/') {
            Some(last_slash) => format!("{}/{}", &server_url[..last_slash], name),
            None => panic!("Invalid TEST_DATABASE_URL format: {}", server_url),
        };

        let pool = r2d2::Pool::builder()
            .max_size(5)
            .test_on_check_out(true)
            .build(ConnectionManager::<PgConnection>::new(isolated_url))
            .expect("Failed to build test database connection pool");

        let database = Arc::new(Database::from_pool(pool));
        database
            .run_migrations()
            .expect("Unable to migrate the test database");

        Self {
            server_url,
            name,
            database,
        }
    }

    pub fn services(&self) -> AcademicServices<PgUnitOfWork> {
        AcademicServices::new(Arc::new(PgUnitOfWork::new(Arc::clone(&self.database))))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for TestDb {
    /// Leaves the database in place when the test panicked, for debugging
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic - database preserved for debugging",
                self.name
            );
            return;
        }

        let mut conn = match PgConnection::establish(&self.server_url) {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("Failed to connect for cleanup of '{}': {}", self.name, e);
                return;
            }
        };

        let _ = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn);

        let dropped =
            sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn);
        if let Err(e) = dropped {
            eprintln!("Failed to drop test database '{}': {}", self.name, e);
        }
    }
}
