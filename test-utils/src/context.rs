use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Pool size for on-disk databases, large enough for transactions to overlap.
const ON_DISK_MAX_CONNECTIONS: u32 = 8;

/// Test context holding the SQLite connection for a single test.
///
/// By default the database lives in memory on a single pooled connection. An on-disk
/// context keeps its database file in a temporary directory that is removed when the
/// context is dropped, and allows several connections at once.
#[derive(Default)]
pub struct TestContext {
    /// Database connection, created lazily by `database()`.
    pub db: Option<DatabaseConnection>,
    /// Directory holding the database file of an on-disk context.
    dir: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self { db: None, dir: None }
    }

    /// Creates a test context backed by a database file in a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose database will be created on first use
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn on_disk() -> Result<Self, TestError> {
        Ok(Self {
            db: None,
            dir: Some(TempDir::new()?),
        })
    }

    /// Gets or creates the database connection.
    ///
    /// The connection persists for the lifetime of this test context, so every call
    /// returns a handle to the same database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => match &self.dir {
                Some(dir) => {
                    let path = dir.path().join("test.db");
                    let mut opt = ConnectOptions::new(format!(
                        "sqlite://{}?mode=rwc",
                        path.display()
                    ));
                    opt.max_connections(ON_DISK_MAX_CONNECTIONS)
                        .sqlx_logging(false);

                    Database::connect(opt).await?
                }
                None => Database::connect("sqlite::memory:").await?,
            },
        };

        Ok(&*self.db.insert(db))
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
