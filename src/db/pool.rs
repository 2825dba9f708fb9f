//! MySQL query gateway: one lazily created pool shared for the process lifetime.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use chrono::NaiveDate;
use sqlx::mysql::{MySqlArguments, MySqlConnectOptions, MySqlPoolOptions, MySqlQueryResult, MySqlRow};
use sqlx::{Arguments, FromRow, MySqlPool};
use tracing::{debug, error, info};

use crate::config::DbConfig;
use crate::error::{AppError, AppResult};

/// Positional statement parameter, bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(Option<i64>),
    Text(Option<String>),
    Date(Option<NaiveDate>),
}

impl Param {
    fn add_to(self, args: &mut MySqlArguments) {
        match self {
            Param::Int(v) => args.add(v),
            Param::Text(v) => args.add(v),
            Param::Date(v) => args.add(v),
        }
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Int(Some(v))
    }
}

impl From<Option<i64>> for Param {
    fn from(v: Option<i64>) -> Self {
        Param::Int(v)
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Text(Some(v))
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Text(Some(v.to_string()))
    }
}

impl From<Option<String>> for Param {
    fn from(v: Option<String>) -> Self {
        Param::Text(v)
    }
}

impl From<NaiveDate> for Param {
    fn from(v: NaiveDate) -> Self {
        Param::Date(Some(v))
    }
}

impl From<Option<NaiveDate>> for Param {
    fn from(v: Option<NaiveDate>) -> Self {
        Param::Date(v)
    }
}

fn arguments(params: Vec<Param>) -> MySqlArguments {
    let mut args = MySqlArguments::default();
    for param in params {
        param.add_to(&mut args);
    }
    args
}

/// Shared access to the database. Cloning shares the same pool slot.
#[derive(Clone)]
pub struct Database {
    options: MySqlConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
    pool: Arc<OnceLock<MySqlPool>>,
}

impl Database {
    pub fn new(options: MySqlConnectOptions, max_connections: u32, acquire_timeout: Duration) -> Self {
        Self {
            options,
            max_connections,
            acquire_timeout,
            pool: Arc::new(OnceLock::new()),
        }
    }

    pub fn from_config(config: &DbConfig) -> Self {
        Self::new(
            config.connect_options(),
            config.max_connections,
            config.acquire_timeout,
        )
    }

    /// Create the pool if it does not exist yet. Idempotent; concurrent first
    /// callers all observe the same pool.
    pub fn initialize(&self) {
        self.get_connection();
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.get().is_some()
    }

    /// The shared pool, created on first use. Connections open lazily, so this
    /// never fails; errors surface when a statement runs.
    pub fn get_connection(&self) -> &MySqlPool {
        self.pool.get_or_init(|| {
            info!(
                max_connections = self.max_connections,
                "creating database pool"
            );
            MySqlPoolOptions::new()
                .max_connections(self.max_connections)
                .acquire_timeout(self.acquire_timeout)
                .connect_lazy_with(self.options.clone())
        })
    }

    /// Run a statement and decode every returned row.
    pub async fn execute_query<T>(&self, statement: &str, params: Vec<Param>) -> AppResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        debug!(statement, "query");
        sqlx::query_as_with::<_, T, _>(statement, arguments(params))
            .fetch_all(self.get_connection())
            .await
            .map_err(|e| failed(statement, e))
    }

    /// Run a statement expected to return at most one row.
    pub async fn fetch_optional<T>(&self, statement: &str, params: Vec<Param>) -> AppResult<Option<T>>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        debug!(statement, "query");
        sqlx::query_as_with::<_, T, _>(statement, arguments(params))
            .fetch_optional(self.get_connection())
            .await
            .map_err(|e| failed(statement, e))
    }

    /// Run a write statement (INSERT / UPDATE / DELETE).
    pub async fn execute_statement(
        &self,
        statement: &str,
        params: Vec<Param>,
    ) -> AppResult<MySqlQueryResult> {
        debug!(statement, "execute");
        sqlx::query_with(statement, arguments(params))
            .execute(self.get_connection())
            .await
            .map_err(|e| failed(statement, e))
    }
}

fn failed(statement: &str, e: sqlx::Error) -> AppError {
    error!(statement, error = %e, "statement failed");
    AppError::Db(e)
}
