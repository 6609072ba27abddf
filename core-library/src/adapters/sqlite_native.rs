//! Native SQLite Database Adapter
//!
//! Implements the read-only `DatabaseAdapter` trait on top of a
//! `sqlx::Pool<Sqlite>`.
//!
//! Driver errors are classified on the way out: connection-level failures
//! become `BridgeError::Unavailable`, everything else becomes
//! `BridgeError::DatabaseError`.

use async_trait::async_trait;
use bridge_traits::database::{
    DatabaseAdapter, DatabaseConfig, DatabaseStatistics, QueryRow, QueryValue,
};
use bridge_traits::error::{BridgeError, Result};
use sqlx::{Column, Pool, Row, Sqlite};
use std::collections::HashMap;
use tracing::{debug, info};

/// Native SQLite implementation of DatabaseAdapter
pub struct SqliteAdapter {
    pool: Pool<Sqlite>,
}

impl SqliteAdapter {
    /// Open the corpus described by `config` and wrap the resulting pool
    ///
    /// # Errors
    ///
    /// Fails with `StorageUnavailable` or `CorpusCorrupt`, see
    /// [`create_pool`](crate::db::create_pool).
    pub async fn connect(config: &DatabaseConfig) -> crate::Result<Self> {
        let pool = crate::db::create_pool(config).await?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an already configured pool
    pub fn from_pool(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Convert a sqlx Row to a QueryRow (HashMap)
    fn row_to_query_row(row: &sqlx::sqlite::SqliteRow) -> QueryRow {
        let mut result = HashMap::new();

        for column in row.columns() {
            let column_name = column.name().to_string();

            let value = if let Ok(v) = row.try_get::<Option<i64>, _>(column.ordinal()) {
                v.map(QueryValue::Integer).unwrap_or(QueryValue::Null)
            } else if let Ok(v) = row.try_get::<Option<f64>, _>(column.ordinal()) {
                v.map(QueryValue::Real).unwrap_or(QueryValue::Null)
            } else if let Ok(v) = row.try_get::<Option<String>, _>(column.ordinal()) {
                v.map(QueryValue::Text).unwrap_or(QueryValue::Null)
            } else if let Ok(v) = row.try_get::<Option<Vec<u8>>, _>(column.ordinal()) {
                v.map(QueryValue::Blob).unwrap_or(QueryValue::Null)
            } else {
                QueryValue::Null
            };

            result.insert(column_name, value);
        }

        result
    }

    /// Bind positional parameters onto a sqlx query
    fn bind_params<'q>(
        query: sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
        params: &'q [QueryValue],
    ) -> sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
        let mut query = query;
        for param in params {
            query = match param {
                QueryValue::Null => query.bind(None::<i64>),
                QueryValue::Integer(i) => query.bind(i),
                QueryValue::Real(r) => query.bind(r),
                QueryValue::Text(s) => query.bind(s.as_str()),
                QueryValue::Blob(b) => query.bind(b.as_slice()),
            };
        }
        query
    }

    fn classify(context: &str, err: sqlx::Error) -> BridgeError {
        let message = format!("{}: {}", context, err);
        if crate::error::is_unavailable(&err) {
            BridgeError::Unavailable(message)
        } else {
            BridgeError::DatabaseError(message)
        }
    }
}

#[async_trait]
impl DatabaseAdapter for SqliteAdapter {
    async fn close(&self) -> Result<()> {
        info!("Closing corpus connection pool");
        self.pool.close().await;
        Ok(())
    }

    async fn query(&self, query: &str, params: &[QueryValue]) -> Result<Vec<QueryRow>> {
        debug!(query = %query, param_count = params.len(), "Executing query");

        let sqlx_query = Self::bind_params(sqlx::query(query), params);

        let rows = sqlx_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::classify("Query failed", e))?;

        let result: Vec<QueryRow> = rows.iter().map(Self::row_to_query_row).collect();

        debug!(row_count = result.len(), "Query executed successfully");
        Ok(result)
    }

    async fn query_one(&self, query: &str, params: &[QueryValue]) -> Result<QueryRow> {
        debug!(query = %query, param_count = params.len(), "Executing query_one");

        let row = Self::bind_params(sqlx::query(query), params)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::classify("Query one failed", e))?;

        Ok(Self::row_to_query_row(&row))
    }

    async fn get_statistics(&self) -> Result<DatabaseStatistics> {
        let size_query =
            "SELECT page_count * page_size as size FROM pragma_page_count(), pragma_page_size()";
        let database_size_bytes = self
            .query_one(size_query, &[])
            .await
            .ok()
            .and_then(|row| row.get("size").and_then(|v| v.as_i64()))
            .map(|v| v as u64);

        Ok(DatabaseStatistics {
            total_connections: self.pool.size(),
            idle_connections: self.pool.num_idle() as u32,
            database_size_bytes,
        })
    }
}
