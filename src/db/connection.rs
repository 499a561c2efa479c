//! Database connection management.

use std::error::Error as _;

use postgres::types::ToSql;
use postgres::{Client, Config, NoTls};
use tracing::{debug, info};

use super::backend::{DatabaseBackend, QueryResult, Row, SqlParam, Statement};
use super::value::CellText;
use super::DbError;

pub const DEFAULT_HOST: &str = "localhost";

/// Everything needed to open the session's single connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl ConnectionConfig {
    /// Connection URL shown to the user. Never includes the password.
    pub fn display_url(&self) -> String {
        format!("postgresql://{}:{}/{}", self.host, self.port, self.database)
    }

    fn to_pg_config(&self) -> Config {
        let mut config = Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user);
        if !self.password.is_empty() {
            config.password(&self.password);
        }
        config
    }
}

/// PostgreSQL backend holding one blocking client for the process lifetime.
pub struct PostgresBackend {
    client: Option<Client>,
    target: String,
}

impl PostgresBackend {
    /// Open exactly one physical connection.
    pub fn connect(config: &ConnectionConfig) -> Result<Self, DbError> {
        let target = config.display_url();
        let client = config
            .to_pg_config()
            .connect(NoTls)
            .map_err(|e| DbError::ConnectFailed {
                target: target.clone(),
                message: server_message(&e),
            })?;
        info!(target = %target, user = %config.user, "connected");

        Ok(Self {
            client: Some(client),
            target,
        })
    }

    fn client(&mut self) -> Result<&mut Client, DbError> {
        self.client.as_mut().ok_or(DbError::Closed)
    }
}

/// The server's own wording for `err`.
///
/// `postgres::Error` displays server-side failures as a bare `db error`; the
/// text users need lives in the attached `DbError`.
fn server_message(err: &postgres::Error) -> String {
    if let Some(db) = err.as_db_error() {
        return match db.detail() {
            Some(detail) => format!("{}\nDETAIL: {}", db.message(), detail),
            None => db.message().to_string(),
        };
    }
    match err.source() {
        Some(source) => format!("{}: {}", err, source),
        None => err.to_string(),
    }
}

fn query_failed(err: postgres::Error) -> DbError {
    DbError::QueryFailed {
        message: server_message(&err),
    }
}

fn bound_params(params: &[SqlParam]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|param| match param {
            SqlParam::Int(value) => value as &(dyn ToSql + Sync),
            SqlParam::Text(value) => value as &(dyn ToSql + Sync),
        })
        .collect()
}

fn render_row(row: &postgres::Row) -> Result<Row, DbError> {
    (0..row.len())
        .map(|idx| {
            row.try_get::<_, Option<CellText>>(idx)
                .map(|cell| cell.map(CellText::into_string))
                .map_err(query_failed)
        })
        .collect()
}

impl DatabaseBackend for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        "Postgres"
    }

    fn execute(&mut self, statement: &Statement) -> Result<u64, DbError> {
        debug!(sql = %statement.sql, params = statement.params.len(), "execute");
        let params = bound_params(&statement.params);
        self.client()?
            .execute(statement.sql.as_str(), &params)
            .map_err(query_failed)
    }

    fn query(&mut self, statement: &Statement) -> Result<QueryResult, DbError> {
        debug!(sql = %statement.sql, params = statement.params.len(), "query");
        let params = bound_params(&statement.params);
        let client = self.client()?;

        // Prepare first so the headers are known even when no row comes back
        let prepared = client.prepare(&statement.sql).map_err(query_failed)?;
        let headers = prepared
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        let rows = client.query(&prepared, &params).map_err(query_failed)?;
        let rows = rows.iter().map(render_row).collect::<Result<Vec<_>, _>>()?;

        Ok(QueryResult { headers, rows })
    }

    fn batch_execute(&mut self, script: &str) -> Result<(), DbError> {
        debug!(sql = %script, "batch");
        self.client()?.batch_execute(script).map_err(query_failed)
    }

    fn close(&mut self) {
        if let Some(client) = self.client.take() {
            // Errors while closing are ignored; the socket is gone either way
            let _ = client.close();
            info!(target = %self.target, "disconnected");
        }
    }
}

impl Drop for PostgresBackend {
    fn drop(&mut self) {
        self.close();
    }
}
