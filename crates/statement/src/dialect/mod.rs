//! Defines the `Dialect` trait for database-specific SQL syntax.
//!
//! Builders never look at the dialect. Everything that differs between
//! backends (placeholder spelling, paging, identity retrieval, function
//! names, join support) is answered here at render time.

use crate::{
    ast::{
        common::{JoinKind, OrderByExpr},
        expr::LogicalFunction,
        select::Page,
    },
    error::BuildError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

pub mod access;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod sqlite;
pub mod sqlserver;

pub trait Dialect: Send + Sync + fmt::Debug {
    fn kind(&self) -> DialectKind;

    /// Returns the name of the dialect (e.g., "SQL Server", "MySQL").
    fn name(&self) -> String;

    /// Returns the placeholder for a bound parameter.
    ///
    /// - SQL Server uses `@PN_IDX_0`
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn placeholder(&self, name: &str, ordinal: usize) -> String;

    /// Maps a logical function onto the backend's spelling. Niladic
    /// functions return the complete expression.
    fn translate_function(&self, function: LogicalFunction) -> &'static str;

    /// The expression yielding the identity generated by the last insert.
    fn identity_expression(&self) -> Result<&'static str, BuildError>;

    /// A standalone query reading the last generated identity.
    fn identity_query(&self) -> Result<String, BuildError> {
        Ok(format!("SELECT {}", self.identity_expression()?))
    }

    fn supports_join(&self, _kind: JoinKind) -> bool {
        true
    }

    /// Assembles the final SELECT text, applying the paging window.
    fn render_select(&self, parts: &SelectParts<'_>) -> Result<String, BuildError> {
        let mut sql = parts.plain();
        sql.push_str(&self.limit_clause(parts.page));
        Ok(sql)
    }

    /// Trailing `LIMIT`/`OFFSET` for dialects that page with a suffix.
    fn limit_clause(&self, page: Page) -> String {
        match (page.size, page.start) {
            (0, 0) => String::new(),
            (size, 0) => format!(" LIMIT {size}"),
            (0, start) => format!(" OFFSET {start}"),
            (size, start) => format!(" LIMIT {size} OFFSET {start}"),
        }
    }
}

/// A SELECT split into the pieces paging syntaxes rearrange.
///
/// `fields` and `body` are already rendered, with their placeholders
/// numbered fields first. Every dialect keeps that textual order.
#[derive(Debug, Clone)]
pub struct SelectParts<'a> {
    pub distinct: bool,
    pub fields: String,
    /// `FROM ...` through `HAVING ...`, without ORDER BY.
    pub body: String,
    pub order_by: &'a [OrderByExpr],
    pub page: Page,
}

impl SelectParts<'_> {
    pub fn head(&self) -> &'static str {
        if self.distinct {
            "SELECT DISTINCT "
        } else {
            "SELECT "
        }
    }

    /// ` ORDER BY A ASC,B DESC`, or empty.
    pub fn order_clause(&self) -> String {
        self.order_clause_with(false)
    }

    /// The ORDER BY clause with every direction flipped.
    pub fn reversed_order_clause(&self) -> String {
        self.order_clause_with(true)
    }

    pub fn order_list(&self, reversed: bool) -> String {
        self.order_by
            .iter()
            .map(|o| {
                let dir = if reversed {
                    o.direction.reversed()
                } else {
                    o.direction
                };
                format!("{} {}", o.column, dir.keyword())
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The SELECT with its ORDER BY but no paging applied.
    pub fn plain(&self) -> String {
        self.with_prefix("")
    }

    /// `SELECT [DISTINCT ]<prefix><fields> <body>[ ORDER BY ...]`
    pub fn with_prefix(&self, prefix: &str) -> String {
        format!(
            "{}{}{} {}{}",
            self.head(),
            prefix,
            self.fields,
            self.body,
            self.order_clause()
        )
    }

    fn order_clause_with(&self, reversed: bool) -> String {
        if self.order_by.is_empty() {
            String::new()
        } else {
            format!(" ORDER BY {}", self.order_list(reversed))
        }
    }
}

/// The closed set of supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    SqlServer,
    MySql,
    Postgres,
    Sqlite,
    Oracle,
    Access,
}

impl DialectKind {
    pub const ALL: [DialectKind; 6] = [
        DialectKind::SqlServer,
        DialectKind::MySql,
        DialectKind::Postgres,
        DialectKind::Sqlite,
        DialectKind::Oracle,
        DialectKind::Access,
    ];

    pub fn dialect(self) -> Arc<dyn Dialect> {
        match self {
            DialectKind::SqlServer => Arc::new(sqlserver::SqlServer),
            DialectKind::MySql => Arc::new(mysql::MySql),
            DialectKind::Postgres => Arc::new(postgres::Postgres),
            DialectKind::Sqlite => Arc::new(sqlite::Sqlite),
            DialectKind::Oracle => Arc::new(oracle::Oracle),
            DialectKind::Access => Arc::new(access::Access),
        }
    }

    /// Resolves a provider identifier, either an ADO.NET-style invariant
    /// name or a short name. Matching ignores ASCII case.
    pub fn from_provider(provider: &str) -> Option<Self> {
        let normalized = provider.trim().to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "system.data.sqlclient" | "microsoft.data.sqlclient" | "mssql" | "sqlserver" => {
                DialectKind::SqlServer
            }
            "mysql.data.mysqlclient" | "mysqlconnector" | "mysql" => DialectKind::MySql,
            "npgsql" | "postgres" | "postgresql" => DialectKind::Postgres,
            "system.data.sqlite" | "microsoft.data.sqlite" | "sqlite" => DialectKind::Sqlite,
            "system.data.oracleclient"
            | "oracle.dataaccess.client"
            | "oracle.manageddataaccess.client"
            | "oracle" => DialectKind::Oracle,
            "system.data.oledb" | "access" => DialectKind::Access,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialectKind::SqlServer => "sqlserver",
            DialectKind::MySql => "mysql",
            DialectKind::Postgres => "postgres",
            DialectKind::Sqlite => "sqlite",
            DialectKind::Oracle => "oracle",
            DialectKind::Access => "access",
        };
        f.write_str(name)
    }
}
