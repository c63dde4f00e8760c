// SQL parsing
//
// Thin adapter over sqlparser-rs. The parser owns the AST; this module only
// turns its output into a JSON-serializable document.

use log::debug;
use serde::Serialize;
use sqlparser::ast::Statement;
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

use crate::error::{Result, Sql2JsonError};

/// Parse tree of a whole SQL script
#[derive(Debug, Serialize)]
pub struct SqlDocument {
    pub stmts: Vec<Statement>,
}

impl SqlDocument {
    /// Minified JSON, exactly as serde emits it
    pub fn to_minified_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Parse a SQL script into its document form. The parser's message is passed
/// through untouched on failure.
pub fn parse_sql(sql: &str) -> Result<SqlDocument> {
    let stmts = Parser::parse_sql(&PostgreSqlDialect {}, sql)
        .map_err(|e| Sql2JsonError::Parse(e.to_string()))?;
    debug!("Parsed {} statement(s)", stmts.len());
    Ok(SqlDocument { stmts })
}
