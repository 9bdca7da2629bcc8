use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::builder::raw::{Binding, Escaper, Raw};
use crate::builder::value::{Args, Value};
use crate::error::{Error, Result};
use crate::registry::OperationRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Column {
    Ident(String),
    Raw(Raw),
}

/// Compiled SQL plus its bindings, in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub sql: String,
    pub bindings: Vec<Value>,
}

/// Fluent SELECT builder.
///
/// Methods take `self` and return it so calls chain; operations registered in
/// the builder's registry are reached through [`QueryBuilder::call`].
#[derive(Clone)]
pub struct QueryBuilder {
    registry: Arc<dyn OperationRegistry>,
    escaper: Escaper,
    table: Option<String>,
    columns: Vec<Column>,
    predicates: Vec<Raw>,
    orders: Vec<(String, Order)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl fmt::Debug for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("registry", &self.registry.name())
            .field("table", &self.table)
            .field("columns", &self.columns)
            .field("predicates", &self.predicates)
            .field("orders", &self.orders)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}

impl QueryBuilder {
    pub(crate) fn new(registry: Arc<dyn OperationRegistry>, escaper: Escaper) -> Self {
        Self {
            registry,
            escaper,
            table: None,
            columns: Vec::new(),
            predicates: Vec::new(),
            orders: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns
            .extend(columns.into_iter().map(|c| Column::Ident(c.into())));
        self
    }

    pub fn select_raw(mut self, raw: Raw) -> Self {
        self.columns.push(Column::Raw(raw));
        self
    }

    pub fn where_raw(mut self, template: &str, bindings: Vec<Binding>) -> Result<Self> {
        let raw = Raw::new(&self.escaper, template, bindings)?;
        self.predicates.push(raw);
        Ok(self)
    }

    pub fn where_eq(self, column: &str, value: impl Into<Value>) -> Result<Self> {
        self.where_raw("?? = ?", vec![Binding::ident(column), Binding::value(value)])
    }

    pub fn order_by(mut self, column: impl Into<String>, order: Order) -> Self {
        self.orders.push((column.into(), order));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    pub fn escaper(&self) -> &Escaper {
        &self.escaper
    }

    pub fn registry(&self) -> &Arc<dyn OperationRegistry> {
        &self.registry
    }

    /// Invoke a registered operation by name.
    pub fn call(self, name: &str, args: impl Into<Args>) -> Result<Self> {
        let op = self
            .registry
            .get(name)
            .ok_or_else(|| Error::UnknownOperation {
                name: name.to_string(),
            })?;
        let args: Args = args.into();
        op(self, &args)
    }

    /// Compile with `?` placeholders.
    pub fn to_sql(&self) -> Result<BuiltQuery> {
        self.compile(&mut || "?".to_string())
    }

    /// Compile with PostgreSQL `$n` placeholders.
    pub fn to_native(&self) -> Result<BuiltQuery> {
        let mut n = 0;
        self.compile(&mut || {
            n += 1;
            format!("${n}")
        })
    }

    fn compile(&self, placeholder: &mut dyn FnMut() -> String) -> Result<BuiltQuery> {
        let mut sql = String::from("select ");
        let mut bindings = Vec::new();

        if self.columns.is_empty() {
            sql.push('*');
        }
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            match column {
                Column::Ident(name) => sql.push_str(&self.escaper.identifier(name)?),
                Column::Raw(raw) => {
                    raw.render(&mut sql, placeholder);
                    bindings.extend_from_slice(raw.bindings());
                }
            }
        }

        if let Some(table) = &self.table {
            sql.push_str(" from ");
            sql.push_str(&self.escaper.identifier(table)?);
        }

        for (i, predicate) in self.predicates.iter().enumerate() {
            sql.push_str(if i == 0 { " where " } else { " and " });
            predicate.render(&mut sql, placeholder);
            bindings.extend_from_slice(predicate.bindings());
        }

        for (i, (column, order)) in self.orders.iter().enumerate() {
            sql.push_str(if i == 0 { " order by " } else { ", " });
            sql.push_str(&self.escaper.identifier(column)?);
            sql.push(' ');
            sql.push_str(&order.to_string());
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" limit {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" offset {offset}"));
        }

        Ok(BuiltQuery { sql, bindings })
    }
}
