//! The two registered operations.
//!
//! Column and alias go through identifier escaping, the search text is always
//! a bound value. The text search configuration is inlined as a literal, so
//! the default output reads `websearch_to_tsquery('simple', ?)`.

use std::sync::Arc;

use crate::builder::query::QueryBuilder;
use crate::builder::raw::{Binding, Escaper, Raw};
use crate::builder::value::{Arg, Args};
use crate::config::WebSearchConfig;
use crate::error::{Error, Result};
use crate::registry::Operation;

pub const WHERE_WEB_SEARCH: &str = "whereWebSearch";
pub const SELECT_WEB_SEARCH_RANK: &str = "selectWebSearchRank";

pub fn filter_template(config: &WebSearchConfig) -> String {
    format!(
        "?? @@ websearch_to_tsquery({}, ?)",
        config.text_search_config_literal()
    )
}

pub fn rank_template(config: &WebSearchConfig) -> String {
    format!(
        "ts_rank(??, websearch_to_tsquery({}, ?)) as ??",
        config.text_search_config_literal()
    )
}

/// `whereWebSearch(column, query)`
pub fn where_web_search(config: &WebSearchConfig) -> Operation {
    let template = filter_template(config);
    Arc::new(move |qb: QueryBuilder, args: &Args| -> Result<QueryBuilder> {
        let Arg::Value(query) = args.get(1) else {
            return Ok(qb);
        };
        let column = text_arg(WHERE_WEB_SEARCH, "column", args.get(0))?;
        qb.where_raw(
            &template,
            vec![Binding::ident(column), Binding::Value(query.clone())],
        )
    })
}

/// `selectWebSearchRank(column, query, alias = config.rank_alias)`
pub fn select_web_search_rank(config: &WebSearchConfig, escaper: Escaper) -> Operation {
    let template = rank_template(config);
    let default_alias = config.rank_alias.clone();
    Arc::new(move |qb: QueryBuilder, args: &Args| -> Result<QueryBuilder> {
        let Arg::Value(query) = args.get(1) else {
            return Ok(qb);
        };
        let column = text_arg(SELECT_WEB_SEARCH_RANK, "column", args.get(0))?;
        let alias = match args.get(2) {
            Arg::Undefined => default_alias.as_str(),
            other => text_arg(SELECT_WEB_SEARCH_RANK, "alias", other)?,
        };
        let raw = Raw::new(
            &escaper,
            &template,
            vec![
                Binding::ident(column),
                Binding::Value(query.clone()),
                Binding::ident(alias),
            ],
        )?;
        Ok(qb.select_raw(raw))
    })
}

pub(crate) fn operations(config: &WebSearchConfig, escaper: Escaper) -> Vec<(String, Operation)> {
    vec![
        (WHERE_WEB_SEARCH.to_string(), where_web_search(config)),
        (
            SELECT_WEB_SEARCH_RANK.to_string(),
            select_web_search_rank(config, escaper),
        ),
    ]
}

fn text_arg<'a>(operation: &str, what: &str, arg: &'a Arg) -> Result<&'a str> {
    arg.as_text().ok_or_else(|| {
        Error::invalid_argument(operation, format!("{what} must be a string, got {arg:?}"))
    })
}
