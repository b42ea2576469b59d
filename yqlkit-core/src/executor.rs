//! Query execution interface
//!
//! The builders only produce strings. Running them is delegated to an
//! [`Executor`], which owns the driver, sessions, retries and auth.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::{Error, QueryBuilder, Result, Row, Value};

/// Status the executor reports for a statement that returned no result set
pub const SUCCESS_CODE: u16 = 200;

/// Status the executor reports when a statement failed
pub const FAILURE_CODE: u16 = 500;

/// A value bound to a declared parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Value(Value),
    /// Typed row list, as scanned by `AS_TABLE`
    Rows(Vec<Row>),
}

/// Ordered bag of named parameters handed to the executor with a statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Param)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a scalar to `name`, e.g. `$id`
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((name.into(), Param::Value(value.into())));
        self
    }

    /// Bind a list of rows to `name`
    pub fn bind_rows<I>(mut self, name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        let rows = rows.into_iter().map(Into::into).collect();
        self.entries.push((name.into(), Param::Rows(rows)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Param> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, param)| param)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.entries.iter().map(|(name, param)| (name.as_str(), param))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What an executor reports back for one statement
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Statement succeeded without a result set
    Success,
    /// First result set of the statement. Empty means no rows matched.
    Rows(Vec<Row>),
    /// Statement failed with the given code
    Failure(u16),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failure(_))
    }

    /// Status code in the executor's convention: 200 for success without
    /// rows, the failure code otherwise. `None` for row results.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Outcome::Success => Some(SUCCESS_CODE),
            Outcome::Rows(_) => None,
            Outcome::Failure(code) => Some(*code),
        }
    }

    pub fn failure_code(&self) -> Option<u16> {
        match self {
            Outcome::Failure(code) => Some(*code),
            _ => None,
        }
    }

    /// Rows of the result set; empty for `Success` and `Failure`
    pub fn rows(&self) -> &[Row] {
        match self {
            Outcome::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Turn a failure code into [`Error::Execution`]
    pub fn into_result(self) -> Result<Vec<Row>> {
        match self {
            Outcome::Success => Ok(Vec::new()),
            Outcome::Rows(rows) => Ok(rows),
            Outcome::Failure(code) => Err(Error::execution(code)),
        }
    }

    /// Deserialize every row into `T` through its JSON form
    pub fn deserialize_rows<T>(self) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.into_result()?
            .into_iter()
            .map(|row| -> Result<T> {
                let json = serde_json::to_value(row)?;
                Ok(serde_json::from_value(json)?)
            })
            .collect()
    }
}

/// Runs finished statements against a database
pub trait Executor: Send + Sync {
    /// Execute `query`, binding `params` when given
    fn execute(
        &self,
        query: &str,
        params: Option<&Params>,
    ) -> impl Future<Output = Outcome> + Send;
}

/// Extension trait for builders to hand their statement to an executor
pub trait ExecutableStatement: QueryBuilder {
    /// Build and execute the statement
    fn execute<E>(&self, executor: &E) -> impl Future<Output = Outcome> + Send
    where
        E: Executor;

    /// Build and execute the statement with bound parameters
    fn execute_with<E>(&self, executor: &E, params: &Params) -> impl Future<Output = Outcome> + Send
    where
        E: Executor;
}

impl<Q> ExecutableStatement for Q
where
    Q: QueryBuilder + Sync,
{
    async fn execute<E>(&self, executor: &E) -> Outcome
    where
        E: Executor,
    {
        run(executor, self.build(), None).await
    }

    async fn execute_with<E>(&self, executor: &E, params: &Params) -> Outcome
    where
        E: Executor,
    {
        run(executor, self.build(), Some(params)).await
    }
}

async fn run<E>(executor: &E, sql: String, params: Option<&Params>) -> Outcome
where
    E: Executor,
{
    tracing::debug!(
        sql = %sql,
        params = params.map_or(0, Params::len),
        "executing statement"
    );

    let outcome = executor.execute(&sql, params).await;
    if let Outcome::Failure(code) = outcome {
        tracing::warn!(code, sql = %sql, "statement failed");
    }
    outcome
}
