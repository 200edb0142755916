//! Generic catalog engine: one schema descriptor per catalog drives filter
//! validation, SQL construction, and execution.
//!
//! Filter values are only ever bound as positional parameters. Column and
//! direction names are structural: they come from the fixed per-catalog
//! mappings, never from user input.

use std::collections::HashSet;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Sqlite};
use trackside_core::catalog::{
    derive_status, CategoryValue, EntityStatus, ListFilter, SortDirection,
};
use trackside_core::error::ValidationError;
use trackside_core::types::{DbId, Timestamp};

use crate::DbPool;

/// Row type served by the catalog engine.
///
/// Implementors expose their advertised start so the engine can attach the
/// derived lifecycle status after scanning.
pub trait CatalogRecord {
    fn advertised_start(&self) -> Timestamp;
    fn set_status(&mut self, status: EntityStatus);
}

/// Schema descriptor for one catalog table.
///
/// Each catalog supplies one of these instead of its own copy of the
/// validate/build/execute pipeline.
pub struct CatalogSchema {
    /// Table name.
    pub table: &'static str,
    /// Column list shared by the list and lookup statements.
    pub columns: &'static str,
    /// Filter dimension name used in validation errors, e.g. `meeting_ids`.
    pub dimension: &'static str,
    /// Column used for category membership filtering.
    pub category_column: &'static str,
    /// Maximum number of category values accepted in one filter.
    pub max_categories: usize,
    /// Accepted sort field names mapped to their ORDER BY columns.
    pub sort_columns: &'static [(&'static str, &'static str)],
    /// Fallback ORDER BY column when no sort field is given.
    pub default_sort_column: &'static str,
}

impl CatalogSchema {
    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Validate a list filter against this catalog's rules.
    ///
    /// Pure and side-effect free; the first failing check determines the
    /// reported error. Valid filters are the only ones that may reach the
    /// query builder.
    pub fn validate<C: CategoryValue>(
        &self,
        filter: &ListFilter<C>,
    ) -> Result<(), ValidationError> {
        if filter.categories.len() > self.max_categories {
            return Err(ValidationError::TooManyValues {
                dimension: self.dimension,
                got: filter.categories.len(),
                max: self.max_categories,
            });
        }

        let mut seen = HashSet::with_capacity(filter.categories.len());
        for (position, value) in filter.categories.iter().enumerate() {
            value.check(self.dimension, position)?;

            let canonical = value.canonical();
            if !seen.insert(canonical.clone()) {
                return Err(ValidationError::DuplicateValue {
                    dimension: self.dimension,
                    position,
                    value: canonical,
                });
            }
        }

        if let Some(field) = filter.sort_field.as_deref() {
            if self.lookup_sort_column(field).is_none() {
                return Err(ValidationError::InvalidSortField {
                    field: field.to_string(),
                });
            }
        }

        if let Some(direction) = filter.sort_direction.as_deref() {
            if SortDirection::parse(direction).is_none() {
                return Err(ValidationError::InvalidSortDirection {
                    direction: direction.to_string(),
                });
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // SQL construction
    // -----------------------------------------------------------------------

    /// Build the list statement for `filter`.
    ///
    /// The parameters of the statement are the filter's categories, in
    /// filter order: the number of `?` placeholders always equals
    /// `filter.categories.len()`.
    pub fn list_sql<C>(&self, filter: &ListFilter<C>) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.columns, self.table);

        let mut clauses: Vec<String> = Vec::new();

        if !filter.categories.is_empty() {
            let placeholders = vec!["?"; filter.categories.len()].join(", ");
            clauses.push(format!("{} IN ({})", self.category_column, placeholders));
        }

        if filter.visible_only == Some(true) {
            // Constant literal: boolean-derived, never user text.
            clauses.push("visible = 1".to_string());
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        // Ordering is always explicit; `id` breaks ties between equal sort
        // keys so listings never depend on storage iteration order.
        let column = self.sort_column(filter.sort_field.as_deref());
        let direction = filter.direction().as_sql();
        sql.push_str(&format!(" ORDER BY {column} {direction}, id ASC"));

        sql
    }

    /// Build the single-row lookup statement.
    pub fn get_sql(&self) -> String {
        format!("SELECT {} FROM {} WHERE id = ?", self.columns, self.table)
    }

    fn lookup_sort_column(&self, field: &str) -> Option<&'static str> {
        self.sort_columns
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
    }

    /// Resolve the ORDER BY column for an optional sort field.
    ///
    /// Unrecognized fields fall back to the default column; validation has
    /// already rejected them, but the builder must not fail on them either.
    fn sort_column(&self, field: Option<&str>) -> &'static str {
        field
            .and_then(|f| self.lookup_sort_column(f))
            .unwrap_or(self.default_sort_column)
    }

    // -----------------------------------------------------------------------
    // Execution
    // -----------------------------------------------------------------------

    /// Execute the list statement for `filter` and attach derived statuses.
    ///
    /// `now` is the reference instant for the whole response; every row is
    /// judged against it rather than re-sampling a clock per record.
    pub async fn fetch_list<T, C>(
        &self,
        pool: &DbPool,
        filter: &ListFilter<C>,
        now: Timestamp,
    ) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, SqliteRow> + CatalogRecord + Send + Unpin + 'static,
        C: Clone + Send + Sync + for<'q> sqlx::Encode<'q, Sqlite> + sqlx::Type<Sqlite>,
    {
        let sql = self.list_sql(filter);

        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in &filter.categories {
            query = query.bind(value.clone());
        }

        let mut rows = query.fetch_all(pool).await?;
        for row in &mut rows {
            row.set_status(derive_status(row.advertised_start(), now));
        }
        Ok(rows)
    }

    /// Fetch a single row by id, with its derived status.
    ///
    /// `None` means no matching row; operational failures surface as
    /// `sqlx::Error`.
    pub async fn fetch_by_id<T>(
        &self,
        pool: &DbPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, SqliteRow> + CatalogRecord + Send + Unpin + 'static,
    {
        let sql = self.get_sql();
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|mut record| {
            record.set_status(derive_status(record.advertised_start(), now));
            record
        }))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
