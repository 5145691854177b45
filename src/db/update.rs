use sqlx::{Encode, PgExecutor, Postgres, QueryBuilder, Type};

/// Result of applying a [`PartialUpdate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The request named no updatable field
    NoFields,
    NotFound,
    Updated,
}

/// Builds an `UPDATE` touching only the columns that were explicitly set.
///
/// Nullable columns take `Option<Option<T>>` through [`PartialUpdate::set_if`]:
/// the outer `None` skips the column, `Some(None)` writes `NULL`.
pub struct PartialUpdate<'args> {
    builder: QueryBuilder<'args, Postgres>,
    assignments: usize,
}

impl<'args> PartialUpdate<'args> {
    pub fn new(table: &str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("UPDATE {} SET ", table)),
            assignments: 0,
        }
    }

    pub fn set<T>(&mut self, column: &str, value: T) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if self.assignments > 0 {
            self.builder.push(", ");
        }
        self.builder.push(column).push(" = ").push_bind(value);
        self.assignments += 1;
        self
    }

    pub fn set_if<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments == 0
    }

    /// Appends the `WHERE` clause. Returns `None` if no column was set.
    pub fn finish<K>(mut self, key_column: &str, key: K) -> Option<QueryBuilder<'args, Postgres>>
    where
        K: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if self.is_empty() {
            return None;
        }
        self.builder
            .push(" WHERE ")
            .push(key_column)
            .push(" = ")
            .push_bind(key);
        Some(self.builder)
    }

    /// Runs the update against the row whose `key_column` equals `key`.
    pub async fn execute<'e, K, E>(
        self,
        db: E,
        key_column: &str,
        key: K,
    ) -> Result<UpdateOutcome, sqlx::Error>
    where
        K: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
        E: PgExecutor<'e>,
    {
        let Some(mut query) = self.finish(key_column, key) else {
            return Ok(UpdateOutcome::NoFields);
        };

        let result = query.build().execute(db).await?;

        Ok(if result.rows_affected() == 0 {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_present_fields_are_assigned() {
        let name: Option<&str> = Some("Dr. Grey");
        let email: Option<Option<&str>> = None;
        let department: Option<Option<i32>> = Some(Some(4));

        let mut update = PartialUpdate::new("employees");
        update
            .set_if("name", name)
            .set_if("email_id", email)
            .set_if("department_id", department);

        let query = update.finish("unique_id", "EMP-1").unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE employees SET name = $1, department_id = $2 WHERE unique_id = $3"
        );
    }

    #[test]
    fn test_explicit_null_is_still_assigned() {
        let location: Option<Option<&str>> = Some(None);

        let mut update = PartialUpdate::new("departments");
        update.set_if("department_location", location);

        let query = update.finish("department_id", 7).unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE departments SET department_location = $1 WHERE department_id = $2"
        );
    }

    #[test]
    fn test_empty_update_yields_nothing() {
        let mut update = PartialUpdate::new("roles");
        update.set_if::<&str>("role_name", None);

        assert!(update.is_empty());
        assert!(update.finish("role_id", 1).is_none());
    }
}
