use sqlx::{PgConnection, PgPool, Postgres, Transaction};

/// A database transaction scoped to one workflow.
///
/// Repository calls borrow the connection through [`UnitOfWork::conn`].
/// [`UnitOfWork::commit`] consumes the handle; dropping it on any other path
/// (an early `?` return included) rolls the transaction back and hands the
/// connection back to the pool.
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
    workflow: &'static str,
}

impl UnitOfWork {
    pub async fn begin(pool: &PgPool, workflow: &'static str) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        tracing::debug!(workflow, "Transaction started");
        Ok(Self { tx, workflow })
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        let workflow = self.workflow;
        self.tx.commit().await?;
        tracing::debug!(workflow, "Transaction committed");
        Ok(())
    }
}
