//! Revenue and expense ledger.
//!
//! Writes hold the transactions lock across the revenue duplicate check, the same lock
//! appointment confirmation takes before recording its revenue.

use crate::server::{
    data::{
        store::{Collection, RecordStore},
        transaction::TransactionRepository,
    },
    error::AppError,
    model::transaction::{
        CreateTransactionParams, Transaction, TransactionKind, TransactionOrigin, TransactionPatch,
    },
    service::lock::WriteLocks,
};

fn duplicate_revenue(appointment_id: &str) -> AppError {
    AppError::Conflict(format!(
        "A revenue transaction already exists for appointment {}",
        appointment_id
    ))
}

pub struct TransactionService<'a> {
    store: &'a dyn RecordStore,
    locks: &'a WriteLocks,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a dyn RecordStore, locks: &'a WriteLocks) -> Self {
        Self { store, locks }
    }

    /// Lists all transactions
    pub async fn get_all(&self) -> Result<Vec<Transaction>, AppError> {
        let repo = TransactionRepository::new(self.store);

        Ok(repo.get_all().await?)
    }

    /// Gets a transaction by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Transaction>, AppError> {
        let repo = TransactionRepository::new(self.store);

        Ok(repo.get_by_id(id).await?)
    }

    /// Records a transaction
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Created transaction
    /// - `Err(AppError::Conflict)` - A revenue transaction already exists for the referenced
    ///   appointment
    pub async fn create(&self, params: CreateTransactionParams) -> Result<Transaction, AppError> {
        let _guard = self.locks.lock(Collection::Transactions).await;

        let repo = TransactionRepository::new(self.store);

        if let (TransactionKind::Receita, TransactionOrigin::Agendamento, Some(origin)) =
            (params.tipo, params.origem, params.origem_id.as_deref())
        {
            if repo.find_revenue_for(origin, None).await?.is_some() {
                return Err(duplicate_revenue(origin));
            }
        }

        let transaction = repo.create(&params).await?;

        tracing::info!(
            "Created {} transaction {} of {:.2}",
            transaction.tipo.as_str(),
            transaction.id,
            transaction.valor
        );

        Ok(transaction)
    }

    /// Updates a transaction
    ///
    /// Turning an appointment-origin transaction into revenue is refused when that
    /// appointment already has another revenue transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Transaction))` - Updated transaction
    /// - `Ok(None)` - Transaction not found
    /// - `Err(AppError::Conflict)` - The update would duplicate an appointment's revenue
    pub async fn update(
        &self,
        id: &str,
        patch: TransactionPatch,
    ) -> Result<Option<Transaction>, AppError> {
        let _guard = self.locks.lock(Collection::Transactions).await;

        let repo = TransactionRepository::new(self.store);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let tipo = patch.tipo.unwrap_or(existing.tipo);
        if let (TransactionKind::Receita, TransactionOrigin::Agendamento, Some(origin)) =
            (tipo, existing.origem, existing.origem_id.as_deref())
        {
            if repo.find_revenue_for(origin, Some(id)).await?.is_some() {
                return Err(duplicate_revenue(origin));
            }
        }

        Ok(repo.update(id, &patch).await?)
    }

    /// Deletes a transaction
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = TransactionRepository::new(self.store);

        Ok(repo.delete(id).await?)
    }
}
