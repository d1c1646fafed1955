use crate::server::{
    data::{
        repository::{DocumentRepository, Record},
        store::Collection,
    },
    error::store::StoreError,
    model::transaction::Transaction,
};

impl Record for Transaction {
    const COLLECTION: Collection = Collection::Transactions;
}

pub type TransactionRepository<'a> = DocumentRepository<'a, Transaction>;

impl DocumentRepository<'_, Transaction> {
    /// Finds the revenue transaction recorded for `appointment_id`.
    ///
    /// # Arguments
    /// - `appointment_id` - Origin reference to look for
    /// - `exclude_id` - Transaction to ignore, used when checking an update against others
    pub async fn find_revenue_for(
        &self,
        appointment_id: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<Transaction>, StoreError> {
        let transactions = self.get_all().await?;

        Ok(transactions.into_iter().find(|transaction| {
            transaction.is_revenue_for(appointment_id)
                && Some(transaction.id.as_str()) != exclude_id
        }))
    }
}
