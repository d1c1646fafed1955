use crate::server::{
    data::{
        procedure::ProcedureRepository,
        store::{Collection, RecordStore},
    },
    error::AppError,
    model::procedure::{CreateProcedureParams, Procedure},
    service::lock::WriteLocks,
};

pub struct ProcedureService<'a> {
    store: &'a dyn RecordStore,
    locks: &'a WriteLocks,
}

impl<'a> ProcedureService<'a> {
    pub fn new(store: &'a dyn RecordStore, locks: &'a WriteLocks) -> Self {
        Self { store, locks }
    }

    /// Lists the procedure catalogue
    pub async fn get_all(&self) -> Result<Vec<Procedure>, AppError> {
        let repo = ProcedureRepository::new(self.store);

        Ok(repo.get_all().await?)
    }

    /// Adds a procedure to the catalogue
    ///
    /// # Returns
    /// - `Ok(Procedure)` - Created procedure
    /// - `Err(AppError::Conflict)` - A procedure with the same name (ignoring case) exists
    pub async fn create(&self, params: CreateProcedureParams) -> Result<Procedure, AppError> {
        let _guard = self.locks.lock(Collection::Procedures).await;

        let repo = ProcedureRepository::new(self.store);

        if repo.find_by_name(&params.nome).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Procedure '{}' already exists",
                params.nome
            )));
        }

        let procedure = repo.create(&params).await?;

        tracing::info!("Created procedure {} ({})", procedure.id, procedure.nome);

        Ok(procedure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::data::store::MemoryStore;
    use test_utils::fixture;

    #[tokio::test]
    async fn lists_legacy_procedures_with_canonical_names() {
        let store = MemoryStore::new().with(
            Collection::Procedures,
            [serde_json::json!({ "_id": "1", "name": "Corte", "price": "50" })],
        );
        let locks = WriteLocks::new();
        let service = ProcedureService::new(&store, &locks);

        let procedures = service.get_all().await.unwrap();

        assert_eq!(procedures[0].id, "1");
        assert_eq!(procedures[0].nome, "Corte");
        assert_eq!(procedures[0].preco, 50.0);
    }

    #[tokio::test]
    async fn rejects_duplicate_name_ignoring_case() {
        let store = MemoryStore::new().with(
            Collection::Procedures,
            [fixture::procedure::document("1", "Corte", 50.0)],
        );
        let locks = WriteLocks::new();
        let service = ProcedureService::new(&store, &locks);

        let result = service
            .create(CreateProcedureParams {
                nome: "corte".to_string(),
                preco: 45.0,
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
