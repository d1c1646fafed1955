use crate::server::{
    data::{
        repository::{rename_legacy, DocumentRepository, Record},
        store::{Collection, Document},
    },
    error::store::StoreError,
    model::procedure::Procedure,
};

impl Record for Procedure {
    const COLLECTION: Collection = Collection::Procedures;

    fn normalize(document: &mut Document) {
        rename_legacy(document, "name", "nome");
        rename_legacy(document, "price", "preco");
    }
}

pub type ProcedureRepository<'a> = DocumentRepository<'a, Procedure>;

impl DocumentRepository<'_, Procedure> {
    /// Finds a procedure by name, ignoring case and surrounding whitespace.
    pub async fn find_by_name(&self, nome: &str) -> Result<Option<Procedure>, StoreError> {
        let wanted = nome.trim().to_lowercase();
        let procedures = self.get_all().await?;

        Ok(procedures
            .into_iter()
            .find(|procedure| procedure.nome.trim().to_lowercase() == wanted))
    }
}
