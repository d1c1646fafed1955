use crate::server::{
    data::{
        repository::{DocumentRepository, Record},
        store::Collection,
    },
    error::store::StoreError,
    model::client::Client,
    util::parse::digits_only,
};

impl Record for Client {
    const COLLECTION: Collection = Collection::Clients;
}

pub type ClientRepository<'a> = DocumentRepository<'a, Client>;

impl DocumentRepository<'_, Client> {
    /// Finds a client whose phone matches `phone` once both are reduced to digits.
    ///
    /// # Arguments
    /// - `phone` - Digits-only phone number
    /// - `exclude_id` - Client to ignore, used when checking an update against other clients
    pub async fn find_by_phone(
        &self,
        phone: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<Client>, StoreError> {
        let clients = self.get_all().await?;

        Ok(clients.into_iter().find(|client| {
            digits_only(&client.phone) == phone && Some(client.id.as_str()) != exclude_id
        }))
    }
}
