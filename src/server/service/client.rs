use crate::server::{
    data::{
        client::ClientRepository,
        store::{Collection, RecordStore},
    },
    error::AppError,
    model::client::{Client, ClientPatch, CreateClientParams},
    service::lock::WriteLocks,
};

fn duplicate_phone() -> AppError {
    AppError::Conflict("A client with this phone number already exists".to_string())
}

pub struct ClientService<'a> {
    store: &'a dyn RecordStore,
    locks: &'a WriteLocks,
}

impl<'a> ClientService<'a> {
    pub fn new(store: &'a dyn RecordStore, locks: &'a WriteLocks) -> Self {
        Self { store, locks }
    }

    /// Lists all clients
    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        let repo = ClientRepository::new(self.store);

        Ok(repo.get_all().await?)
    }

    /// Gets a client by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Client>, AppError> {
        let repo = ClientRepository::new(self.store);

        Ok(repo.get_by_id(id).await?)
    }

    /// Registers a new client
    ///
    /// # Returns
    /// - `Ok(Client)` - Created client with assigned id
    /// - `Err(AppError::Conflict)` - Another client already has this phone number
    pub async fn create(&self, params: CreateClientParams) -> Result<Client, AppError> {
        let _guard = self.locks.lock(Collection::Clients).await;

        let repo = ClientRepository::new(self.store);

        if repo.find_by_phone(&params.phone, None).await?.is_some() {
            return Err(duplicate_phone());
        }

        let client = repo.create(&params).await?;

        tracing::info!("Created client {} ({})", client.id, client.name);

        Ok(client)
    }

    /// Updates a client
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Updated client
    /// - `Ok(None)` - Client not found
    /// - `Err(AppError::Conflict)` - Another client already has the new phone number
    pub async fn update(&self, id: &str, patch: ClientPatch) -> Result<Option<Client>, AppError> {
        let _guard = self.locks.lock(Collection::Clients).await;

        let repo = ClientRepository::new(self.store);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(phone) = &patch.phone {
            if repo.find_by_phone(phone, Some(id)).await?.is_some() {
                return Err(duplicate_phone());
            }
        }

        Ok(repo.update(id, &patch).await?)
    }

    /// Deletes a client. Appointments referencing it are left in place.
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = ClientRepository::new(self.store);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted client {}", id);
        }

        Ok(deleted)
    }
}
