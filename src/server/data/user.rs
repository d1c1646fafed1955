use crate::server::{
    data::{
        repository::{DocumentRepository, Record},
        store::Collection,
    },
    error::store::StoreError,
    model::user::User,
};

impl Record for User {
    const COLLECTION: Collection = Collection::Users;
}

pub type UserRepository<'a> = DocumentRepository<'a, User>;

impl DocumentRepository<'_, User> {
    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.get_all().await?;

        Ok(users.into_iter().find(|user| user.username == username))
    }

    /// Checks whether the username or the email (case-insensitive) is already registered.
    pub async fn exists(&self, username: &str, email: &str) -> Result<bool, StoreError> {
        let users = self.get_all().await?;

        Ok(users.iter().any(|user| {
            user.username == username || user.email.eq_ignore_ascii_case(email)
        }))
    }
}
