//! Account registration and credential checks.
//!
//! Login only verifies credentials; it does not create a session or issue a token.

use crate::server::{
    data::{
        store::{Collection, RecordStore},
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginParams, RegisterParams, User},
    service::lock::WriteLocks,
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    store: &'a dyn RecordStore,
    locks: &'a WriteLocks,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a dyn RecordStore, locks: &'a WriteLocks) -> Self {
        Self { store, locks }
    }

    /// Registers a new user with a bcrypt password hash.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::Conflict)` - Username or email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let _guard = self.locks.lock(Collection::Users).await;

        let repo = UserRepository::new(self.store);

        if repo.exists(&params.username, &params.email).await? {
            return Err(AppError::Conflict(
                "Username or email already registered".to_string(),
            ));
        }

        // Runs on the blocking pool
        let password = params.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

        let user = repo
            .create(&CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Checks a username and password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.store);

        let user = repo.find_by_username(&params.username).await?;

        // Unknown users still pay for a hash verification
        let stored = user.as_ref().map(|user| user.password_hash.clone());
        let password = params.password;
        let valid =
            tokio::task::spawn_blocking(move || verify_password(&password, stored.as_deref()))
                .await
                .map_err(|e| {
                    AppError::InternalError(format!("Password check task failed: {}", e))
                })?;

        match user {
            Some(user) if valid => Ok(user),
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::server::data::store::{JsonFileStore, MemoryStore};

    fn register(username: &str, email: &str) -> RegisterParams {
        RegisterParams {
            username: username.to_string(),
            email: email.to_string(),
            password: "segredo".to_string(),
        }
    }

    fn login(username: &str, password: &str) -> LoginParams {
        LoginParams {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn stores_only_password_hash() {
        let store = MemoryStore::new();
        let locks = WriteLocks::new();
        let service = AuthService::new(&store, &locks);

        service.register(register("joao", "joao@example.com")).await.unwrap();

        let raw = store.load_all(Collection::Users).await.unwrap();
        let stored = raw[0]["password"].as_str().unwrap();
        assert_ne!(stored, "segredo");
        assert!(stored.starts_with("$2b$"));
    }

    #[tokio::test]
    async fn second_registration_conflicts() {
        let store = MemoryStore::new();
        let locks = WriteLocks::new();
        let service = AuthService::new(&store, &locks);

        service.register(register("joao", "joao@example.com")).await.unwrap();
        let same_username = service.register(register("joao", "outro@example.com")).await;
        let same_email = service.register(register("maria", "joao@example.com")).await;

        assert!(matches!(same_username, Err(AppError::Conflict(_))));
        assert!(matches!(same_email, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let store = MemoryStore::new();
        let locks = WriteLocks::new();
        let service = AuthService::new(&store, &locks);
        service.register(register("joao", "joao@example.com")).await.unwrap();

        let wrong_password = service.login(login("joao", "errada")).await.unwrap_err();
        let unknown_user = service.login(login("ninguem", "segredo")).await.unwrap_err();

        assert!(matches!(
            wrong_password,
            AppError::AuthErr(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            unknown_user,
            AppError::AuthErr(AuthError::InvalidCredentials)
        ));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_password() {
        let store = MemoryStore::new();
        let locks = WriteLocks::new();
        let service = AuthService::new(&store, &locks);
        service.register(register("joao", "joao@example.com")).await.unwrap();

        let user = service.login(login("joao", "segredo")).await.unwrap();

        assert_eq!(user.username, "joao");
    }

    /// Tests logging in with a hash written by the previous bcrypt-based backend.
    ///
    /// Expected: the stored `$2a$` hash verifies
    #[tokio::test]
    async fn login_accepts_existing_bcrypt_hash() {
        let store = MemoryStore::new().with(
            Collection::Users,
            [serde_json::json!({
                "id": "1",
                "username": "joao",
                "email": "joao@example.com",
                "password": "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW"
            })],
        );
        let locks = WriteLocks::new();
        let service = AuthService::new(&store, &locks);

        let user = service.login(login("joao", "U*U")).await.unwrap();

        assert_eq!(user.id, "1");
    }

    /// Registers the same username from many tasks at once against the file store.
    ///
    /// Expected: exactly one account created, every other attempt rejected with a conflict
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_keep_username_unique() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(dir.path()));
        let locks = Arc::new(WriteLocks::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let (store, locks) = (store.clone(), locks.clone());
                tokio::spawn(async move {
                    AuthService::new(&*store, &locks)
                        .register(register("joao", &format!("joao{}@example.com", i)))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(e) => assert!(matches!(e, AppError::Conflict(_))),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.load_all(Collection::Users).await.unwrap().len(), 1);
    }
}
