//! Authentication service layer.
//!
//! Verifies username and password credentials against stored bcrypt hashes, issues session
//! tokens and resolves tokens back into users.

pub mod jwt;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::auth::jwt::JwtAuth,
};

/// Accounts created on startup when missing; each password equals the username.
pub const DEFAULT_USERS: [&str; 4] = ["alice", "bob", "carol", "dave"];

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtAuth,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtAuth) -> Self {
        Self { db, jwt }
    }

    /// Checks credentials and issues a session token for the user.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials` so callers cannot
    /// tell which one was wrong.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed session token
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Credentials did not match
    /// - `Err(Error::DbErr)` - User lookup failed
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, Error> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| Error::InternalError(format!("Password check panicked: {}", e)))?;

        match verified {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => {
                tracing::warn!(user_id = user.id, error = %e, "Stored password hash is unreadable");
                return Err(AuthError::InvalidCredentials.into());
            }
        }

        self.jwt.generate_token(user.id)
    }

    /// Resolves a session token into the user it was issued for.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Token is valid and the user still exists
    /// - `Err(Error::AuthError)` - Token is invalid or the user no longer exists
    /// - `Err(Error::DbErr)` - User lookup failed
    pub async fn get_user_by_token(&self, token: &str) -> Result<UserModel, Error> {
        let user_id = self.jwt.validate_token(token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        Ok(user)
    }
}

/// Creates any of the [`DEFAULT_USERS`] that do not exist yet.
///
/// # Arguments
/// - `cost` - bcrypt cost used to hash the passwords
///
/// # Returns
/// - `Ok(usize)` - Number of users created
pub async fn seed_default_users(db: &DatabaseConnection, cost: u32) -> Result<usize, Error> {
    let user_repo = UserRepository::new(db);
    let mut created = 0;

    for username in DEFAULT_USERS {
        if user_repo.find_by_username(username).await?.is_some() {
            continue;
        }

        let password_hash = bcrypt::hash(username, cost)?;
        user_repo.create(username, password_hash).await?;
        created += 1;
    }

    if created > 0 {
        tracing::info!("Created {} default users", created);
    }

    Ok(created)
}
