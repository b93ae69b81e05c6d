use tracing::{debug, info};

use crate::error::BackofficeError;
use crate::models::User;
use crate::storage::UserStorage;

/// The create user command payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// The create user command handler.
pub struct CreateUserHandler<'a> {
    users: &'a dyn UserStorage,
}

impl<'a> CreateUserHandler<'a> {
    pub fn new(users: &'a dyn UserStorage) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, BackofficeError> {
        info!("Creating user with email: {}", command.email);
        let user = User::new(command.email, command.first_name, command.last_name);
        self.users.insert(user.clone()).await?;
        debug!("User created with ID: {}", user.id);
        Ok(user)
    }
}

/// The update user command payload. `None` means "leave unchanged", never
/// "clear to empty".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// The update user command handler.
pub struct UpdateUserHandler<'a> {
    users: &'a dyn UserStorage,
}

impl<'a> UpdateUserHandler<'a> {
    pub fn new(users: &'a dyn UserStorage) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<User, BackofficeError> {
        info!("Updating user with email: {}", command.email);
        let mut user = self
            .users
            .fetch_by(&command.email)
            .await?
            .ok_or_else(|| BackofficeError::UserNotFound(command.email.clone()))?;

        if let Some(first_name) = command.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            user.last_name = last_name;
        }

        self.users.update(user.clone()).await?;
        debug!("User updated: {:?}", user);
        Ok(user)
    }
}

/// The delete user command payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteUser {
    pub email: String,
}

/// The delete user command handler. Fails with `UserNotFound` when the email
/// is unknown, even though the storage-level delete is itself a no-op for
/// absent rows: the caller learns whether anything was deleted.
pub struct DeleteUserHandler<'a> {
    users: &'a dyn UserStorage,
}

impl<'a> DeleteUserHandler<'a> {
    pub fn new(users: &'a dyn UserStorage) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<User, BackofficeError> {
        info!("Deleting user with email: {}", command.email);
        let user = self
            .users
            .fetch_by(&command.email)
            .await?
            .ok_or_else(|| BackofficeError::UserNotFound(command.email.clone()))?;

        self.users.delete(&user).await?;
        Ok(user)
    }
}

/// The fetch all users query payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchAllUsers {
    pub limit: i64,
    pub offset: i64,
}

/// The fetch all users query handler. `limit` and `offset` are passed straight
/// through to storage, no validation or clamping.
pub struct FetchAllUsersHandler<'a> {
    users: &'a dyn UserStorage,
}

impl<'a> FetchAllUsersHandler<'a> {
    pub fn new(users: &'a dyn UserStorage) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: FetchAllUsers) -> Result<Vec<User>, BackofficeError> {
        self.users.fetch_all(query.limit, query.offset).await
    }
}
