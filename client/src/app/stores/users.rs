//! # Users Store
//!
//! Admin user table. Status changes patch the row in place so the table does
//! not need a refetch.

use std::ops::Deref;
use std::sync::Arc;

use shared::dto::{Sort, UpdateUserRequest, User, UserFilters, UserStatus};

use super::list::{Keyed, ListStore};
use crate::core::error::ApiError;
use crate::core::service::{ListSource, UsersApi};

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct UsersStore {
    list: ListStore<User, UserFilters>,
    api: Arc<dyn UsersApi>,
}

impl UsersStore {
    pub fn new(source: Arc<dyn ListSource<User, UserFilters>>, api: Arc<dyn UsersApi>) -> Self {
        Self {
            list: ListStore::new("users", source, Sort::desc("createdAt")),
            api,
        }
    }

    /// Change a user's account status.
    pub async fn update_status(&self, id: &str, status: UserStatus) -> Result<User, ApiError> {
        self.list.apply(self.api.update_user_status(id, status)).await
    }

    /// Edit profile fields. Unset fields are left unchanged on the server.
    pub async fn update_profile(&self, id: &str, update: &UpdateUserRequest) -> Result<User, ApiError> {
        self.list.apply(self.api.update_user(id, update)).await
    }
}

impl Deref for UsersStore {
    type Target = ListStore<User, UserFilters>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}
