//! User resource and service.
//!
//! Staff users are read-only through the API; accounts are managed in
//! the admin. Besides `all` and `get`, the service can fetch the user
//! behind the current access token via `users/current.json`.

use serde::{Deserialize, Serialize};

use crate::http::Client;
use crate::rest::endpoint;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{get_edge, get_node, Resource};

/// A staff user of the shop. All fields are server-managed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// The unique identifier of the user.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The user's first name.
    #[serde(skip_serializing)]
    pub first_name: Option<String>,

    /// The user's last name.
    #[serde(skip_serializing)]
    pub last_name: Option<String>,

    /// The user's email address.
    #[serde(skip_serializing)]
    pub email: Option<String>,

    /// The user's phone number.
    #[serde(skip_serializing)]
    pub phone: Option<String>,

    /// The user's homepage or admin URL.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    /// The user's biography.
    #[serde(skip_serializing)]
    pub bio: Option<String>,

    /// The user's instant messenger handle.
    #[serde(skip_serializing)]
    pub im: Option<String>,

    /// The user's screen name.
    #[serde(skip_serializing)]
    pub screen_name: Option<String>,

    /// The type of account: regular, restricted, invited.
    #[serde(skip_serializing)]
    pub user_type: Option<String>,

    /// Whether this user owns the shop.
    #[serde(skip_serializing)]
    pub account_owner: Option<bool>,

    /// Whether the user receives announcements.
    #[serde(skip_serializing)]
    pub receive_announcements: Option<i32>,

    /// The permissions granted to the user.
    #[serde(skip_serializing)]
    pub permissions: Option<Vec<String>>,
}

impl Resource for User {
    type Id = u64;
    const NAME: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Service for the user endpoint family. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    client: &'a Client,
}

impl<'a> UserService<'a> {
    /// Creates a service over the given client.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all staff users.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn all(&self) -> Result<Vec<User>, ResourceError> {
        let path = endpoint::collection(User::PLURAL);
        get_edge(self.client, &path, None).await
    }

    /// Fetches a single user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the user does not exist.
    pub async fn get(&self, id: u64) -> Result<User, ResourceError> {
        let path = endpoint::member(User::PLURAL, id);
        get_node(self.client, &path, None, &id.to_string()).await
    }

    /// Fetches the user behind the current access token.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn current(&self) -> Result<User, ResourceError> {
        let path = endpoint::member(User::PLURAL, "current");
        get_node(self.client, &path, None, "current").await
    }
}
