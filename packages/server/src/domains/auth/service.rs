use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::common::ApiError;
use crate::domains::auth::jwt::JwtService;
use crate::domains::auth::models::Account;
use crate::domains::auth::password;

/// Name of the credential collection.
pub const ADMIN_COLLECTION: &str = "admin";

/// Issued token pair: the access token goes in the response body, the
/// refresh token in a cookie.
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Auth service - registration and login against the credential collection
#[derive(Clone)]
pub struct AuthService {
    accounts: Collection<Account>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(db: &Database, jwt: JwtService) -> Self {
        Self {
            accounts: db.collection(ADMIN_COLLECTION),
            jwt,
        }
    }

    /// Create the unique index backing the email-uniqueness invariant.
    ///
    /// The register pre-check produces the friendly duplicate error; this
    /// index is what stops the loser of two concurrent registrations with
    /// the same email.
    pub async fn ensure_indexes(&self) -> Result<(), ApiError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.accounts.create_index(index).await?;
        Ok(())
    }

    /// Register a new admin account.
    pub async fn register(
        &self,
        name: String,
        email: String,
        plain_password: String,
    ) -> Result<(), ApiError> {
        let existing = self.accounts.find_one(doc! { "email": &email }).await?;
        if existing.is_some() {
            return Err(ApiError::DuplicateAccount);
        }

        let hashed = password::hash_password(plain_password).await?;
        self.accounts
            .insert_one(Account {
                id: None,
                name,
                email,
                password: hashed,
            })
            .await?;

        Ok(())
    }

    /// Check credentials and issue a token pair.
    ///
    /// A missing account and a wrong password produce the same error, so the
    /// response does not reveal which case occurred.
    pub async fn login(
        &self,
        email: String,
        plain_password: String,
    ) -> Result<TokenPair, ApiError> {
        let Some(account) = self.accounts.find_one(doc! { "email": &email }).await? else {
            return Err(ApiError::InvalidCredentials);
        };

        if !password::verify_password(plain_password, account.password).await? {
            return Err(ApiError::InvalidCredentials);
        }

        let access = self.jwt.create_access_token(&account.email)?;
        let refresh = self.jwt.create_refresh_token(&account.email)?;

        Ok(TokenPair { access, refresh })
    }
}
