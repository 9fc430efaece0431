use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::results::InsertOneResult;
use mongodb::{Collection, Database};

use crate::common::ApiError;
use crate::domains::resources::collections::ResourceCollection;

/// Default page size for the limited listing.
pub const DEFAULT_LIMIT: i64 = 6;

/// Parse a path segment as a store identifier.
///
/// A segment that is not a valid ObjectId is a caller mistake, reported as a
/// client error rather than an internal one.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId)
}

/// Generic CRUD over one operational collection.
///
/// Documents are open field-name -> value mappings; the service never
/// inspects caller-supplied fields, it only attaches the store-assigned
/// identifier semantics.
pub struct ResourceService {
    documents: Collection<Document>,
    label: &'static str,
}

impl ResourceService {
    /// Open the service for a collection.
    pub fn open<C: ResourceCollection>(db: &Database) -> Self {
        Self {
            documents: db.collection(C::NAME),
            label: C::LABEL,
        }
    }

    /// Insert a caller-supplied document verbatim.
    pub async fn insert(&self, document: Document) -> Result<InsertOneResult, ApiError> {
        Ok(self.documents.insert_one(document).await?)
    }

    /// Every document in the collection, natural store order, unbounded.
    pub async fn list_all(&self) -> Result<Vec<Document>, ApiError> {
        let cursor = self.documents.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// At most `limit` documents.
    pub async fn list_limited(&self, limit: i64) -> Result<Vec<Document>, ApiError> {
        let cursor = self.documents.find(doc! {}).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_id(&self, id: ObjectId) -> Result<Document, ApiError> {
        self.documents
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(ApiError::NotFound(self.label))
    }

    /// Merge-patch: only the fields present in `patch` are overwritten.
    pub async fn update_by_id(&self, id: ObjectId, patch: Document) -> Result<(), ApiError> {
        let result = self
            .documents
            .update_one(doc! { "_id": id }, doc! { "$set": patch })
            .await?;

        if result.matched_count == 0 {
            return Err(ApiError::NotFound(self.label));
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<(), ApiError> {
        let result = self.documents.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(ApiError::NotFound(self.label));
        }
        Ok(())
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}
