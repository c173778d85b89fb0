//! Attachment entity - Raw bytes of an uploaded bill proof.

use sea_orm::entity::prelude::*;

/// Attachment database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attachments")]
pub struct Model {
    /// Upload key handed back to the submitter
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Email of the uploader
    pub email: String,
    /// Canonical file name
    pub file_name: String,
    /// Declared content type
    pub mime_type: String,
    /// File contents
    pub content: Vec<u8>,
}

/// Attachments have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
