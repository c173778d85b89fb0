//! Entity module - Contains the SeaORM entity definitions for the local bill store.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod attachment;
pub mod bill;

// Re-export specific types to avoid conflicts
pub use attachment::{
    Column as AttachmentColumn, Entity as Attachment, Model as AttachmentModel,
};
pub use bill::{Column as BillColumn, Entity as Bill, Model as BillModel};
