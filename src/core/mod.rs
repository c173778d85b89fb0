//! Core business logic - framework-agnostic bill submission and listing.

/// Attachment type gating
pub mod attachment;
/// Bill list ordering and page states
pub mod bill_list;
/// Form-to-bill assembly
pub mod draft;
/// Route table and navigation collaborator
pub mod navigation;
/// Attachment preview overlay
pub mod preview;
/// Explicit session context
pub mod session;
/// New-bill submission workflow
pub mod submission;
