//! Calao POS - order-management front-end core
//!
//! Role-based dashboard services over the Calao backend: the draft
//! composer, the order workflow wizard, collection/filter views,
//! receipt formatting, session management and polling tasks. All
//! rendering, routing and toast plumbing live elsewhere; this crate is
//! the state and behavior they drive.

pub mod backend;
pub mod dashboard;
pub mod draft;
pub mod format;
pub mod poll;
pub mod receipt;
pub mod session;
pub mod views;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testutil;

pub use backend::OrderBackend;
pub use draft::{DraftItem, DraftOrder};
pub use workflow::{OrderWorkflow, SubmissionState, WorkflowStage};
