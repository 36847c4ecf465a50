//! Typed views of the document objects declared in CI configuration files.

pub mod document;
pub mod job;
pub mod nodeset;

pub use document::{ConfigDocument, DocumentKind, Secret, Semaphore};
pub use job::{
    InlineNodes, Job, NodeRef, NodeRefs, NodesetRef, Phase, PhaseEntry, PhaseField, Playbook,
    SecretRef, SecretRefs, StringOrList,
};
pub use nodeset::{NameOrList, NodeEntries, NodeEntry, Nodeset};
