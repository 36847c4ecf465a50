//! Cross-file consistency checks over the parsed document set.
//!
//! Every checker is a pure function: findings come back as data, never as
//! errors, and malformed shapes are skipped at the smallest granularity
//! rather than failing a whole check.

pub mod jobs;
pub mod nodesets;
pub mod playbooks;
pub mod secrets;
pub mod semaphores;

pub use jobs::check_duplicate_jobs;
pub use nodesets::check_dangling_nodesets;
pub use playbooks::check_playbook_paths;
pub use secrets::check_dangling_secrets;
pub use semaphores::check_duplicate_semaphores;
