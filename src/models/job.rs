//! Job documents and the heterogeneous shapes of their attributes.
//!
//! Phase fields, semaphore lists, and nodeset/secret references each accept
//! several source shapes (bare string, object, list of either). Every shape
//! is decoded into a tagged variant up front; each variant set ends in a raw
//! catch-all so an unexpected shape never fails the whole job, it just
//! contributes nothing to the checks.

use serde::Deserialize;
use serde_yaml::Value;

/// The four phase fields of a job, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PreRun,
    Run,
    PostRun,
    CleanupRun,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::PreRun, Phase::Run, Phase::PostRun, Phase::CleanupRun];

    pub fn key(&self) -> &'static str {
        match self {
            Phase::PreRun => "pre-run",
            Phase::Run => "run",
            Phase::PostRun => "post-run",
            Phase::CleanupRun => "cleanup-run",
        }
    }
}

/// A job declaration. Attributes the checks never read are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Job {
    #[serde(default)]
    name: Option<JobName>,
    #[serde(default)]
    pub pre_run: Option<PhaseField>,
    #[serde(default)]
    pub run: Option<PhaseField>,
    #[serde(default)]
    pub post_run: Option<PhaseField>,
    #[serde(default)]
    pub cleanup_run: Option<PhaseField>,
    #[serde(default)]
    pub semaphores: Option<StringOrList>,
    #[serde(default)]
    pub nodeset: Option<NodesetRef>,
    #[serde(default)]
    pub secrets: Option<SecretRefs>,
}

impl Job {
    /// The job's identity, when it has a usable one.
    pub fn name(&self) -> Option<&str> {
        match &self.name {
            Some(JobName::Text(name)) => Some(name),
            _ => None,
        }
    }

    pub fn phase(&self, phase: Phase) -> Option<&PhaseField> {
        match phase {
            Phase::PreRun => self.pre_run.as_ref(),
            Phase::Run => self.run.as_ref(),
            Phase::PostRun => self.post_run.as_ref(),
            Phase::CleanupRun => self.cleanup_run.as_ref(),
        }
    }
}

/// A job name is only an identity when it is a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JobName {
    Text(String),
    Invalid(Value),
}

/// A phase field: a single entry or a list of entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhaseField {
    Many(Vec<PhaseEntry>),
    Single(PhaseEntry),
}

impl PhaseField {
    /// Normalized view: every shape becomes a slice of entries.
    pub fn entries(&self) -> &[PhaseEntry] {
        match self {
            PhaseField::Many(entries) => entries,
            PhaseField::Single(entry) => std::slice::from_ref(entry),
        }
    }
}

/// One entry of a phase field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhaseEntry {
    Path(String),
    Playbook(Playbook),
    Other(Value),
}

impl PhaseEntry {
    /// The playbook path this entry references, if any.
    pub fn path_ref(&self) -> Option<&str> {
        match self {
            PhaseEntry::Path(path) => Some(path),
            PhaseEntry::Playbook(playbook) => playbook.name.as_deref(),
            PhaseEntry::Other(_) => None,
        }
    }

    /// Semaphore names declared on this entry. Bare path strings have none.
    pub fn semaphores(&self) -> &[String] {
        match self {
            PhaseEntry::Playbook(playbook) => playbook
                .semaphores
                .as_ref()
                .map(StringOrList::names)
                .unwrap_or(&[]),
            _ => &[],
        }
    }
}

/// The object form of a phase entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Playbook {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub semaphores: Option<StringOrList>,
}

/// A string attribute that may also be written as a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    Many(Vec<String>),
    One(String),
    Other(Value),
}

impl StringOrList {
    pub fn names(&self) -> &[String] {
        match self {
            StringOrList::Many(names) => names,
            StringOrList::One(name) => std::slice::from_ref(name),
            StringOrList::Other(_) => &[],
        }
    }
}

/// A job's nodeset attribute: a name reference or an inline declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodesetRef {
    Name(String),
    Inline(InlineNodes),
    Other(Value),
}

/// Inline nodeset form: the references live in its `nodes` list.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineNodes {
    #[serde(default)]
    pub nodes: NodeRefs,
}

/// The `nodes` list of an inline nodeset.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeRefs {
    Many(Vec<NodeRef>),
    Other(Value),
}

impl NodeRefs {
    pub fn refs(&self) -> &[NodeRef] {
        match self {
            NodeRefs::Many(refs) => refs,
            NodeRefs::Other(_) => &[],
        }
    }
}

impl Default for NodeRefs {
    fn default() -> Self {
        NodeRefs::Many(Vec::new())
    }
}

/// One node reference inside an inline nodeset.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Named { name: String },
    Other(Value),
}

impl NodeRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            NodeRef::Named { name } => Some(name),
            NodeRef::Other(_) => None,
        }
    }
}

/// A job's secrets attribute: one reference or a list of references.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SecretRefs {
    Many(Vec<SecretRef>),
    Single(SecretRef),
}

impl SecretRefs {
    pub fn entries(&self) -> &[SecretRef] {
        match self {
            SecretRefs::Many(refs) => refs,
            SecretRefs::Single(secret_ref) => std::slice::from_ref(secret_ref),
        }
    }
}

/// One secret reference: a bare name, or an object whose `secret` key names
/// the declared secret (`name` is only the in-job alias).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SecretRef {
    Name(String),
    Aliased { secret: String },
    Other(Value),
}

impl SecretRef {
    pub fn secret_name(&self) -> Option<&str> {
        match self {
            SecretRef::Name(name) => Some(name),
            SecretRef::Aliased { secret } => Some(secret),
            SecretRef::Other(_) => None,
        }
    }
}
