//! Declared nodesets.
//!
//! A nodeset contributes its own name and the name of every node nested
//! inside it to the set of resolvable references; a nested node's name may
//! itself be a list of names.

use serde::Deserialize;
use serde_yaml::Value;

/// A nodeset declaration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Nodeset {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: NodeEntries,
}

impl Nodeset {
    /// Every identifier this declaration makes resolvable: the nodeset's own
    /// name plus each nested node name, flattening list-valued names.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.name.as_deref().into_iter().chain(
            self.nodes
                .entries()
                .iter()
                .flat_map(|entry| entry.names().iter().map(String::as_str)),
        )
    }
}

/// The `nodes` list of a nodeset declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeEntries {
    Many(Vec<NodeEntry>),
    Other(Value),
}

impl NodeEntries {
    pub fn entries(&self) -> &[NodeEntry] {
        match self {
            NodeEntries::Many(entries) => entries,
            NodeEntries::Other(_) => &[],
        }
    }
}

impl Default for NodeEntries {
    fn default() -> Self {
        NodeEntries::Many(Vec::new())
    }
}

/// One node declaration inside a nodeset.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeEntry {
    Named { name: NameOrList },
    Other(Value),
}

impl NodeEntry {
    fn names(&self) -> &[String] {
        match self {
            NodeEntry::Named { name } => name.names(),
            NodeEntry::Other(_) => &[],
        }
    }
}

/// A node name: one identifier or a list of identifiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NameOrList {
    Many(Vec<String>),
    One(String),
}

impl NameOrList {
    pub fn names(&self) -> &[String] {
        match self {
            NameOrList::Many(names) => names,
            NameOrList::One(name) => std::slice::from_ref(name),
        }
    }
}
