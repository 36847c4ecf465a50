//! Dangling nodeset reference detection.

use std::collections::BTreeSet;

use crate::models::{Job, Nodeset, NodesetRef};

/// Find nodeset names referenced by jobs that no declaration resolves.
///
/// A reference resolves against every declared nodeset name and against
/// every node name nested inside a declaration (list-valued node names are
/// flattened). Jobs without a nodeset attribute and references without a
/// usable name are skipped.
pub fn check_dangling_nodesets(nodesets: &[Nodeset], jobs: &[Job]) -> BTreeSet<String> {
    let known: BTreeSet<&str> = nodesets
        .iter()
        .flat_map(Nodeset::declared_names)
        .collect();

    let mut dangling = BTreeSet::new();
    for job in jobs {
        let Some(reference) = &job.nodeset else {
            continue;
        };
        match reference {
            NodesetRef::Name(name) => {
                if !known.contains(name.as_str()) {
                    dangling.insert(name.clone());
                }
            }
            NodesetRef::Inline(inline) => {
                for node in inline.nodes.refs() {
                    let Some(name) = node.name() else {
                        continue;
                    };
                    if !known.contains(name) {
                        dangling.insert(name.to_string());
                    }
                }
            }
            NodesetRef::Other(_) => {}
        }
    }

    dangling
}
