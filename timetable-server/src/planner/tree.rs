//! Conflict-pruning combination tree.
//!
//! Each call to [`CombinationTree::add_course`] adds one level to the tree:
//! every frontier node gains one child per candidate section that does not
//! conflict with any section already chosen on the path from the root.
//! Conflict checking is incremental: candidates are filtered against each
//! node's own choice on the way down, so by the time they reach the
//! frontier they are compatible with the whole ancestor chain.
//!
//! Nodes live in an arena and refer to their children by index.

use std::fmt;

use tracing::{debug, trace};

use crate::domain::Section;

use super::combination::Combination;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

/// What a node picked for its course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Take this section.
    Section(Section),
    /// Leave the course out of the combination.
    Skip,
}

impl Choice {
    /// The key this choice is indexed under among its siblings.
    pub fn id(&self) -> ChoiceId {
        match self {
            Choice::Section(section) => ChoiceId::Section(section.id.clone()),
            Choice::Skip => ChoiceId::Skip,
        }
    }

    /// Whether this choice clashes with another. Skipping never clashes.
    pub fn conflicts(&self, other: &Choice) -> bool {
        match (self, other) {
            (Choice::Section(a), Choice::Section(b)) => a.conflicts(b),
            _ => false,
        }
    }
}

/// Identifies a child among its siblings: a section id, or the skip branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChoiceId {
    Section(String),
    Skip,
}

impl ChoiceId {
    /// Shorthand for a section choice.
    pub fn section(id: impl Into<String>) -> Self {
        ChoiceId::Section(id.into())
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceId::Section(id) => f.write_str(id),
            ChoiceId::Skip => f.write_str("(skipped)"),
        }
    }
}

/// A root-to-node path, one choice per course added.
pub type Path = Vec<ChoiceId>;

/// Error from walking a path through the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A path segment names no child of the node reached so far.
    #[error("no choice {choice} at depth {depth}")]
    UnknownChoice { depth: usize, choice: ChoiceId },
}

#[derive(Debug, Clone)]
struct Node {
    /// `None` only for the root.
    chosen: Option<Choice>,
    depth: usize,
    /// Children in insertion order.
    children: Vec<(ChoiceId, NodeId)>,
}

impl Node {
    fn child(&self, id: &ChoiceId) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, child)| *child)
    }
}

/// Tree of all conflict-free partial combinations, one level per course.
#[derive(Debug, Clone)]
pub struct CombinationTree {
    nodes: Vec<Node>,
    /// Number of completed `add_course` calls.
    courses_added: usize,
}

impl Default for CombinationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinationTree {
    /// Create a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                chosen: None,
                depth: 0,
                children: Vec::new(),
            }],
            courses_added: 0,
        }
    }

    /// Fold in one course's candidate sections.
    ///
    /// Every frontier node gains a child for each candidate compatible with
    /// its path. A path where no candidate fits stops growing for good; it
    /// will be shorter than the number of courses added and is ignored by
    /// [`valid_paths`](Self::valid_paths).
    ///
    /// Candidates sharing an id collapse into one child, which keeps the
    /// position of the first and the meetings of the last.
    pub fn add_course(&mut self, candidates: &[Section]) {
        let choices: Vec<Choice> = candidates.iter().cloned().map(Choice::Section).collect();
        self.fold_in(&choices);
    }

    /// Like [`add_course`](Self::add_course), but every frontier node also
    /// gets a branch that leaves the course out.
    pub fn add_optional_course(&mut self, candidates: &[Section]) {
        let mut choices: Vec<Choice> = candidates.iter().cloned().map(Choice::Section).collect();
        choices.push(Choice::Skip);
        self.fold_in(&choices);
    }

    fn fold_in(&mut self, choices: &[Choice]) {
        let frontier_depth = self.courses_added;
        let mut created = 0usize;

        let mut stack: Vec<(NodeId, Vec<&Choice>)> = vec![(ROOT, choices.iter().collect())];

        while let Some((id, incoming)) = stack.pop() {
            let filtered: Vec<&Choice> = match &self.nodes[id.0].chosen {
                Some(chosen) => incoming
                    .into_iter()
                    .filter(|c| !c.conflicts(chosen))
                    .collect(),
                None => incoming,
            };

            let node = &self.nodes[id.0];
            if node.children.is_empty() {
                if node.depth != frontier_depth {
                    // Truncated by an earlier course
                    continue;
                }
                for choice in filtered {
                    if self.insert_child(id, choice.clone()) {
                        created += 1;
                    }
                }
            } else if filtered.is_empty() {
                trace!(depth = node.depth, "branch truncated, nothing fits");
            } else {
                // Reverse so the stack visits children in insertion order
                for &(_, child) in node.children.iter().rev() {
                    stack.push((child, filtered.clone()));
                }
            }
        }

        self.courses_added += 1;
        debug!(
            course = self.courses_added,
            candidates = choices.len(),
            created,
            nodes = self.nodes.len(),
            "course added"
        );
    }

    /// Attach `choice` under `parent`. Returns false if an existing child
    /// with the same id was overwritten instead.
    fn insert_child(&mut self, parent: NodeId, choice: Choice) -> bool {
        let key = choice.id();

        if let Some(existing) = self.nodes[parent.0].child(&key) {
            self.nodes[existing.0].chosen = Some(choice);
            return false;
        }

        let child = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(Node {
            chosen: Some(choice),
            depth,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push((key, child));
        true
    }

    /// Every root-to-node path with exactly `target_depth` choices.
    ///
    /// Paths come out depth-first in insertion order, which decides
    /// tie-breaks when scoring.
    pub fn valid_paths(&self, target_depth: usize) -> Vec<Path> {
        let mut paths = Vec::new();
        let mut prefix = Vec::with_capacity(target_depth);
        self.collect_paths(ROOT, target_depth, &mut prefix, &mut paths);
        paths
    }

    fn collect_paths(
        &self,
        id: NodeId,
        target_depth: usize,
        prefix: &mut Path,
        paths: &mut Vec<Path>,
    ) {
        let node = &self.nodes[id.0];
        if node.depth == target_depth {
            paths.push(prefix.clone());
            return;
        }

        for (key, child) in &node.children {
            prefix.push(key.clone());
            self.collect_paths(*child, target_depth, prefix, paths);
            prefix.pop();
        }
    }

    /// Build the combination chosen along `path`.
    ///
    /// Skipped courses and sections without meetings contribute nothing.
    pub fn materialize(&self, path: &[ChoiceId]) -> Result<Combination, TreeError> {
        let mut sections = Vec::with_capacity(path.len());
        let mut current = ROOT;

        for (depth, key) in path.iter().enumerate() {
            current = self.nodes[current.0]
                .child(key)
                .ok_or_else(|| TreeError::UnknownChoice {
                    depth,
                    choice: key.clone(),
                })?;

            if let Some(Choice::Section(section)) = &self.nodes[current.0].chosen
                && !section.is_empty()
            {
                sections.push(section);
            }
        }

        Ok(Combination::from_sections(sections))
    }

    /// Number of completed `add_course` calls.
    pub fn depth(&self) -> usize {
        self.courses_added
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
