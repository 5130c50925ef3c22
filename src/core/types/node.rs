use serde::Serialize;

use crate::types::{FileReport, MutantOutcome, Totals};

/// Separator between path segments of node paths and display labels
pub const PATH_SEPARATOR: char = '/';

/// Join two path segments, treating an empty prefix as the root
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{name}")
    }
}

/// A mutated source file and the outcomes of its mutants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileResult {
    name: String,
    path: String,
    language: String,
    #[serde(skip)]
    source: String,
    mutants: Vec<MutantOutcome>,
    totals: Totals,
}

impl FileResult {
    pub fn new(name: impl Into<String>, path: impl Into<String>, file: FileReport) -> Self {
        let totals = Totals::aggregate(&file.mutants);
        Self {
            name: name.into(),
            path: path.into(),
            language: file.language,
            source: file.source,
            mutants: file.mutants,
            totals,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mutants(&self) -> &[MutantOutcome] {
        &self.mutants
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }
}

/// A directory and its ordered children.
///
/// `totals` is taken as given: the caller aggregates it from every
/// descendant file. [`DirectoryResult::from_children`] does that for callers
/// that have no precomputed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryResult {
    name: String,
    path: String,
    totals: Totals,
    children: Vec<ResultNode>,
}

impl DirectoryResult {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        totals: Totals,
        children: Vec<ResultNode>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            totals,
            children,
        }
    }

    pub fn from_children(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<ResultNode>,
    ) -> Self {
        let mut outcomes = Vec::new();
        for child in &children {
            child.collect_outcomes(&mut outcomes);
        }
        let totals = Totals::aggregate(outcomes);
        Self::new(name, path, totals, children)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn children(&self) -> &[ResultNode] {
        &self.children
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// Either kind of node in a result tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultNode {
    File(FileResult),
    Directory(DirectoryResult),
}

impl ResultNode {
    pub fn name(&self) -> &str {
        match self {
            ResultNode::File(file) => file.name(),
            ResultNode::Directory(dir) => dir.name(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ResultNode::File(file) => file.path(),
            ResultNode::Directory(dir) => dir.path(),
        }
    }

    pub fn totals(&self) -> &Totals {
        match self {
            ResultNode::File(file) => file.totals(),
            ResultNode::Directory(dir) => dir.totals(),
        }
    }

    /// Children in report order; always empty for files
    pub fn children(&self) -> &[ResultNode] {
        match self {
            ResultNode::File(_) => &[],
            ResultNode::Directory(dir) => dir.children(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            ResultNode::File(_) => NodeKind::File,
            ResultNode::Directory(_) => NodeKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    /// Every outcome of every descendant file, in document order
    pub fn outcomes(&self) -> Vec<&MutantOutcome> {
        let mut outcomes = Vec::new();
        self.collect_outcomes(&mut outcomes);
        outcomes
    }

    fn collect_outcomes<'a>(&'a self, outcomes: &mut Vec<&'a MutantOutcome>) {
        match self {
            ResultNode::File(file) => outcomes.extend(file.mutants()),
            ResultNode::Directory(dir) => {
                for child in dir.children() {
                    child.collect_outcomes(outcomes);
                }
            }
        }
    }

    /// Node at `path` in this subtree. An empty path, or this node's own
    /// path, returns this node.
    pub fn find(&self, path: &str) -> Option<&ResultNode> {
        let path = path.trim_matches(PATH_SEPARATOR);
        if path.is_empty() || path == self.path() {
            return Some(self);
        }
        self.children().iter().find_map(|child| {
            let child_path = child.path();
            let is_prefix = path
                .strip_prefix(child_path)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(PATH_SEPARATOR));
            if is_prefix { child.find(path) } else { None }
        })
    }
}

impl From<FileResult> for ResultNode {
    fn from(file: FileResult) -> Self {
        ResultNode::File(file)
    }
}

impl From<DirectoryResult> for ResultNode {
    fn from(dir: DirectoryResult) -> Self {
        ResultNode::Directory(dir)
    }
}
