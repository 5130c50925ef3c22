use crate::types::{ResultNode, join_path};

/// One line of a flattened result tree
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    /// Nesting level of the row; the first row is at depth 0
    pub depth: usize,
    /// Label of the row, including the names of collapsed directories
    pub display_path: String,
    /// Node the row stands for, after collapsing
    pub node: &'a ResultNode,
    /// Display paths of the rows this row is nested under, outermost first
    pub ancestors: Vec<String>,
}

/// Follow a chain of single-child directories starting at `node`.
///
/// Returns the joined names along the chain and the node the chain ends at:
/// the first node with zero or several children.
pub fn collapse(node: &ResultNode) -> (String, &ResultNode) {
    let mut label = node.name().to_string();
    let mut current = node;
    while let [only] = current.children() {
        current = only;
        label = join_path(&label, current.name());
    }
    (label, current)
}

/// Flatten a result tree into display rows, parents before children.
///
/// Directories with exactly one child never get a row of their own; their
/// names prefix the label of the row they collapse into. This applies to
/// `root` as well.
pub fn flatten(root: &ResultNode) -> Vec<Row<'_>> {
    let mut rows = Vec::new();
    let mut ancestors = Vec::new();
    walk(root, 0, &mut ancestors, &mut rows);
    rows
}

fn walk<'a>(
    node: &'a ResultNode,
    depth: usize,
    ancestors: &mut Vec<String>,
    rows: &mut Vec<Row<'a>>,
) {
    let (display_path, anchor) = collapse(node);
    rows.push(Row {
        depth,
        display_path: display_path.clone(),
        node: anchor,
        ancestors: ancestors.clone(),
    });

    // anchor is a file or branches into two or more children
    if anchor.children().is_empty() {
        return;
    }
    ancestors.push(display_path);
    for child in anchor.children() {
        walk(child, depth + 1, ancestors, rows);
    }
    ancestors.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DirectoryResult, FileReport, FileResult};

    fn file(name: &str, path: &str) -> ResultNode {
        FileResult::new(name, path, FileReport::default()).into()
    }

    fn dir(name: &str, path: &str, children: Vec<ResultNode>) -> ResultNode {
        DirectoryResult::from_children(name, path, children).into()
    }

    #[test]
    fn collapse_stops_at_files() {
        let node = file("foo.js", "foo.js");
        let (label, anchor) = collapse(&node);
        assert_eq!(label, "foo.js");
        assert_eq!(anchor, &node);
    }

    #[test]
    fn collapse_stops_at_empty_directory() {
        let node = dir("a", "a", vec![dir("b", "a/b", vec![])]);
        let (label, anchor) = collapse(&node);
        assert_eq!(label, "a/b");
        assert_eq!(anchor.path(), "a/b");
    }

    #[test]
    fn rows_carry_ancestor_labels() {
        let root = dir(
            "src",
            "src",
            vec![
                dir(
                    "lib",
                    "src/lib",
                    vec![file("a.js", "src/lib/a.js"), file("b.js", "src/lib/b.js")],
                ),
                file("c.js", "src/c.js"),
            ],
        );
        let rows = flatten(&root);
        let summary: Vec<(usize, &str)> = rows
            .iter()
            .map(|r| (r.depth, r.display_path.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(0, "src"), (1, "lib"), (2, "a.js"), (2, "b.js"), (1, "c.js")]
        );
        assert_eq!(rows[2].ancestors, vec!["src", "lib"]);
        assert!(rows[0].ancestors.is_empty());
    }
}
