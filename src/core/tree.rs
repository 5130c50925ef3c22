use std::collections::HashMap;

use log::{debug, warn};

use crate::types::{
    DirectoryResult, FileReport, FileResult, PATH_SEPARATOR, Report, ResultNode, Totals, join_path,
};

/// Display name of the directory that holds every file of a report
pub const ROOT_NAME: &str = "All files";

/// A report file with the part of its path not yet turned into nodes
struct Entry<'a> {
    segments: &'a [String],
    file: &'a FileReport,
}

enum Group<'a> {
    /// Files whose paths normalize to the same name are merged
    File(&'a str, Vec<&'a FileReport>),
    Directory(&'a str, Vec<Entry<'a>>),
}

/// Build the result tree of a report. Directory totals are aggregated from
/// the outcomes of all descendant files, and children keep the order the
/// files appear in the report.
pub fn build_tree(report: &Report) -> DirectoryResult {
    build_tree_filtered(report, |_| true)
}

/// Like [`build_tree`], leaving out files whose normalized path is rejected
/// by `include`
pub fn build_tree_filtered<F>(report: &Report, include: F) -> DirectoryResult
where
    F: Fn(&str) -> bool,
{
    let paths: Vec<(Vec<String>, &FileReport)> = report
        .files
        .iter()
        .filter_map(|(path, file)| {
            let segments = split_path(path);
            if segments.is_empty() {
                warn!("Skipping report file with an empty path: {path:?}");
                return None;
            }
            if !include(&segments.join("/")) {
                debug!("Ignoring report file {path}");
                return None;
            }
            Some((segments, file))
        })
        .collect();

    let entries: Vec<Entry> = paths
        .iter()
        .map(|(segments, file)| Entry {
            segments: segments.as_slice(),
            file: *file,
        })
        .collect();

    let totals = aggregate_entries(&entries);
    let children = build_children("", entries);
    debug!(
        "Built result tree: {} files, {} mutants",
        paths.len(),
        totals.total_mutants()
    );
    DirectoryResult::new(ROOT_NAME, "", totals, children)
}

fn build_children(prefix: &str, entries: Vec<Entry<'_>>) -> Vec<ResultNode> {
    let mut groups: Vec<Group> = Vec::new();
    let mut file_index: HashMap<&str, usize> = HashMap::new();
    let mut dir_index: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        let Some((head, rest)) = entry.segments.split_first() else {
            continue;
        };
        let head = head.as_str();
        if rest.is_empty() {
            if let Some(&index) = file_index.get(head) {
                warn!(
                    "{} appears more than once in the report; merging its mutants",
                    join_path(prefix, head)
                );
                if let Group::File(_, files) = &mut groups[index] {
                    files.push(entry.file);
                }
                continue;
            }
            if dir_index.contains_key(head) {
                warn_file_dir_conflict(prefix, head);
            }
            file_index.insert(head, groups.len());
            groups.push(Group::File(head, vec![entry.file]));
            continue;
        }

        let rest = Entry {
            segments: rest,
            file: entry.file,
        };
        match dir_index.get(head) {
            Some(&index) => {
                if let Group::Directory(_, members) = &mut groups[index] {
                    members.push(rest);
                }
            }
            None => {
                if file_index.contains_key(head) {
                    warn_file_dir_conflict(prefix, head);
                }
                dir_index.insert(head, groups.len());
                groups.push(Group::Directory(head, vec![rest]));
            }
        }
    }

    groups
        .into_iter()
        .map(|group| match group {
            Group::File(name, files) => {
                FileResult::new(name, join_path(prefix, name), merge_files(&files)).into()
            }
            Group::Directory(name, members) => {
                let path = join_path(prefix, name);
                let totals = aggregate_entries(&members);
                let children = build_children(&path, members);
                DirectoryResult::new(name, path, totals, children).into()
            }
        })
        .collect()
}

fn warn_file_dir_conflict(prefix: &str, name: &str) {
    warn!(
        "{} is both a file and a directory in the report",
        join_path(prefix, name)
    );
}

/// Language and source come from the first file; mutants are concatenated
/// in report order.
fn merge_files(files: &[&FileReport]) -> FileReport {
    let Some((first, rest)) = files.split_first() else {
        return FileReport::default();
    };
    let mut merged = (*first).clone();
    for file in rest {
        merged.mutants.extend(file.mutants.iter().cloned());
    }
    merged
}

fn aggregate_entries(entries: &[Entry<'_>]) -> Totals {
    Totals::aggregate(entries.iter().flat_map(|entry| entry.file.mutants.iter()))
}

/// Split a report path into segments. Backslashes count as separators;
/// empty and `.` segments are dropped.
pub fn split_path(path: &str) -> Vec<String> {
    path.split([PATH_SEPARATOR, '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .map(str::to_string)
        .collect()
}
