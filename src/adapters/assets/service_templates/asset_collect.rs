use include_dir::{Dir, DirEntry};

/// Identifiers of every embedded template, sorted.
pub fn collect_template_ids(dir: &Dir) -> Vec<String> {
    let mut ids = Vec::new();
    collect_entries(dir, &mut ids);
    ids.sort();
    ids
}

fn collect_entries(dir: &Dir, ids: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => ids.push(file.path().to_string_lossy().replace('\\', "/")),
            DirEntry::Dir(subdir) => collect_entries(subdir, ids),
        }
    }
}
