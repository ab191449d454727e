//! Tree builder and renderer: lists directories, attaches each generation to
//! the arena and writes every line as soon as its node exists.

use std::io::Write;
use std::path::Path;

use tracing::{info, trace};

use crate::error::{Error, Result};
use crate::tree::{render_line, DirLister, NodeId, Tree, WalkdirLister};

/// Render the subtree under `root` to `writer` using the real filesystem.
pub fn render<W: Write>(writer: &mut W, root: &Path, include_files: bool) -> Result<()> {
    render_with(&WalkdirLister, writer, root, include_files)
}

/// Render the subtree under `root` with an arbitrary [`DirLister`].
///
/// Lines are written in depth-first pre-order. The first error aborts the whole
/// render; lines written before it stay in `writer`.
pub fn render_with<L, W>(lister: &L, writer: &mut W, root: &Path, include_files: bool) -> Result<()>
where
    L: DirLister,
    W: Write,
{
    let mut tree = Tree::create_root(lister, root)?;
    info!(root = %root.display(), include_files, "rendering tree");

    // The root itself is never drawn, so a plain-file root yields no output.
    if !tree.info(tree.root()).is_dir {
        return Ok(());
    }

    let mut renderer = Renderer {
        lister,
        writer,
        include_files,
        lines: 0,
        peak_nodes: tree.len(),
    };
    let root_id = tree.root();
    renderer.render_dir(&mut tree, root_id, root)?;
    tree.release_generation(root_id);

    info!(
        lines = renderer.lines,
        peak_nodes = renderer.peak_nodes,
        "rendered tree"
    );
    Ok(())
}

struct Renderer<'a, L, W> {
    lister: &'a L,
    writer: &'a mut W,
    include_files: bool,
    lines: usize,
    /// Largest arena size seen; bounded by the widest root-to-leaf path of
    /// generations, not by the tree size.
    peak_nodes: usize,
}

impl<L: DirLister, W: Write> Renderer<'_, L, W> {
    fn render_dir(&mut self, tree: &mut Tree, dir: NodeId, path: &Path) -> Result<()> {
        let mut entries = self.lister.list(path)?;
        if !self.include_files {
            entries.retain(|e| e.is_dir);
        }
        // Plain name order over files and directories alike, on the raw names.
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let positions = tree.attach_generation(dir, entries);
        self.peak_nodes = self.peak_nodes.max(tree.len());
        for position in positions {
            let child = tree.children(dir)[position];
            let line = render_line(tree, child);
            trace!(line = line.trim_end(), "node");
            self.writer
                .write_all(line.as_bytes())
                .map_err(Error::Write)?;
            self.lines += 1;

            let info = tree.info(child);
            if info.is_dir {
                let child_path = path.join(&info.name);
                self.render_dir(tree, child, &child_path)?;
                tree.release_generation(child);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EntryInfo;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory lister keyed by path.
    struct FakeLister(HashMap<PathBuf, Vec<EntryInfo>>);

    impl DirLister for FakeLister {
        fn stat(&self, path: &Path) -> Result<EntryInfo> {
            match self.0.get(path) {
                Some(_) => Ok(EntryInfo::dir(path.as_os_str())),
                None => Err(Error::NotFound(path.to_path_buf())),
            }
        }

        fn list(&self, path: &Path) -> Result<Vec<EntryInfo>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| Error::NotFound(path.to_path_buf()))
        }
    }

    fn render_fake(dirs: &[(&str, Vec<EntryInfo>)], include_files: bool) -> Result<String> {
        let lister = FakeLister(
            dirs.iter()
                .map(|(p, e)| (PathBuf::from(p), e.clone()))
                .collect(),
        );
        let mut out = Vec::new();
        render_with(&lister, &mut out, Path::new("/r"), include_files)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn mixed_entries_sort_by_name_only() {
        let out = render_fake(
            &[
                ("/r", vec![EntryInfo::dir("b"), EntryInfo::file("a.txt", 1)]),
                ("/r/b", vec![]),
            ],
            true,
        )
        .unwrap();
        assert_eq!(out, "├───a.txt (1b)\n└───b\n");
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let out = render_fake(
            &[
                ("/r", vec![EntryInfo::dir("alpha"), EntryInfo::dir("Zed")]),
                ("/r/alpha", vec![]),
                ("/r/Zed", vec![]),
            ],
            false,
        )
        .unwrap();
        assert_eq!(out, "├───Zed\n└───alpha\n");
    }

    #[test]
    fn files_are_dropped_unless_included() {
        let out = render_fake(
            &[
                (
                    "/r",
                    vec![EntryInfo::file("a", 3), EntryInfo::dir("d"), EntryInfo::file("z", 0)],
                ),
                ("/r/d", vec![EntryInfo::file("inner", 5)]),
            ],
            false,
        )
        .unwrap();
        // With the files gone, `d` becomes the last sibling.
        assert_eq!(out, "└───d\n");
    }

    #[test]
    fn missing_subdirectory_aborts_after_earlier_lines() {
        let lister = FakeLister(
            [(PathBuf::from("/r"), vec![EntryInfo::dir("a"), EntryInfo::dir("b")])]
                .into_iter()
                .collect(),
        );
        let mut out = Vec::new();
        let err = render_with(&lister, &mut out, Path::new("/r"), false).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref p) if p == Path::new("/r/a")));
        assert_eq!(String::from_utf8(out).unwrap(), "├───a\n");
    }

    #[test]
    fn generations_are_released_after_their_subtree() {
        // /r
        // ├───a (a1, a2)
        // └───b (b1)
        let lister = FakeLister(
            [
                ("/r", vec![EntryInfo::dir("b"), EntryInfo::dir("a")]),
                ("/r/a", vec![EntryInfo::dir("a1"), EntryInfo::dir("a2")]),
                ("/r/a/a1", vec![]),
                ("/r/a/a2", vec![]),
                ("/r/b", vec![EntryInfo::dir("b1")]),
                ("/r/b/b1", vec![]),
            ]
            .into_iter()
            .map(|(p, e)| (PathBuf::from(p), e))
            .collect(),
        );
        let mut tree = Tree::create_root(&lister, Path::new("/r")).unwrap();
        let mut out = Vec::new();
        let mut renderer = Renderer {
            lister: &lister,
            writer: &mut out,
            include_files: false,
            lines: 0,
            peak_nodes: tree.len(),
        };
        let root = tree.root();
        renderer.render_dir(&mut tree, root, Path::new("/r")).unwrap();
        assert_eq!(renderer.lines, 5);

        // Root plus a, b, a1, a2; b1 reused the slot freed by a's generation.
        assert_eq!(renderer.peak_nodes, 5);

        // Only the root generation is still attached.
        assert_eq!(tree.len(), 3);
        let b = tree.children(root)[1];
        assert!(tree.children(b).is_empty());

        tree.release_generation(root);
        assert_eq!(tree.len(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "├───a\n│\t├───a1\n│\t└───a2\n└───b\n\t└───b1\n"
        );
    }
}
