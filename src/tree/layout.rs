use super::{NodeId, Tree};

const BRANCH: &str = "\u{251c}"; // ├
const LAST_BRANCH: &str = "\u{2514}"; // └
const RULE: &str = "\u{2500}\u{2500}\u{2500}"; // ───
const CONTINUATION: &str = "\u{2502}\t"; // │ + tab
const GAP: &str = "\t";

/// Size annotation shown after a file name: `(empty)` or `(<size>b)`.
pub fn size_annotation(size: u64) -> String {
    if size == 0 {
        "(empty)".to_string()
    } else {
        format!("({size}b)")
    }
}

/// Render the line for `id`, newline included. The root renders as `""`.
///
/// The indentation is recomputed from the ancestor chain on every call: each
/// ancestor below the root contributes a continuation bar unless it was the
/// last child of its own parent.
pub fn render_line(tree: &Tree, id: NodeId) -> String {
    if tree.is_root(id) {
        return String::new();
    }

    // Ancestors come parent first; segments are emitted outermost first.
    let indent = tree.ancestors(id).fold(String::new(), |acc, ancestor| {
        let segment = if tree.is_last_sibling(ancestor) {
            GAP
        } else {
            CONTINUATION
        };
        segment.to_owned() + &acc
    });

    let connector = if tree.is_last_sibling(id) {
        LAST_BRANCH
    } else {
        BRANCH
    };

    let info = tree.info(id);
    let mut line = format!("{indent}{connector}{RULE}{}", info.name.to_string_lossy());
    if !info.is_dir {
        line.push(' ');
        line.push_str(&size_annotation(info.size));
    }
    line.push('\n');
    line
}
