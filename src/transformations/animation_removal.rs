use crate::types::{ShapeNode, TagKind};

/// Whether a node is animation or stylesheet content that never survives normalization
///
/// Animation elements (`animate`, `animateTransform`, `animateMotion`,
/// `animateColor`, `set`) and `<style>` blocks only make sense in the editor
/// preview; static icons drop them along with their subtrees.
pub fn is_animation_node(node: &ShapeNode) -> bool {
    matches!(node.kind(), TagKind::Animation | TagKind::Style)
}

/// Detach the nodes at the given child-index paths from `root`
///
/// Paths are relative to `root` (an empty path is the root itself and is
/// ignored). They are removed in reverse document order so that removing
/// one node never shifts the indices of another path still pending, and
/// each path is removed at most once.
pub fn remove_paths(root: &mut ShapeNode, mut paths: Vec<Vec<usize>>) -> usize {
    paths.sort_unstable();
    paths.dedup();

    let mut removed = 0;
    for path in paths.iter().rev() {
        let Some((last, parents)) = path.split_last() else {
            continue;
        };

        if let Some(parent) = node_at_mut(root, parents) {
            if *last < parent.children.len() {
                parent.children.remove(*last);
                removed += 1;
            }
        }
    }

    removed
}

fn node_at_mut<'a>(node: &'a mut ShapeNode, path: &[usize]) -> Option<&'a mut ShapeNode> {
    match path.split_first() {
        None => Some(node),
        Some((index, rest)) => node_at_mut(node.children.get_mut(*index)?, rest),
    }
}
