//! The Vimshottari daśā tree.
//!
//! A [`DashaForest`] owns every node of one computed tree (or list of
//! trees, for the top-level Mahadashas) in a flat arena. Each node's
//! `parent` is a non-owning index back into the same arena — the "weak
//! back-reference" the design notes call for, expressed as an arena index
//! rather than a `Weak` pointer, since the forest is the sole owner.

use jyotish_ephemeris::DashaDepth;
use jyotish_time::Interval;
use jyotish_zodiac::Body;

/// One node of a daśā tree: a period ruled by a planet at a given nesting
/// depth, with non-owning indices into the owning [`DashaForest`] for its
/// children and parent.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaNode {
    pub period: Interval,
    pub planet: Body,
    pub depth: DashaDepth,
    pub(crate) children: Vec<usize>,
    pub(crate) parent: Option<usize>,
}

impl DashaNode {
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    pub fn parent_index(&self) -> Option<usize> {
        self.parent
    }
}

/// An arena of [`DashaNode`]s plus the indices of its top-level (Mahadasha)
/// roots. The forest owns every node; `DashaNode::parent` is a plain index
/// into this arena, never an owning reference, so there is no cycle to
/// worry about when the forest itself is dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashaForest {
    nodes: Vec<DashaNode>,
    roots: Vec<usize>,
}

impl DashaForest {
    pub(crate) fn from_arena(nodes: Vec<DashaNode>) -> Self {
        let roots = nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(i, _)| i)
            .collect();
        Self { nodes, roots }
    }

    /// The top-level Mahadasha nodes, in chronological order.
    pub fn roots(&self) -> impl Iterator<Item = &DashaNode> {
        self.roots.iter().map(move |&i| &self.nodes[i])
    }

    pub fn root_indices(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, index: usize) -> &DashaNode {
        &self.nodes[index]
    }

    pub fn children_of(&self, node: &DashaNode) -> impl Iterator<Item = &DashaNode> {
        node.children.iter().map(move |&i| &self.nodes[i])
    }

    /// The node's parent, resolved through the arena — `None` for a root.
    pub fn parent_of(&self, node: &DashaNode) -> Option<&DashaNode> {
        node.parent.map(|i| &self.nodes[i])
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Sum of durations of the top-level (Mahadasha) periods.
    pub fn total_duration_seconds(&self) -> f64 {
        self.roots().map(|n| n.period.duration().as_seconds()).sum()
    }

    /// Filter this forest to nodes whose periods intersect `range`, clipping
    /// each kept period to the intersection and recursing into children
    /// A node whose period
    /// does not intersect `range` is dropped along with its whole subtree.
    pub fn overlapping(&self, range: Interval) -> DashaForest {
        let mut out = Vec::new();
        for &root in &self.roots {
            trim_node(&self.nodes, root, range, None, &mut out);
        }
        DashaForest::from_arena(out)
    }
}

fn trim_node(
    nodes: &[DashaNode],
    index: usize,
    range: Interval,
    parent: Option<usize>,
    out: &mut Vec<DashaNode>,
) -> Option<usize> {
    let node = &nodes[index];
    let clipped = node.period.intersection(range)?;

    let new_index = out.len();
    out.push(DashaNode {
        period: clipped,
        planet: node.planet,
        depth: node.depth,
        children: Vec::new(),
        parent,
    });

    for &child in &node.children {
        if let Some(child_index) = trim_node(nodes, child, range, Some(new_index), out) {
            out[new_index].children.push(child_index);
        }
    }

    Some(new_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::Instant;

    fn at(day: u32) -> Instant {
        Instant::from_utc_ymd_hms(2020, 1, day, 0, 0, 0.0)
    }

    fn sample_forest() -> DashaForest {
        let nodes = vec![
            DashaNode {
                period: Interval::new(at(1), at(11)),
                planet: Body::Moon,
                depth: DashaDepth::Maha,
                children: vec![1, 2],
                parent: None,
            },
            DashaNode {
                period: Interval::new(at(1), at(6)),
                planet: Body::Moon,
                depth: DashaDepth::Antar,
                children: vec![],
                parent: Some(0),
            },
            DashaNode {
                period: Interval::new(at(6), at(11)),
                planet: Body::Mars,
                depth: DashaDepth::Antar,
                children: vec![],
                parent: Some(0),
            },
        ];
        DashaForest::from_arena(nodes)
    }

    #[test]
    fn roots_only_includes_parentless_nodes() {
        let forest = sample_forest();
        assert_eq!(forest.roots().count(), 1);
    }

    #[test]
    fn children_and_parent_resolve_through_arena() {
        let forest = sample_forest();
        let root = forest.roots().next().unwrap();
        let children: Vec<_> = forest.children_of(root).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(forest.parent_of(children[0]).unwrap().planet, Body::Moon);
    }

    #[test]
    fn overlapping_clips_and_drops_non_intersecting_children() {
        let forest = sample_forest();
        let range = Interval::new(at(1), at(8));
        let trimmed = forest.overlapping(range);
        let root = trimmed.roots().next().unwrap();
        assert_eq!(root.period, Interval::new(at(1), at(8)));
        let children: Vec<_> = trimmed.children_of(root).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].period, Interval::new(at(6), at(8)));
    }
}
