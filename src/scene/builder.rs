//! Skeleton construction from an imported node tree.
//!
//! The import layer hands over a plain tree of named nodes with bind-pose
//! transforms. Building flattens it depth-first: each node receives the next
//! free index *before* its children are visited, so parent indices are always
//! smaller than child indices and a forward pass over the joint list visits
//! parents first.

use glam::{Affine3A, Quat, Vec3};
use smallvec::SmallVec;

use crate::scene::skeleton::{Joint, Skeleton};
use crate::scene::transform::JointTransform;

/// One node of an imported hierarchy.
#[derive(Debug, Clone, Default)]
pub struct SourceNode {
    pub name: String,
    pub transform: JointTransform,
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    #[must_use]
    pub fn new(name: impl Into<String>, transform: JointTransform) -> Self {
        Self {
            name: name.into(),
            transform,
            children: Vec::new(),
        }
    }

    /// Node with a bind pose taken from a local matrix.
    #[must_use]
    pub fn from_matrix(name: impl Into<String>, matrix: Affine3A) -> Self {
        Self::new(name, JointTransform::from_matrix(matrix))
    }

    /// Node at `translation` with identity rotation and unit scale.
    #[must_use]
    pub fn at(name: impl Into<String>, translation: Vec3) -> Self {
        Self::new(
            name,
            JointTransform::new(translation, Quat::IDENTITY, Vec3::ONE),
        )
    }

    #[must_use]
    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SourceNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(SourceNode::count).sum::<usize>()
    }
}

impl Skeleton {
    /// Builds a skeleton named after the root node.
    #[must_use]
    pub fn from_node_tree(root: &SourceNode) -> Self {
        Self::from_node_tree_named(root.name.clone(), root)
    }

    /// Builds a skeleton from `root`, populating every joint's local and
    /// hierarchy matrices from the bind pose.
    #[must_use]
    pub fn from_node_tree_named(name: impl Into<String>, root: &SourceNode) -> Self {
        let mut joints = Vec::with_capacity(root.count());
        append_joint(root, None, &mut joints);
        Self::from_joints(name.into(), joints)
    }
}

fn append_joint(node: &SourceNode, parent: Option<usize>, joints: &mut Vec<Joint>) -> usize {
    let index = joints.len();
    debug_assert!(parent.is_none_or(|p| p < index));

    joints.push(Joint {
        name: node.name.clone(),
        index,
        parent,
        children: SmallVec::new(),
        transform: node.transform,
        local_matrix: Affine3A::IDENTITY,
        hierarchy_matrix: Affine3A::IDENTITY,
    });

    for child in &node.children {
        let child_index = append_joint(child, Some(index), joints);
        joints[index].children.push(child_index);
    }

    index
}
