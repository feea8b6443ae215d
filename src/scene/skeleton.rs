use glam::{Affine3A, Mat4};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::errors::{AnimationError, Result};
use crate::scene::transform::JointTransform;

/// One node of a skeleton.
#[derive(Debug, Clone)]
pub struct Joint {
    pub name: String,
    pub(crate) index: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) children: SmallVec<[usize; 4]>,

    /// Local transform, relative to the parent joint.
    pub transform: JointTransform,

    // === Derived matrices, rewritten by `Skeleton::update_matrices` ===
    pub(crate) local_matrix: Affine3A,
    pub(crate) hierarchy_matrix: Affine3A,
}

impl Joint {
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// The joint's transform composed with all of its ancestors'.
    #[inline]
    #[must_use]
    pub fn hierarchy_matrix(&self) -> &Affine3A {
        &self.hierarchy_matrix
    }

    /// Hierarchy matrix as `Mat4`, for GPU upload.
    #[inline]
    #[must_use]
    pub fn hierarchy_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.hierarchy_matrix)
    }
}

/// A flattened joint hierarchy.
///
/// Joints are stored so that every parent precedes its children. A single
/// forward pass over `joints` therefore visits parents first, which is what
/// [`Skeleton::update_matrices`] relies on.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub name: String,
    pub(crate) root: usize,
    pub(crate) joint_by_name: FxHashMap<String, usize>,
    pub(crate) joints: Vec<Joint>,
}

impl Skeleton {
    /// Assembles a skeleton from joints that already satisfy the ordering
    /// invariant. Used by the builder.
    pub(crate) fn from_joints(name: String, joints: Vec<Joint>) -> Self {
        let mut joint_by_name = FxHashMap::default();
        joint_by_name.reserve(joints.len());
        for joint in &joints {
            if joint_by_name.contains_key(&joint.name) {
                log::warn!(
                    "Skeleton '{name}': duplicate joint name '{}', lookups resolve to the first",
                    joint.name
                );
                continue;
            }
            joint_by_name.insert(joint.name.clone(), joint.index);
        }

        let root = joints.iter().position(|j| j.parent.is_none()).unwrap_or(0);

        let mut skeleton = Self {
            name,
            root,
            joint_by_name,
            joints,
        };
        skeleton.update_matrices();
        skeleton
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn root_joint(&self) -> Option<&Joint> {
        self.joints.get(self.root)
    }

    #[inline]
    #[must_use]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    #[inline]
    #[must_use]
    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    #[must_use]
    pub fn find_joint(&self, name: &str) -> Option<usize> {
        self.joint_by_name.get(name).copied()
    }

    /// Replaces a joint's local transform. Matrices are stale until the next
    /// [`Skeleton::update_matrices`].
    pub fn set_joint_transform(&mut self, index: usize, transform: JointTransform) -> bool {
        match self.joints.get_mut(index) {
            Some(joint) => {
                joint.transform = transform;
                true
            }
            None => false,
        }
    }

    /// Recomputes every local and hierarchy matrix in one forward pass.
    pub fn update_matrices(&mut self) {
        for i in 0..self.joints.len() {
            let local = self.joints[i].transform.to_matrix();
            let hierarchy = match self.joints[i].parent {
                Some(p) if p < i => self.joints[p].hierarchy_matrix * local,
                _ => local,
            };

            let joint = &mut self.joints[i];
            joint.local_matrix = local;
            joint.hierarchy_matrix = hierarchy;
        }
    }

    /// The current pose as GPU-ready matrices, indexed like `joints`.
    pub fn hierarchy_matrices(&self) -> impl ExactSizeIterator<Item = Mat4> + '_ {
        self.joints.iter().map(Joint::hierarchy_matrix_as_mat4)
    }

    /// Checks the structural invariants: positional indices, in-range links,
    /// a single root and parent-before-child ordering.
    pub fn validate(&self) -> Result<()> {
        if self.joints.is_empty() {
            return Err(AnimationError::EmptySkeleton);
        }

        let len = self.joints.len();
        let mut roots = 0;
        for (position, joint) in self.joints.iter().enumerate() {
            if joint.index != position {
                return Err(AnimationError::IndexMismatch {
                    position,
                    index: joint.index,
                });
            }
            match joint.parent {
                None => roots += 1,
                Some(parent) if parent >= len => {
                    return Err(AnimationError::LinkOutOfRange {
                        joint: position,
                        link: parent,
                    });
                }
                Some(parent) if parent >= position => {
                    return Err(AnimationError::ParentAfterChild {
                        parent,
                        child: position,
                    });
                }
                Some(_) => {}
            }
            for &child in &joint.children {
                if child >= len {
                    return Err(AnimationError::LinkOutOfRange {
                        joint: position,
                        link: child,
                    });
                }
                if child <= position {
                    return Err(AnimationError::ParentAfterChild {
                        parent: position,
                        child,
                    });
                }
            }
        }

        if roots != 1 || self.joints[self.root].parent.is_some() {
            return Err(AnimationError::InvalidRoot { found: roots });
        }
        Ok(())
    }
}
