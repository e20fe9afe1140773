use glam::{Mat3, Mat4};

/// Transforms of one draw instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    pub local_to_world: Mat4,
    /// Inverse-transpose of the upper 3x3, for normals
    pub normal_matrix: Mat3,
}

impl InstanceTransform {
    pub fn new(local_to_world: Mat4) -> Self {
        Self {
            local_to_world,
            normal_matrix: Mat3::from_mat4(local_to_world).inverse().transpose(),
        }
    }
}

/// Per-draw instance table indexed by `instance_index`
///
/// Normal matrices are computed once on insert rather than per vertex.
#[derive(Debug, Clone, Default)]
pub struct InstanceTable {
    instances: Vec<InstanceTransform>,
}

impl InstanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transforms(transforms: impl IntoIterator<Item = Mat4>) -> Self {
        Self {
            instances: transforms.into_iter().map(InstanceTransform::new).collect(),
        }
    }

    /// Add an instance and return its index
    pub fn push(&mut self, local_to_world: Mat4) -> u32 {
        let index = self.instances.len() as u32;
        self.instances.push(InstanceTransform::new(local_to_world));
        index
    }

    pub fn get(&self, instance_index: u32) -> Option<&InstanceTransform> {
        self.instances.get(instance_index as usize)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
