use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// One step applied to a model's transform stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseOp {
    Translate(Vec3),
    Rotate { axis: Axis, degrees: f32 },
}

impl PoseOp {
    pub fn to_matrix(self) -> Mat4 {
        match self {
            PoseOp::Translate(v) => Mat4::from_translation(v),
            PoseOp::Rotate { axis, degrees } => {
                Mat4::from_axis_angle(axis.unit(), degrees.to_radians())
            }
        }
    }
}

/// Ordered transform operations, applied first to last in model space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseAdjustment {
    ops: Vec<PoseOp>,
}

impl PoseAdjustment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        self.ops.push(PoseOp::Translate(offset));
        self
    }

    pub fn rotate(&mut self, axis: Axis, degrees: f32) -> &mut Self {
        self.ops.push(PoseOp::Rotate { axis, degrees });
        self
    }

    /// Rotates about a pivot raised `pivot_y` above the model origin.
    pub fn rotate_about(&mut self, pivot_y: f32, axis: Axis, degrees: f32) -> &mut Self {
        self.translate(Vec3::new(0.0, pivot_y, 0.0))
            .rotate(axis, degrees)
            .translate(Vec3::new(0.0, -pivot_y, 0.0))
    }

    pub fn ops(&self) -> &[PoseOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Sum of all translations in the frame they were issued in, ignoring
    /// rotations.
    pub fn net_translation(&self) -> Vec3 {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PoseOp::Translate(v) => Some(*v),
                PoseOp::Rotate { .. } => None,
            })
            .sum()
    }

    pub fn rotations(&self) -> impl Iterator<Item = (Axis, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PoseOp::Rotate { axis, degrees } => Some((*axis, *degrees)),
            PoseOp::Translate(_) => None,
        })
    }

    /// Composes the stack into a single matrix.
    pub fn to_matrix(&self) -> Mat4 {
        self.ops
            .iter()
            .fold(Mat4::IDENTITY, |acc, op| acc * op.to_matrix())
    }

    /// Final model transform: the pose followed by the model's ground scale.
    pub fn to_transform(&self, ground_scale: Vec3) -> Transform {
        Transform::from_matrix(self.to_matrix() * Mat4::from_scale(ground_scale))
    }
}
