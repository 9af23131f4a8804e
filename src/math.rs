use bevy::prelude::*;
use serde::Deserialize;

/// Axis-aligned box in block-local units, where `1.0` spans one full block.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ShapeBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl ShapeBox {
    pub const FULL: ShapeBox = ShapeBox {
        min: [0.0, 0.0, 0.0],
        max: [1.0, 1.0, 1.0],
    };

    /// Box covering the full block footprint up to `height`.
    pub fn slab(height: f32) -> Self {
        Self {
            min: [0.0, 0.0, 0.0],
            max: [1.0, height, 1.0],
        }
    }

    pub fn is_degenerate(&self) -> bool {
        (0..3).any(|i| self.max[i] < self.min[i])
    }

    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(&self.max).all(|v| v.is_finite())
    }
}

/// Outline of a block built from one or more boxes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct OutlineShape(pub Vec<ShapeBox>);

impl OutlineShape {
    pub fn full() -> Self {
        Self(vec![ShapeBox::FULL])
    }

    /// Highest vertical extent of the shape. An empty shape reports `0.0`.
    pub fn max_y(&self) -> f32 {
        self.0.iter().map(|b| b.max[1]).fold(0.0, f32::max)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Block cell containing a world-space position.
pub fn block_pos_of(position: Vec3) -> IVec3 {
    position.floor().as_ivec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_y_of_full_block() {
        assert_eq!(OutlineShape::full().max_y(), 1.0);
    }

    #[test]
    fn max_y_picks_tallest_box() {
        let stairs = OutlineShape(vec![ShapeBox::slab(0.5), ShapeBox {
            min: [0.0, 0.5, 0.5],
            max: [1.0, 1.0, 1.0],
        }]);
        assert_eq!(stairs.max_y(), 1.0);
    }

    #[test]
    fn empty_shape_has_zero_height() {
        assert_eq!(OutlineShape::default().max_y(), 0.0);
        assert!(OutlineShape::default().is_empty());
    }

    #[test]
    fn degenerate_box_detected() {
        let b = ShapeBox {
            min: [0.0, 0.6, 0.0],
            max: [1.0, 0.2, 1.0],
        };
        assert!(b.is_degenerate());
        assert!(!ShapeBox::FULL.is_degenerate());
    }

    #[test]
    fn block_pos_floors_negative_coordinates() {
        assert_eq!(block_pos_of(Vec3::new(0.5, 64.2, -0.3)), IVec3::new(0, 64, -1));
        assert_eq!(block_pos_of(Vec3::new(-1.0, 0.0, 2.99)), IVec3::new(-1, 0, 2));
    }
}
