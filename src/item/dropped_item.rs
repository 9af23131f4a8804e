use bevy::prelude::*;

use super::definition::ModelDef;
use super::registry::{ItemId, ItemRegistry};
use crate::registry::RegistryError;

/// Fixed tick rate that item age is counted in.
pub const TICKS_PER_SECOND: f64 = 20.0;

/// Default collision height of a dropped item entity, in blocks.
pub const DEFAULT_DROP_HEIGHT: f32 = 0.25;

/// A dropped item entity in the world.
#[derive(Component, Debug, Clone)]
pub struct DroppedItem {
    pub item: ItemId,
    pub count: u16,
    /// Fixed ticks since the item was dropped.
    pub age_ticks: u32,
    /// Collision height of the entity, used to desync spin between item types.
    pub height: f32,
}

impl DroppedItem {
    pub fn new(item: ItemId, count: u16) -> Self {
        Self {
            item,
            count,
            age_ticks: 0,
            height: DEFAULT_DROP_HEIGHT,
        }
    }
}

/// Physics state owned by the host simulation.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropMotion {
    pub on_ground: bool,
    pub submerged: bool,
}

/// Marks the child entity carrying a dropped item's drawable model.
#[derive(Component, Debug, Default)]
pub struct ItemModel;

/// Transform hints baked into the drawn model.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ModelHints {
    pub ground_scale: Vec3,
    pub has_depth: bool,
}

impl Default for ModelHints {
    fn default() -> Self {
        ModelDef::default().into()
    }
}

impl From<ModelDef> for ModelHints {
    fn from(def: ModelDef) -> Self {
        Self {
            ground_scale: Vec3::from_array(def.ground_scale),
            has_depth: def.has_depth,
        }
    }
}

/// Last spin rotation written by the pose system, for other systems that want
/// to stay visually consistent with the drawn model.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinCache(pub Vec3);

/// Entities created by [`spawn_dropped_item`].
#[derive(Debug, Clone, Copy)]
pub struct DropHandles {
    pub root: Entity,
    pub model: Entity,
}

/// Spawns a dropped item at `position` with an empty model child.
///
/// The host attaches its mesh and material to `model`; the pose system owns
/// the child's `Transform` from then on.
pub fn spawn_dropped_item(
    commands: &mut Commands,
    items: &ItemRegistry,
    name: &str,
    count: u16,
    position: Vec3,
) -> Result<DropHandles, RegistryError> {
    let id = items.by_name(name)?;
    let hints = items
        .get(id)
        .map(|d| ModelHints::from(d.model))
        .unwrap_or_default();

    let model = commands
        .spawn((ItemModel, hints, Transform::default()))
        .id();
    let root = commands
        .spawn((
            Name::new(format!("drop:{name}")),
            DroppedItem::new(id, count),
            DropMotion::default(),
            SpinCache::default(),
            Transform::from_translation(position),
            Visibility::default(),
        ))
        .add_child(model)
        .id();

    Ok(DropHandles { root, model })
}

/// Advances item age by one fixed tick.
pub fn advance_item_age(mut query: Query<&mut DroppedItem>) {
    for mut item in &mut query {
        item.age_ticks = item.age_ticks.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn new_drop_starts_at_age_zero() {
        let item = DroppedItem::new(ItemId(3), 5);
        assert_eq!(item.age_ticks, 0);
        assert_eq!(item.count, 5);
        assert_eq!(item.height, DEFAULT_DROP_HEIGHT);
    }

    #[test]
    fn hints_from_model_def() {
        let hints = ModelHints::from(ModelDef {
            ground_scale: [0.25, 0.5, 0.75],
            has_depth: true,
        });
        assert_eq!(hints.ground_scale, Vec3::new(0.25, 0.5, 0.75));
        assert!(hints.has_depth);
    }

    #[test]
    fn age_advances_once_per_run() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, advance_item_age);
        let e = app.world_mut().spawn(DroppedItem::new(ItemId(0), 1)).id();

        app.update();
        app.update();

        let item = app.world().get::<DroppedItem>(e).unwrap();
        assert_eq!(item.age_ticks, 2);
    }

    #[test]
    fn age_saturates() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, advance_item_age);
        let mut item = DroppedItem::new(ItemId(0), 1);
        item.age_ticks = u32::MAX;
        let e = app.world_mut().spawn(item).id();

        app.update();

        assert_eq!(app.world().get::<DroppedItem>(e).unwrap().age_ticks, u32::MAX);
    }

    #[test]
    fn spawn_creates_root_and_model_child() {
        let mut app = fixtures::test_app();
        let handles = app
            .world_mut()
            .run_system_once(|mut commands: Commands, items: Res<ItemRegistry>| {
                spawn_dropped_item(&mut commands, &items, "stone", 3, Vec3::new(1.0, 2.0, 3.0))
            })
            .unwrap()
            .unwrap();

        let world = app.world();
        let drop = world.get::<DroppedItem>(handles.root).unwrap();
        assert_eq!(drop.count, 3);
        assert_eq!(
            world.get::<Transform>(handles.root).unwrap().translation,
            Vec3::new(1.0, 2.0, 3.0)
        );
        assert!(world.get::<ItemModel>(handles.model).is_some());
        assert_eq!(
            world.get::<ChildOf>(handles.model).unwrap().parent(),
            handles.root
        );
    }

    #[test]
    fn spawn_unknown_item_fails() {
        let mut app = fixtures::test_app();
        let result = app
            .world_mut()
            .run_system_once(|mut commands: Commands, items: Res<ItemRegistry>| {
                spawn_dropped_item(&mut commands, &items, "nope", 1, Vec3::ZERO)
            })
            .unwrap();
        assert!(matches!(result, Err(RegistryError::UnknownItem(_))));
    }
}
