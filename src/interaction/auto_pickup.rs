use bevy::prelude::*;
use serde::Deserialize;

use crate::item::DroppedItem;

/// The player whose proximity triggers pickup requests.
#[derive(Component, Debug, Default)]
pub struct LocalPlayer;

/// Configuration for proximity pickup.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AutoPickupConfig {
    pub enabled: bool,
    /// Squared distance, in blocks, under which an item is requested.
    pub radius_sq: f32,
    /// Holding this key suppresses requests.
    pub sneak_key: KeyCode,
}

impl Default for AutoPickupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius_sq: 1.0,
            sneak_key: KeyCode::ShiftLeft,
        }
    }
}

/// Message asking the host to run its interact action on a dropped item.
/// Whether the player may take it is the host's decision.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractRequested {
    pub item: Entity,
}

/// Set on an item once a request went out; removed when the item leaves range.
#[derive(Component, Debug, Default)]
pub struct PickupPending;

/// Check if an item close enough should be requested (pure function for testing).
pub fn should_request_pickup(distance_sq: f32, sneaking: bool, config: &AutoPickupConfig) -> bool {
    config.enabled && !sneaking && distance_sq < config.radius_sq
}

/// System that requests pickup of items next to the local player.
pub fn auto_pickup_system(
    config: Res<AutoPickupConfig>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    player_query: Query<&Transform, With<LocalPlayer>>,
    item_query: Query<(Entity, &Transform, Has<PickupPending>), With<DroppedItem>>,
    mut commands: Commands,
    mut requests: MessageWriter<InteractRequested>,
) {
    let Ok(player_tf) = player_query.single() else {
        return;
    };
    let sneaking = keys.is_some_and(|k| k.pressed(config.sneak_key));
    let player_pos = player_tf.translation;

    for (item, item_tf, pending) in &item_query {
        let distance_sq = player_pos.distance_squared(item_tf.translation);

        if should_request_pickup(distance_sq, sneaking, &config) {
            if !pending {
                requests.write(InteractRequested { item });
                commands.entity(item).insert(PickupPending);
                debug!("Requested pickup of {item} at distance² {distance_sq:.3}");
            }
        } else if pending {
            commands.entity(item).remove::<PickupPending>();
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;
    use crate::item::ItemId;
    use crate::test_helpers::fixtures;

    fn pickup_app() -> App {
        let mut app = fixtures::test_app();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_message::<InteractRequested>()
            .add_systems(Update, auto_pickup_system);
        app
    }

    fn spawn_item(app: &mut App, position: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                DroppedItem::new(ItemId(0), 1),
                Transform::from_translation(position),
            ))
            .id()
    }

    fn drain(app: &mut App) -> Vec<InteractRequested> {
        app.world_mut()
            .resource_mut::<Messages<InteractRequested>>()
            .drain()
            .collect()
    }

    #[test]
    fn should_request_within_radius() {
        let config = AutoPickupConfig::default();
        assert!(should_request_pickup(0.0, false, &config));
        assert!(should_request_pickup(0.99, false, &config));
        assert!(!should_request_pickup(1.0, false, &config));
        assert!(!should_request_pickup(4.0, false, &config));
    }

    #[test]
    fn sneaking_or_disabled_suppresses() {
        let mut config = AutoPickupConfig::default();
        assert!(!should_request_pickup(0.1, true, &config));
        config.enabled = false;
        assert!(!should_request_pickup(0.1, false, &config));
    }

    #[test]
    fn nearby_item_requested_once() {
        let mut app = pickup_app();
        app.world_mut()
            .spawn((LocalPlayer, Transform::from_xyz(0.0, 0.0, 0.0)));
        let near = spawn_item(&mut app, Vec3::new(0.5, 0.0, 0.5));
        spawn_item(&mut app, Vec3::new(3.0, 0.0, 0.0));

        app.update();
        assert_eq!(drain(&mut app), vec![InteractRequested { item: near }]);

        app.update();
        assert!(drain(&mut app).is_empty());
    }

    #[test]
    fn leaving_range_rearms_request() {
        let mut app = pickup_app();
        app.world_mut().spawn((LocalPlayer, Transform::default()));
        let item = spawn_item(&mut app, Vec3::new(0.5, 0.0, 0.0));

        app.update();
        assert_eq!(drain(&mut app).len(), 1);

        app.world_mut().get_mut::<Transform>(item).unwrap().translation.x = 5.0;
        app.update();
        assert!(app.world().get::<PickupPending>(item).is_none());

        app.world_mut().get_mut::<Transform>(item).unwrap().translation.x = 0.5;
        app.update();
        assert_eq!(drain(&mut app), vec![InteractRequested { item }]);
    }

    #[test]
    fn sneak_key_blocks_requests() {
        let mut app = pickup_app();
        app.world_mut().spawn((LocalPlayer, Transform::default()));
        spawn_item(&mut app, Vec3::new(0.2, 0.0, 0.0));
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ShiftLeft);

        app.update();

        assert!(drain(&mut app).is_empty());
    }

    #[test]
    fn no_player_does_nothing() {
        let mut app = pickup_app();
        spawn_item(&mut app, Vec3::ZERO);

        app.update();

        assert!(drain(&mut app).is_empty());
    }
}
