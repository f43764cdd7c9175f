mod common;

use common::{World, attack_actor, weights};
use game_core::{
    ActTarget, Actor, ActorCore, ActorError, ActorKind, AttackActor, ConfigurationError, EntityId,
    MoveActor, ObjectCategory, Team, TouchEvent,
};

#[test]
fn initialize_without_required_weight_fails() {
    let mut attack = AttackActor::new();
    let err = attack
        .initialize(Some(ActTarget::unit(EntityId(1))), weights([("range", 2)]))
        .unwrap_err();
    assert_eq!(
        err,
        ActorError::Configuration(ConfigurationError::MissingWeight {
            kind: ActorKind::Attack,
            key: "damage",
        })
    );

    let mut movement = MoveActor::new();
    let err = movement
        .initialize(Some(ActTarget::unit(EntityId(1))), weights([("range", 2)]))
        .unwrap_err();
    assert!(matches!(
        err,
        ActorError::Configuration(ConfigurationError::MissingWeight { key: "actPoint", .. })
    ));
}

#[test]
fn failed_initialize_changes_nothing() {
    let mut world = World::new(3, 3);
    let unit = world.place(1, Team::Ally, 0, 0);

    let mut fresh = AttackActor::new();
    fresh
        .initialize(Some(ActTarget::unit(unit)), weights([("range", 2)]))
        .unwrap_err();
    assert_eq!(fresh.core().target_entity(), None);
    assert_eq!(fresh.weight("range"), 0);
    assert_eq!(
        fresh.run(&mut world.cx()),
        Err(ActorError::NotInitialized(ActorKind::Attack))
    );

    let mut configured = attack_actor(unit, 2, 5);
    let err = configured
        .initialize(None, weights([("range", 4), ("damage", 9)]))
        .unwrap_err();
    assert!(matches!(
        err,
        ActorError::Configuration(ConfigurationError::MissingTarget { .. })
    ));
    assert_eq!(configured.core().target_entity(), Some(unit));
    assert_eq!(configured.range(), 2);
    assert_eq!(configured.damage(), 5);
    assert!(configured.run(&mut world.cx()).is_ok());
}

#[test]
fn initialize_with_required_weights_leaves_actor_dormant() {
    let attack = attack_actor(EntityId(1), 2, 5);
    assert!(!attack.is_running());
    assert!(attack.check_required_weights().is_ok());
    assert_eq!(attack.range(), 2);
    assert_eq!(attack.damage(), 5);
}

#[test]
fn initialize_requires_target() {
    let mut attack = AttackActor::new();
    let err = attack
        .initialize(None, weights([("range", 2), ("damage", 5)]))
        .unwrap_err();
    assert_eq!(
        err,
        ActorError::Configuration(ConfigurationError::MissingTarget {
            kind: ActorKind::Attack
        })
    );
}

#[test]
fn move_actor_rejects_non_unit_target() {
    let mut movement = MoveActor::new();
    let err = movement
        .initialize(
            Some(ActTarget::placeable(EntityId(9))),
            weights([("range", 2), ("actPoint", 1)]),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ActorError::Configuration(ConfigurationError::TargetCategoryMismatch { required, .. })
            if required == ObjectCategory::UNIT_OBJECT
    ));
}

#[test]
fn later_duplicate_weights_overwrite_earlier() {
    let mut attack = AttackActor::new();
    let names = ["range", "damage", "range"].map(String::from);
    attack
        .initialize_from_lists(Some(ActTarget::unit(EntityId(1))), &names, &[1, 4, 3])
        .unwrap();
    assert_eq!(attack.range(), 3);
    assert_eq!(attack.weight("damage"), 4);
}

#[test]
fn unknown_weight_reads_as_zero() {
    let attack = attack_actor(EntityId(1), 2, 5);
    assert_eq!(attack.weight("heal"), 0);
    assert_eq!(attack.weight(""), 0);
    assert_eq!(attack.core().act_point_cost(), 0);

    let dormant = MoveActor::new();
    assert_eq!(dormant.weight("range"), 0);
}

#[test]
fn run_before_initialize_is_rejected() {
    let mut world = World::new(3, 3);
    let mut attack = AttackActor::new();
    let err = attack.run(&mut world.cx()).unwrap_err();
    assert_eq!(err, ActorError::NotInitialized(ActorKind::Attack));
    assert!(!attack.is_running());
}

#[test]
fn core_run_selects_and_reset_deselects_target() {
    let mut world = World::new(3, 3);
    let unit = world.place(1, Team::Ally, 1, 1);

    let mut core = ActorCore::new(ActorKind::Attack);
    core.initialize(
        Some(ActTarget::unit(unit)),
        weights([("range", 1)]),
        &["range"],
        ObjectCategory::PLACEABLE,
    )
    .unwrap();

    core.mark_running(&mut world.cx());
    assert!(core.is_running());
    assert_eq!(world.selection, Some(unit));

    core.mark_dormant(&mut world.cx());
    assert!(!core.is_running());
    assert_eq!(world.selection, None);
}

#[test]
fn done_phase_absorbs_events() {
    let mut world = World::new(3, 3);
    let unit = world.place(1, Team::Ally, 0, 0);
    let mut attack = attack_actor(unit, 1, 1);
    attack.run(&mut world.cx()).unwrap();

    let mut cx = world.cx();
    attack
        .on_touch_event(TouchEvent::Tap, &mut cx)
        .unwrap();
    attack
        .on_touch_event(TouchEvent::Confirm, &mut cx)
        .unwrap();
    assert!(cx.is_finish_requested());
    assert!(
        attack
            .on_touch_event(TouchEvent::Tap, &mut cx)
            .unwrap()
    );
}
