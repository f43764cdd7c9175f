use game_content::MapRecord;
use game_core::{
    ActorError, ActorKind, ActorRecord, ActorRegistry, ConfigurationError, EntityId, GameConfig,
    MapDimensions, MoveActor, PlaceInfo, Position, QueueError, Team, TileBoard, TileState,
    TouchEvent, UnitRecord,
};
use runtime::{Battle, BattleEvent, RuntimeError, TileGrid};

fn knight() -> UnitRecord {
    UnitRecord {
        no: 1,
        name: "Knight".into(),
        team: Team::Ally,
        hp: 10,
        actors: vec![
            ActorRecord::new("MoveActor", [("range", 2), ("actPoint", 1)]),
            ActorRecord::new("AttackActor", [("range", 1), ("damage", 4), ("actPoint", 1)]),
        ],
    }
}

fn slime() -> UnitRecord {
    UnitRecord {
        no: 2,
        name: "Slime".into(),
        team: Team::Enemy,
        hp: 6,
        actors: vec![ActorRecord::new("attack", [("range", 1), ("damage", 2)])],
    }
}

fn skirmish(config: GameConfig) -> (Battle, EntityId, EntityId) {
    let mut battle = Battle::new(config, TileGrid::filled(5, 5));
    let knight = battle.spawn(&knight(), Position::new(0, 0)).unwrap();
    let slime = battle.spawn(&slime(), Position::new(2, 1)).unwrap();
    battle.drain_events();
    (battle, knight, slime)
}

#[test]
fn move_then_attack_defeats_enemy() {
    let (mut battle, knight, slime) = skirmish(GameConfig::default());
    battle.reserve(knight, ActorKind::Move).unwrap();
    battle.reserve(knight, ActorKind::Attack).unwrap();

    assert_eq!(battle.tick().unwrap(), 1);
    assert!(battle.is_running(knight));

    battle.touch_unit(knight, TouchEvent::Tap).unwrap();
    assert_eq!(battle.selected(), Some(knight));
    assert!(battle.touch_tile(Position::new(1, 1)).unwrap());

    assert_eq!(battle.grid().placed_tile(knight), Some(Position::new(1, 1)));
    assert_eq!(battle.turn().act_points, 2);
    assert!(!battle.is_running(knight));
    assert_eq!(
        battle.unit(knight).unwrap().queue.head_kind(),
        Some(ActorKind::Attack)
    );

    assert_eq!(battle.tick().unwrap(), 1);
    battle.touch_unit(knight, TouchEvent::Tap).unwrap();
    assert_eq!(
        battle.grid().tile_state(Position::new(2, 1)),
        Some(TileState::Active)
    );

    // Touching the enemy while the knight aims is an attack on it.
    assert!(battle.touch_unit(slime, TouchEvent::Tap).unwrap());
    assert_eq!(battle.unit(slime).unwrap().hp, 2);
    battle.touch_tile(Position::new(2, 1)).unwrap();
    assert!(battle.unit(slime).is_none());
    assert_eq!(battle.grid().occupant(Position::new(2, 1)), None);
    assert_eq!(battle.winner(), Some(Team::Ally));

    battle.touch_unit(knight, TouchEvent::Confirm).unwrap();
    assert!(battle.unit(knight).unwrap().queue.is_idle());
    assert_eq!(battle.turn().act_points, 1);
    assert_eq!(battle.selected(), None);
    assert_eq!(battle.grid().positions_in(TileState::Normal).len(), 25);

    let events = battle.drain_events();
    assert_eq!(
        events.first(),
        Some(&BattleEvent::ActorStarted {
            unit: knight,
            kind: ActorKind::Move,
        })
    );
    assert!(events.contains(&BattleEvent::Moved {
        unit: knight,
        from: Some(Position::new(0, 0)),
        to: Position::new(1, 1),
    }));
    assert!(events.contains(&BattleEvent::Defeated { unit: slime }));
    assert_eq!(
        events.last(),
        Some(&BattleEvent::ActorFinished {
            unit: knight,
            kind: ActorKind::Attack,
        })
    );
}

#[test]
fn action_points_gate_the_next_actor_until_refill() {
    let (mut battle, knight, _) = skirmish(GameConfig::with_turn_act_points(1));
    battle.reserve(knight, ActorKind::Move).unwrap();
    battle.reserve(knight, ActorKind::Attack).unwrap();

    battle.tick().unwrap();
    battle.touch_unit(knight, TouchEvent::Tap).unwrap();
    battle.touch_tile(Position::new(0, 2)).unwrap();
    assert_eq!(battle.turn().act_points, 0);

    assert_eq!(battle.tick().unwrap(), 0);
    assert!(!battle.is_running(knight));

    battle.end_turn().unwrap();
    assert_eq!(battle.turn().team, Team::Enemy);
    assert_eq!(battle.tick().unwrap(), 0);

    battle.end_turn().unwrap();
    assert_eq!(battle.turn().team, Team::Ally);
    assert_eq!(battle.turn().number, 3);
    assert_eq!(battle.tick().unwrap(), 1);
    assert!(battle.is_running(knight));
}

#[test]
fn end_turn_cancels_running_actor_without_spending() {
    let (mut battle, knight, _) = skirmish(GameConfig::default());
    battle.reserve(knight, ActorKind::Move).unwrap();
    battle.tick().unwrap();
    battle.touch_unit(knight, TouchEvent::Tap).unwrap();
    assert!(!battle.grid().positions_in(TileState::Active).is_empty());

    battle.end_turn().unwrap();

    assert!(battle.unit(knight).unwrap().queue.is_idle());
    assert_eq!(battle.selected(), None);
    assert!(battle.grid().positions_in(TileState::Active).is_empty());
    assert_eq!(battle.grid().placed_tile(knight), Some(Position::ORIGIN));
    assert_eq!(battle.turn().team, Team::Enemy);
    assert_eq!(battle.turn().act_points, 3);
    assert_eq!(
        battle.drain_events().last(),
        Some(&BattleEvent::TurnStarted {
            team: Team::Enemy,
            number: 2,
            act_points: 3,
        })
    );
}

#[test]
fn reserve_is_limited_to_team_in_turn() {
    let (mut battle, _, slime) = skirmish(GameConfig::default());
    assert_eq!(
        battle.reserve(slime, ActorKind::Attack),
        Err(RuntimeError::NotUnitsTurn {
            unit: slime,
            kind: ActorKind::Attack,
        })
    );
    assert_eq!(
        battle.reserve(EntityId(99), ActorKind::Attack),
        Err(RuntimeError::UnknownUnit(EntityId(99)))
    );
}

#[test]
fn reserving_uncatalogued_actor_fails() {
    let (mut battle, _, _) = skirmish(GameConfig::default());
    let archer = battle
        .spawn(
            &UnitRecord {
                no: 3,
                name: "Archer".into(),
                team: Team::Ally,
                hp: 5,
                actors: vec![ActorRecord::new("attack", [("range", 3), ("damage", 2)])],
            },
            Position::new(4, 4),
        )
        .unwrap();
    assert!(matches!(
        battle.reserve(archer, ActorKind::Move),
        Err(RuntimeError::Queue(_))
    ));
}

#[test]
fn tile_touch_without_selection_is_ignored() {
    let (mut battle, _, _) = skirmish(GameConfig::default());
    assert!(!battle.touch_tile(Position::new(3, 3)).unwrap());
}

#[test]
fn from_map_spawns_placements() {
    let mut map = MapRecord::new(MapDimensions::new(4, 4));
    map.holes.push(Position::new(3, 3));
    map.placements = vec![
        PlaceInfo {
            position: Position::new(0, 0),
            unit_no: 1,
        },
        PlaceInfo {
            position: Position::new(3, 0),
            unit_no: 2,
        },
    ];
    let catalog = vec![knight(), slime()];

    let battle = Battle::from_map(GameConfig::default(), &map, &catalog).unwrap();
    assert_eq!(battle.units().count(), 2);
    assert_eq!(battle.grid().tile_count(), 15);
    assert_eq!(battle.unit_at(Position::new(3, 0)).unwrap().name, "Slime");
    assert_eq!(battle.winner(), None);

    map.placements[1].unit_no = 7;
    assert_eq!(
        Battle::from_map(GameConfig::default(), &map, &catalog).unwrap_err(),
        RuntimeError::UnknownUnitNo(7)
    );
}

#[test]
fn tick_starts_only_what_the_pool_covers() {
    let (mut battle, knight, _) = skirmish(GameConfig::with_turn_act_points(1));
    let squire = battle
        .spawn(
            &UnitRecord {
                no: 4,
                name: "Squire".into(),
                team: Team::Ally,
                hp: 6,
                actors: vec![ActorRecord::new("move", [("range", 2), ("actPoint", 1)])],
            },
            Position::new(4, 4),
        )
        .unwrap();
    battle.reserve(knight, ActorKind::Move).unwrap();
    battle.reserve(squire, ActorKind::Move).unwrap();

    assert_eq!(battle.tick().unwrap(), 1);
    assert!(battle.is_running(knight));
    assert!(!battle.is_running(squire));
    assert_eq!(battle.turn().act_points, 0);

    battle.touch_unit(knight, TouchEvent::Tap).unwrap();
    assert!(battle.touch_tile(Position::new(0, 2)).unwrap());
    assert_eq!(battle.turn().act_points, 0);

    // The squire never started, so touching a tile for it moves nothing.
    battle.touch_unit(squire, TouchEvent::Tap).unwrap();
    assert!(!battle.touch_tile(Position::new(4, 3)).unwrap());
    assert_eq!(battle.grid().placed_tile(squire), Some(Position::new(4, 4)));
    assert_eq!(battle.tick().unwrap(), 0);
}

#[test]
fn custom_registry_limits_buildable_actors() {
    let mut registry = ActorRegistry::new();
    registry.register(ActorKind::Move, MoveActor::boxed);
    let mut battle =
        Battle::new(GameConfig::default(), TileGrid::filled(3, 3)).with_registry(registry);

    let err = battle.spawn(&knight(), Position::ORIGIN).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::Queue(QueueError::Actor(ActorError::Configuration(
            ConfigurationError::UnregisteredActorKind(ActorKind::Attack)
        )))
    );
    assert_eq!(battle.units().count(), 0);
    assert_eq!(battle.grid().occupant(Position::ORIGIN), None);
}
