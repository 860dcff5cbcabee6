use timberfell::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Plays the host's part for one break notification: route it through the
/// engine, then destroy the block unless something cancelled the event.
fn host_break(engine: &mut Engine, world: &mut World, player: &mut Player, pos: BlockPos) -> bool {
    let mut event = BreakEvent::new(pos, player.id);
    engine.on_block_break(world, player, &mut event);
    if !event.cancelled {
        world.break_block(pos);
    }
    event.cancelled
}

/// A small oak: a trunk the player will fell and an unsupported canopy
/// hanging past the decay threshold.
fn plant_tree(world: &mut World) -> BlockPos {
    let base = BlockPos::new(0, 64, 0);
    for y in 64..69 {
        world.set_block(BlockPos::new(0, y, 0), BlockKind::OakLog);
    }
    for (x, z) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        world.set_leaf(
            BlockPos::new(x, 68, z),
            BlockKind::OakLeaves,
            LeafProps::new(7, false),
        );
    }
    base
}

#[test]
fn end_to_end_felling_and_decay() {
    init_logging();

    let config = Config::from_json_str(r#"{"leafDecayParticles": false}"#).unwrap();
    let mut engine = Engine::with_seed(config, ToolTable::default(), 42);
    let mut world = World::new();
    let base = plant_tree(&mut world);

    let mut player = Player::new(PlayerId(1), BlockPos::new(5, 64, 5));
    player.main_hand = Some(ItemStack::tool(ToolKind::DiamondAxe, 1561));
    engine.on_player_join(&mut player);
    assert_eq!(engine.felling_mode(player.id), Some(true));

    // Four triggers on the same base block fell the trunk top-down, one
    // log per swing, furthest first.
    for (step, top) in [(1u32, 68), (2, 67), (3, 66), (4, 65)] {
        let cancelled = host_break(&mut engine, &mut world, &mut player, base);
        assert!(cancelled, "trigger {step} should be suppressed");
        assert_eq!(world.block(BlockPos::new(0, top, 0)), BlockKind::Air);
        assert_eq!(world.drops.len(), step as usize);
    }
    assert_eq!(world.block(base), BlockKind::OakLog);
    assert_eq!(player.main_hand.unwrap().durability, 1561 - 4);

    // The fifth trigger finds only the base left and lets it break
    // through the normal path, retiring the session.
    let cancelled = host_break(&mut engine, &mut world, &mut player, base);
    assert!(!cancelled);
    assert_eq!(world.block(base), BlockKind::Air);
    assert!(!engine.sessions.contains(base));

    // All drops landed at the player, one oak log each.
    assert!(
        world
            .drops
            .iter()
            .all(|&(pos, item)| pos == player.pos && item == ItemKind::Block(BlockKind::OakLog))
    );

    // Ticking out the deferred sweeps decays the whole canopy; particles
    // were disabled in config, sound was not.
    for _ in 0..80 {
        engine.tick(&mut world);
    }
    for (x, z) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        let leaf = BlockPos::new(x, 68, z);
        assert_eq!(world.block(leaf), BlockKind::Air);
        assert!(world.effects.contains(&Effect::DecaySound(leaf)));
    }
    assert!(
        !world
            .effects
            .iter()
            .any(|fx| matches!(fx, Effect::DecayParticles(_, _)))
    );
}

#[test]
fn session_walkthrough_of_a_seven_block_cluster() {
    init_logging();

    let mut engine = Engine::new(Config::default(), ToolTable::default());
    let mut world = World::new();

    // Seed plus five axis neighbors at weight 1 and one diagonal at
    // weight 2: a seven entry session.
    let seed = BlockPos::new(0, 64, 0);
    let cluster = [
        (0, 64, 0),
        (1, 64, 0),
        (-1, 64, 0),
        (0, 64, 1),
        (0, 64, -1),
        (0, 65, 0),
        (1, 64, 1),
    ];
    for (x, y, z) in cluster {
        world.set_block(BlockPos::new(x, y, z), BlockKind::BirchLog);
    }

    let mut player = Player::new(PlayerId(7), BlockPos::new(3, 64, 3));
    player.main_hand = Some(ItemStack::tool(ToolKind::StoneAxe, 131));
    engine.on_player_join(&mut player);

    // Six felling triggers consume the diagonal first, then the five
    // axis neighbors; the session survives all of them.
    for step in 1..=6 {
        let cancelled = host_break(&mut engine, &mut world, &mut player, seed);
        assert!(cancelled, "trigger {step} should fell a distant block");
        assert!(engine.sessions.contains(seed));
    }
    let standing = cluster
        .iter()
        .filter(|&&(x, y, z)| world.block(BlockPos::new(x, y, z)) != BlockKind::Air)
        .count();
    assert_eq!(standing, 1);

    // Only the seed remains: the next trigger breaks it normally and
    // evicts the session.
    let cancelled = host_break(&mut engine, &mut world, &mut player, seed);
    assert!(!cancelled);
    assert!(!engine.sessions.contains(seed));
    assert_eq!(world.block(seed), BlockKind::Air);
}

struct ProtectedColumn {
    x: i32,
    z: i32,
}

impl WorldHook for ProtectedColumn {
    fn on_break(&mut self, event: &mut BreakEvent, _world: &World) {
        if event.pos.x == self.x && event.pos.z == self.z {
            event.cancel();
        }
    }
}

#[test]
fn protection_hooks_see_synthetic_breaks() {
    init_logging();

    let mut engine = Engine::new(Config::default(), ToolTable::default());
    engine.add_hook(Box::new(ProtectedColumn { x: 0, z: 0 }));
    let mut world = World::new();
    let base = plant_tree(&mut world);

    let mut player = Player::new(PlayerId(2), BlockPos::new(5, 64, 5));
    player.main_hand = Some(ItemStack::tool(ToolKind::IronAxe, 250));
    engine.on_player_join(&mut player);

    // The whole trunk sits in the protected column, so felling never
    // destroys anything and the trigger block breaks normally.
    let cancelled = host_break(&mut engine, &mut world, &mut player, base);
    assert!(!cancelled);
    assert_eq!(world.block(BlockPos::new(0, 68, 0)), BlockKind::OakLog);
    assert!(world.drops.is_empty());
    assert_eq!(player.main_hand.unwrap().durability, 250);
}
