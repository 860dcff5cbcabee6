use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::Config;
use crate::coords::{BlockPos, Direction};
use crate::events::{BreakEvent, DecayEvent, Hand, InteractAction, WorldHook};
use crate::items::ItemKind;
use crate::players::{Player, PlayerId};
use crate::sched::{TaskKind, TaskQueue};
use crate::session::SessionTable;
use crate::tools::ToolTable;
use crate::world::{Effect, World};

pub const PERMISSION_FELL: &str = "timberfell.fell";

/// Ticks between a break notification and the decay sweep of its
/// neighbors; the host settles the broken block in the meantime.
const SWEEP_DELAY_TICKS: u64 = 6;
const DECAY_DELAY_MIN_TICKS: u64 = 3;
const DECAY_DELAY_JITTER_TICKS: u64 = 7;
/// Leaves with a stored trunk distance at or beyond this are unsupported.
const LEAF_SUPPORT_THRESHOLD: u8 = 7;

/// The felling engine. The host forwards join, interact, break and decay
/// notifications to it and drives `tick` once per game tick; everything
/// else (sessions, modes, deferred decay, the re-entrancy guard for
/// synthetic breaks) is internal state.
pub struct Engine {
    pub config: Config,
    pub tools: ToolTable,
    pub sessions: SessionTable,
    tasks: TaskQueue,
    now: u64,
    modes: HashMap<PlayerId, bool>,
    decay_scheduled: HashSet<BlockPos>,
    synthetic: HashSet<BlockPos>,
    hooks: Vec<Box<dyn WorldHook>>,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: Config, tools: ToolTable) -> Self {
        Self::with_seed(config, tools, 0)
    }

    pub fn with_seed(config: Config, tools: ToolTable, seed: u64) -> Self {
        Self {
            config,
            tools,
            sessions: SessionTable::new(),
            tasks: TaskQueue::new(),
            now: 0,
            modes: HashMap::new(),
            decay_scheduled: HashSet::new(),
            synthetic: HashSet::new(),
            hooks: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Registers an external listener for synthetic break and decay
    /// notifications (the protection-plugin seam).
    pub fn add_hook(&mut self, hook: Box<dyn WorldHook>) {
        self.hooks.push(hook);
    }

    pub fn current_tick(&self) -> u64 {
        self.now
    }

    pub fn felling_mode(&self, player: PlayerId) -> Option<bool> {
        self.modes.get(&player).copied()
    }

    /// Seeds the player's felling mode from config. Players that fail the
    /// permission check get no mode flag at all, which later reads as a
    /// safety abort.
    pub fn on_player_join(&mut self, player: &mut Player) {
        if !self.permitted(player) {
            return;
        }
        self.modes.insert(player.id, self.config.active_on_join);
    }

    /// Toggles felling mode on a right-click into air with a felling tool
    /// in the main hand and nothing in the off hand.
    pub fn on_player_interact(&mut self, player: &mut Player, action: InteractAction, hand: Hand) {
        if action != InteractAction::RightClickAir {
            return;
        }
        // The host fires the gesture once per hand; only main counts.
        if hand != Hand::Main {
            return;
        }
        // An occupied off hand means the click was probably meant for
        // that item (a raised shield, for instance).
        if player.off_hand.is_some() {
            return;
        }
        let Some(tool) = player.main_hand.and_then(|held| held.tool_kind()) else {
            return;
        };
        if !self.tools.is_felling_tool(tool) {
            return;
        }
        if !self.permitted(player) {
            player.send_message("You don't have permission to use felling mode.");
            return;
        }
        // No flag means join never granted one; don't create it here.
        let Some(&mode) = self.modes.get(&player.id) else {
            return;
        };
        let mode = !mode;
        self.modes.insert(player.id, mode);
        player.send_message(format!(
            "Felling mode is now {}.",
            if mode { "ON" } else { "OFF" }
        ));
    }

    /// The felling trigger protocol. Called by the host for every break
    /// notification; on a successful felling step the incoming event is
    /// cancelled and a block further out is destroyed instead.
    pub fn on_block_break(&mut self, world: &mut World, player: &mut Player, event: &mut BreakEvent) {
        if event.cancelled {
            return;
        }
        // Synthetic break emitted by a felling step below: consume the
        // marker and pass it through to external hooks untouched.
        if self.synthetic.remove(&event.pos) {
            return;
        }

        let kind = world.block(event.pos);

        // Fast leaf decay runs for any log or leaf break, felled or not.
        if kind.is_log() || kind.is_leaves() {
            self.queue_decay_sweep(event.pos);
        }

        let Some((block_tag, tool_tag)) = self.tools.pair_for_block(kind) else {
            return;
        };

        let held_tool = player.main_hand.and_then(|held| held.tool_kind());
        if !held_tool.is_some_and(|tool| tool_tag.matches(tool)) {
            // Broken with the wrong tool: the block goes through the
            // normal path, and any cached session at this position is now
            // stale.
            self.sessions.evict(event.pos);
            return;
        }

        if !self.permitted(player) {
            return;
        }
        // Mode off, or no flag (join never ran): nothing to do.
        if self.modes.get(&player.id) != Some(&true) {
            return;
        }

        let queue = self
            .sessions
            .get_or_create(world, event.pos, |k| block_tag.matches(k));

        // The final block of a structure breaks normally; keeping the
        // session around would haunt a tree regrown at the same spot.
        if queue.has_at_most_one() {
            self.sessions.evict(event.pos);
            return;
        }

        // Entries may have gone stale since the scan; skip until one
        // still matches. The entry block itself is always a match, so
        // this cannot drain the queue.
        let furthest = loop {
            let candidate = queue.poll_furthest();
            if block_tag.matches(world.block(candidate)) {
                break candidate;
            }
            trace!("skipping stale session entry {:?}", candidate);
        };

        if !self.emit_synthetic_break(world, player, furthest) {
            debug!("felling of {:?} cancelled by a hook", furthest);
            return;
        }

        let felled = world.block(furthest);
        world.spawn_drop(player.pos, ItemKind::Block(felled));
        world.break_block(furthest);
        // A stale session keyed at the felled position would interfere
        // with a structure grown there later.
        self.sessions.evict(furthest);

        // The trigger block was only a trigger; it stays in the world.
        event.cancel();

        if let Some(held) = player.main_hand.as_mut() {
            if held.reduce_durability() {
                player.main_hand = None;
            }
        }

        self.queue_decay_sweep(furthest);
    }

    /// Host-originated leaf decay joins the cascade too, so fast decay
    /// chains through naturally decaying treetops.
    pub fn on_leaves_decay(&mut self, event: &DecayEvent) {
        if event.cancelled {
            return;
        }
        self.queue_decay_sweep(event.pos);
    }

    /// Advances the clock one tick and drains every task now due, in
    /// scheduling order within the tick.
    pub fn tick(&mut self, world: &mut World) {
        self.now += 1;
        while let Some(task) = self.tasks.pop_due(self.now) {
            match task {
                TaskKind::DecaySweep { pos } => self.run_decay_sweep(world, pos),
                TaskKind::LeafDecay { pos } => self.run_leaf_decay(world, pos),
            }
        }
    }

    fn permitted(&self, player: &Player) -> bool {
        !self.config.use_permissions || player.has_permission(PERMISSION_FELL)
    }

    /// Routes a synthetic break for the felled block through the same
    /// channel as real breaks: our own entry first (the guard makes it a
    /// no-op), then every external hook. Returns false when cancelled.
    fn emit_synthetic_break(&mut self, world: &mut World, player: &mut Player, pos: BlockPos) -> bool {
        self.synthetic.insert(pos);
        let mut event = BreakEvent::new(pos, player.id);
        self.on_block_break(world, player, &mut event);

        let mut hooks = std::mem::take(&mut self.hooks);
        for hook in hooks.iter_mut() {
            hook.on_break(&mut event, world);
        }
        self.hooks = hooks;
        !event.cancelled
    }

    fn queue_decay_sweep(&mut self, pos: BlockPos) {
        if !self.config.fast_leaf_decay {
            return;
        }
        self.tasks
            .schedule(self.now + SWEEP_DELAY_TICKS, TaskKind::DecaySweep { pos });
    }

    fn run_decay_sweep(&mut self, world: &World, pos: BlockPos) {
        for dir in Direction::AXES {
            self.try_schedule_leaf_decay(world, pos.relative(dir));
        }
    }

    fn try_schedule_leaf_decay(&mut self, world: &World, pos: BlockPos) {
        if !world.block(pos).is_leaves() {
            return;
        }
        // A second sweep in the same tick sees the flag and backs off.
        if self.decay_scheduled.contains(&pos) {
            return;
        }
        let Some(props) = world.leaf_props(pos) else {
            return;
        };
        // Hand-placed leaves never decay.
        if props.persistent {
            return;
        }
        // Still within reach of a trunk.
        if props.distance < LEAF_SUPPORT_THRESHOLD {
            return;
        }
        self.decay_scheduled.insert(pos);
        let delay = DECAY_DELAY_MIN_TICKS + self.rng.gen_range(0..DECAY_DELAY_JITTER_TICKS);
        trace!("leaf at {:?} scheduled to decay in {} ticks", pos, delay);
        self.tasks
            .schedule(self.now + delay, TaskKind::LeafDecay { pos });
    }

    fn run_leaf_decay(&mut self, world: &mut World, pos: BlockPos) {
        // The world may have changed during the delay; re-validate, and
        // on any mismatch just skip. The scheduled flag clears on every
        // exit so the position stays eligible for future cascades.
        if !world.is_loaded(pos) {
            self.decay_scheduled.remove(&pos);
            return;
        }
        let kind = world.block(pos);
        if !kind.is_leaves() {
            self.decay_scheduled.remove(&pos);
            return;
        }

        let mut event = DecayEvent::new(pos);
        let mut hooks = std::mem::take(&mut self.hooks);
        for hook in hooks.iter_mut() {
            hook.on_decay(&mut event, world);
        }
        self.hooks = hooks;
        if event.cancelled {
            self.decay_scheduled.remove(&pos);
            return;
        }

        // The accepted decay feeds back into the cascade, the same as a
        // host-originated decay notification.
        self.queue_decay_sweep(pos);

        if self.config.leaf_decay_sound {
            world.play_effect(Effect::DecaySound(pos));
        }
        if self.config.leaf_decay_particles {
            world.play_effect(Effect::DecayParticles(pos, kind));
        }
        world.break_block(pos);
        self.decay_scheduled.remove(&pos);
    }
}
