//! The play scene: player, generator, score and collision rules.
//!
//! One frame runs in a fixed order:
//! 1. Due timers (warm-up, spawn sequences, score tick)
//! 2. Entity motion and removal, player spin
//! 3. Physics step for the player
//! 4. Collision rules
//! 5. Input (jump / land)

use std::fmt;

use super::entity::{EntityId, EntityKind, MovingEntity};
use super::game::SceneChange;
use super::generator::{Generator, SpawnRequest};
use super::player::Player;
use super::score::ScoreState;
use super::stage::{Collection, Stage};
use crate::core::constants::*;
use crate::core::Viewport;
use crate::engine::{EngineContext, FrameInput, Key, Scheduler, Sound, TimerId, WorldBounds};

/// Work the scene's scheduler hands back when a timer comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTask {
    WarmUp,
    Spawn(EntityKind),
    ScoreTick,
}

/// Contact kind of a rule. Both are detected by box overlap alone and bodies
/// are never separated: a `Collider` hit ends the session on that frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    /// Solid contact.
    Collider,
    /// Pass-through contact.
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionHandler {
    HitObstacle,
    HitCoin,
}

/// Player-versus-collection rule. `process` filters candidate pairs before
/// the handler runs.
#[derive(Clone, Copy)]
pub struct CollisionRule {
    pub collection: Collection,
    pub mode: CollisionMode,
    pub handler: CollisionHandler,
    pub process: fn(&Player, &MovingEntity) -> bool,
}

impl fmt::Debug for CollisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionRule")
            .field("collection", &self.collection)
            .field("mode", &self.mode)
            .field("handler", &self.handler)
            .finish_non_exhaustive()
    }
}

fn always(_: &Player, _: &MovingEntity) -> bool {
    true
}

#[derive(Debug)]
pub struct PlayScene {
    viewport: Viewport,
    gravity_y: f64,
    background: u32,
    scheduler: Scheduler<SceneTask>,
    stage: Stage,
    generator: Generator,
    player: Player,
    score: ScoreState,
    rules: Vec<CollisionRule>,
    score_timer: Option<TimerId>,
    finished: bool,
}

impl PlayScene {
    /// Reset the shared score, then build the scene.
    pub fn start(viewport: Viewport, gravity_y: f64, ctx: &mut EngineContext<'_>) -> Self {
        Self::preload(ctx);
        Self::create(viewport, gravity_y, ctx)
    }

    pub fn preload(ctx: &mut EngineContext<'_>) {
        ctx.registry.set(SCORE_KEY, 0i64);
    }

    pub fn create(viewport: Viewport, gravity_y: f64, ctx: &mut EngineContext<'_>) -> Self {
        let mut scheduler = Scheduler::new();
        let generator = Generator::new(&mut scheduler);
        let player = Player::new(
            viewport.center_width() - PLAYER_OFFSET_X,
            viewport.height as f64 - PLAYER_OFFSET_Y,
        );
        let score = ScoreState::new(viewport.center_width());

        let rules = vec![
            CollisionRule {
                collection: Collection::Obstacles,
                mode: CollisionMode::Collider,
                handler: CollisionHandler::HitObstacle,
                process: always,
            },
            CollisionRule {
                collection: Collection::Coins,
                mode: CollisionMode::Overlap,
                handler: CollisionHandler::HitCoin,
                process: always,
            },
        ];

        ctx.audio.stop(Sound::Theme);
        ctx.audio.play(Sound::Theme, true);

        let score_timer = scheduler.schedule_repeating(SCORE_TICK_MS, SceneTask::ScoreTick);

        log::info!(
            "play scene started ({}x{})",
            viewport.width,
            viewport.height
        );

        Self {
            viewport,
            gravity_y,
            background: SKY_COLOR,
            scheduler,
            stage: Stage::new(),
            generator,
            player,
            score,
            rules,
            score_timer: Some(score_timer),
            finished: false,
        }
    }

    /// Advance the scene by `dt_ms`. Returns the transition the scene asks
    /// for, if any.
    pub fn frame(
        &mut self,
        dt_ms: u64,
        input: &FrameInput,
        ctx: &mut EngineContext<'_>,
    ) -> Option<SceneChange> {
        if self.finished {
            return None;
        }

        for fired in self.scheduler.advance(dt_ms) {
            match fired.task {
                SceneTask::WarmUp => {
                    let spawns = self.generator.start(
                        &mut self.scheduler,
                        fired.due_ms,
                        ctx.rng,
                        self.viewport.height,
                    );
                    for request in spawns {
                        self.spawn(request, ctx);
                    }
                }
                SceneTask::Spawn(kind) => {
                    let request = self.generator.fire(
                        kind,
                        &mut self.scheduler,
                        fired.due_ms,
                        ctx.rng,
                        self.viewport.height,
                    );
                    self.spawn(request, ctx);
                }
                SceneTask::ScoreTick => {
                    self.update_score(1);
                }
            }
        }

        let dt = dt_ms as f64;
        self.stage.advance(dt);
        self.player.advance_spin(dt);

        let bounds = WorldBounds {
            width: self.viewport.width as f64,
            height: self.viewport.height as f64,
        };
        self.player.body.step(dt / 1000.0, self.gravity_y, bounds);

        if let Some(change) = self.run_collisions(ctx) {
            return Some(change);
        }

        self.update(input, ctx);
        None
    }

    fn run_collisions(&mut self, ctx: &mut EngineContext<'_>) -> Option<SceneChange> {
        let player_box = self.player.body.aabb();
        for rule in self.rules.clone() {
            let hits: Vec<EntityId> = self
                .stage
                .group(rule.collection)
                .ids()
                .filter(|id| {
                    self.stage.get(*id).is_some_and(|entity| {
                        entity.is_alive()
                            && entity.body.aabb().overlaps(&player_box)
                            && (rule.process)(&self.player, entity)
                    })
                })
                .collect();

            for id in hits {
                match rule.handler {
                    CollisionHandler::HitObstacle => return Some(self.hit_obstacle(ctx)),
                    CollisionHandler::HitCoin => self.hit_coin(id, ctx),
                }
            }
        }
        None
    }

    /// Jump on a fresh key press or click; otherwise square up on the floor.
    ///
    /// A click counts as a jump for this frame, so it skips the landing check
    /// and the spin it starts survives until the player is back down.
    pub fn update(&mut self, input: &FrameInput, ctx: &mut EngineContext<'_>) {
        if input.just_pressed(Key::Space) || input.pointer_down() {
            self.jump(ctx);
        } else if self.player.is_grounded() {
            self.player.land();
        }
    }

    pub fn jump(&mut self, ctx: &mut EngineContext<'_>) -> bool {
        if !self.player.jump() {
            return false;
        }
        ctx.audio.play(Sound::Jump, false);
        log::debug!("jump at {}ms", self.scheduler.now_ms());
        true
    }

    pub fn hit_obstacle(&mut self, ctx: &mut EngineContext<'_>) -> SceneChange {
        if let Some(timer) = self.score_timer.take() {
            self.scheduler.cancel(timer);
        }
        self.finish_scene(ctx)
    }

    pub fn hit_coin(&mut self, id: EntityId, ctx: &mut EngineContext<'_>) {
        ctx.audio.play(Sound::Coin, false);
        self.update_score(COIN_BONUS);
        self.stage.destroy(id);
    }

    /// End the session and hand the score to the game-over scene.
    pub fn finish_scene(&mut self, ctx: &mut EngineContext<'_>) -> SceneChange {
        ctx.audio.stop(Sound::Theme);
        ctx.audio.play(Sound::Dead, false);
        ctx.registry.set(SCORE_KEY, self.score.value().to_string());
        self.finished = true;
        log::info!("session over, score {}", self.score.value());
        SceneChange::ToGameOver
    }

    pub fn update_score(&mut self, points: u64) -> u64 {
        self.score.add(points)
    }

    /// Create an entity in the stage.
    pub fn spawn(&mut self, request: SpawnRequest, ctx: &mut EngineContext<'_>) -> EntityId {
        self.stage.spawn(
            request.kind,
            request.x,
            request.spawn_y,
            request.collection,
            ctx.rng,
            ctx.animations,
        )
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn scheduler(&self) -> &Scheduler<SceneTask> {
        &self.scheduler
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn rules(&self) -> &[CollisionRule] {
        &self.rules
    }

    pub fn score_timer(&self) -> Option<TimerId> {
        self.score_timer
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnimationRegistry, AudioCommand, AudioQueue, Registry, RegistryValue};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Harness {
        rng: ChaCha8Rng,
        audio: AudioQueue,
        animations: AnimationRegistry,
        registry: Registry,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                rng: ChaCha8Rng::seed_from_u64(11),
                audio: AudioQueue::new(),
                animations: AnimationRegistry::new(),
                registry: Registry::new(),
            }
        }

        fn ctx(&mut self) -> EngineContext<'_> {
            EngineContext {
                rng: &mut self.rng,
                audio: &mut self.audio,
                animations: &mut self.animations,
                registry: &mut self.registry,
            }
        }
    }

    fn started() -> (Harness, PlayScene) {
        let mut harness = Harness::new();
        let scene = PlayScene::start(
            Viewport::default(),
            DEFAULT_GRAVITY_Y,
            &mut harness.ctx(),
        );
        (harness, scene)
    }

    fn run(scene: &mut PlayScene, harness: &mut Harness, frames: usize) {
        for _ in 0..frames {
            scene.frame(FRAME_MS, &FrameInput::none(), &mut harness.ctx());
        }
    }

    #[test]
    fn test_create_layout() {
        let (harness, scene) = started();

        assert_eq!(scene.background(), 0x87ceeb);
        assert_eq!(scene.player().body.x, 200.0);
        assert_eq!(scene.player().body.y, 100.0);
        assert_eq!(scene.score().value(), 0);
        assert_eq!(scene.score().label().y, 10.0);
        assert_eq!(harness.registry.get(SCORE_KEY), Some(&RegistryValue::Int(0)));

        let rules = scene.rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].collection, Collection::Obstacles);
        assert_eq!(rules[0].mode, CollisionMode::Collider);
        assert_eq!(rules[1].collection, Collection::Coins);
        assert_eq!(rules[1].mode, CollisionMode::Overlap);

        assert_eq!(
            harness.audio.commands(),
            &[
                AudioCommand::Stop(Sound::Theme),
                AudioCommand::Play {
                    sound: Sound::Theme,
                    looping: true
                },
            ]
        );
        // warm-up and score tick
        assert_eq!(scene.scheduler().pending_count(), 2);
    }

    #[test]
    fn test_score_ticks_every_100ms() {
        let (mut harness, mut scene) = started();

        scene.frame(100, &FrameInput::none(), &mut harness.ctx());
        assert_eq!(scene.score().value(), 1);
        assert_eq!(scene.score().label().text, "1");

        scene.frame(99, &FrameInput::none(), &mut harness.ctx());
        assert_eq!(scene.score().value(), 1);
        scene.frame(1, &FrameInput::none(), &mut harness.ctx());
        assert_eq!(scene.score().value(), 2);
    }

    #[test]
    fn test_nothing_spawns_before_warmup() {
        let (mut harness, mut scene) = started();

        scene.frame(1999, &FrameInput::none(), &mut harness.ctx());
        assert!(scene.stage().is_empty());
        assert!(!scene.generator().is_started());
    }

    #[test]
    fn test_warmup_spawns_one_of_each() {
        let (mut harness, mut scene) = started();

        run(&mut scene, &mut harness, 125);
        assert_eq!(scene.now_ms(), 2000);
        assert!(scene.generator().is_started());
        for kind in EntityKind::ALL {
            assert_eq!(scene.stage().count(kind), 1);
        }
        assert_eq!(scene.stage().group(Collection::Obstacles).len(), 1);
        assert_eq!(scene.stage().group(Collection::Coins).len(), 1);
    }

    #[test]
    fn test_jump_on_floor_and_in_air() {
        let (mut harness, mut scene) = started();

        // In the air right after creation.
        assert!(!scene.jump(&mut harness.ctx()));
        assert!(!harness.audio.played(Sound::Jump));

        run(&mut scene, &mut harness, 80);
        assert!(scene.player().is_grounded());

        scene.frame(FRAME_MS, &FrameInput::key(Key::Space), &mut harness.ctx());
        assert_eq!(scene.player().body.velocity_y, -300.0);
        assert!(harness.audio.played(Sound::Jump));
        assert!(scene.player().is_spinning());
    }

    #[test]
    fn test_landing_stops_spin() {
        let (mut harness, mut scene) = started();
        run(&mut scene, &mut harness, 80);

        scene.frame(FRAME_MS, &FrameInput::pointer(), &mut harness.ctx());
        assert!(scene.player().is_spinning());

        // About 1.7s in the air at this gravity.
        run(&mut scene, &mut harness, 120);
        assert!(scene.player().is_grounded());
        assert!(!scene.player().is_spinning());
        assert_eq!(scene.player().rotation, 0.0);
    }

    #[test]
    fn test_click_jump_keeps_spinning_in_air() {
        let (mut harness, mut scene) = started();
        run(&mut scene, &mut harness, 80);

        scene.frame(FRAME_MS, &FrameInput::pointer(), &mut harness.ctx());
        assert_eq!(scene.player().body.velocity_y, -300.0);
        assert!(scene.player().is_spinning());

        run(&mut scene, &mut harness, 10);
        assert!(!scene.player().is_grounded());
        assert!(scene.player().is_spinning());
        assert!(scene.player().rotation > 0.0);
    }

    #[test]
    fn test_obstacle_hit_cancels_score_tick() {
        let (mut harness, mut scene) = started();
        let timer = scene.score_timer().unwrap();
        assert!(scene.scheduler().is_pending(timer));

        scene.hit_obstacle(&mut harness.ctx());

        assert!(!scene.scheduler().is_pending(timer));
        assert!(!scene
            .scheduler()
            .pending()
            .any(|(_, _, task)| *task == SceneTask::ScoreTick));
        // The warm-up is untouched.
        assert_eq!(scene.scheduler().pending_count(), 1);
    }

    #[test]
    fn test_finish_scene_hands_over_score() {
        let (mut harness, mut scene) = started();
        scene.frame(300, &FrameInput::none(), &mut harness.ctx());
        harness.audio.drain();

        let timer = scene.score_timer().unwrap();
        assert_eq!(scene.hit_obstacle(&mut harness.ctx()), SceneChange::ToGameOver);
        assert!(scene.is_finished());
        assert!(scene.score_timer().is_none());
        assert!(!scene.scheduler().is_pending(timer));
        assert!(harness.audio.stopped(Sound::Theme));
        assert!(harness.audio.played(Sound::Dead));
        assert_eq!(
            harness.registry.get(SCORE_KEY),
            Some(&RegistryValue::Text("3".to_string()))
        );

        // A finished scene no longer advances.
        scene.frame(1000, &FrameInput::none(), &mut harness.ctx());
        assert_eq!(scene.score().value(), 3);
    }
}
