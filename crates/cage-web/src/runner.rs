use cage_engine::bridge::protocol::{
    HEADER_BACKGROUND_RGB, HEADER_BODY_COUNT, HEADER_EVENT_COUNT, HEADER_FLOATS,
    HEADER_FRAME_COUNTER, HEADER_GENERATION, HEADER_MAX_BODIES, HEADER_MAX_EVENTS,
    HEADER_MAX_OVERLAY_VERTICES, HEADER_OVERLAY_VERTEX_COUNT, HEADER_PROTOCOL_VERSION,
    HEADER_WORLD_HEIGHT, HEADER_WORLD_WIDTH, PROTOCOL_VERSION,
};
use cage_engine::systems::render::{build_render_buffer, pack_rgb};
use cage_engine::{
    EngineContext, EngineEvent, FixedTimestep, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    Notice, ProtocolLayout, RenderBuffer,
};
use glam::Vec2;
use std::rc::Rc;

/// Shows notices (e.g. a win) to the player.
pub type Notifier = Rc<dyn Fn(&Notice)>;

/// Notices raised while the runner was busy, paired with the notifier that
/// should show them. Deliver only after letting go of the runner, since the
/// notifier may call back into it.
#[must_use]
pub struct PendingNotices {
    notifier: Option<Notifier>,
    notices: Vec<Notice>,
}

impl PendingNotices {
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Show every notice, oldest first.
    pub fn deliver(self) {
        for notice in &self.notices {
            match &self.notifier {
                Some(notify) => notify(notice),
                None => log::info!("no notifier installed: {}", notice.message()),
            }
        }
    }
}

/// Generic game runner that owns one world lifetime at a time.
///
/// `init` builds a fresh [`EngineContext`] and hands it to the game. `reset`
/// stops the clock, lets the game drop its handles, throws the whole context
/// away (bodies, subscriptions, overlay) and runs `init` again.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    viewport: Option<Vec2>,
    notifier: Option<Notifier>,
    pending_notices: Vec<Notice>,
    /// Game events the host can read. Outlives world resets.
    events: Vec<GameEvent>,
    /// How many of `events` the previous tick already published.
    published_events: usize,
    header: [f32; HEADER_FLOATS],
    frame: u32,
    generation: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_bodies),
            timestep: FixedTimestep::new(config.fixed_dt),
            game,
            layout,
            config,
            viewport: None,
            notifier: None,
            pending_notices: Vec::new(),
            events: Vec::new(),
            published_events: 0,
            header: [0.0; HEADER_FLOATS],
            frame: 0,
            generation: 0,
            initialized: false,
        }
    }

    /// Size the play area to the host container. Takes effect on the next init.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Some(Vec2::new(width, height));
    }

    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.notifier = Some(notifier);
    }

    /// Build a fresh world and start the clock.
    pub fn init(&mut self) {
        self.config = self.game.config();
        if let Some(size) = self.viewport {
            self.config.world_width = size.x;
            self.config.world_height = size.y;
        }
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.ctx = EngineContext::new(&self.config);
        self.game.init(&mut self.ctx);
        self.generation += 1;
        self.initialized = true;
        self.timestep.start();
        self.refresh_frame_data();
        log::info!(
            "world {} ready: {}x{}, {} bodies",
            self.generation,
            self.config.world_width,
            self.config.world_height,
            self.ctx.physics.body_count()
        );
    }

    /// Full teardown and rebuild. Nothing from the previous world survives.
    pub fn reset(&mut self) {
        self.timestep.stop();
        self.game.teardown();
        self.input.clear();
        self.render_buffer.clear();
        log::info!("world {} torn down", self.generation);
        self.init();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input, step physics, publish events, rebuild buffers.
    ///
    /// Notices raised during the frame are queued; collect them with
    /// [`take_notices`](Self::take_notices).
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Events raised between ticks stay visible for one more frame.
        self.events.drain(..self.published_events);
        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input);
        self.input.clear();

        if !self.handle_reset_request() {
            let steps = self.timestep.accumulate(dt);
            for _ in 0..steps {
                self.ctx.step_physics();
                self.publish_step_events();
                if self.handle_reset_request() {
                    break;
                }
            }
        }

        self.frame = self.frame.wrapping_add(1);
        self.refresh_frame_data();
        self.published_events = self.events.len();
    }

    fn publish_step_events(&mut self) {
        let started: Vec<_> = self.ctx.collisions().iter().filter(|c| c.started).copied().collect();
        for pair in started {
            self.publish(EngineEvent::CollisionStart(pair));
            if self.ctx.reset_requested().is_some() {
                return;
            }
        }
        self.publish(EngineEvent::AfterUpdate);
    }

    fn publish(&mut self, event: EngineEvent) {
        for sub in self.ctx.bus.subscribers(event.topic()) {
            if self.ctx.reset_requested().is_some() {
                return;
            }
            self.game.on_event(&mut self.ctx, sub, &event);
        }
    }

    /// Queue the notice and rebuild if the game asked for it. Returns whether
    /// a reset happened.
    fn handle_reset_request(&mut self) -> bool {
        let Some(notice) = self.ctx.take_reset_request() else {
            return false;
        };
        log::info!("reset requested: {}", notice.message());
        self.events.append(&mut self.ctx.events);
        self.pending_notices.push(notice);
        self.reset();
        true
    }

    /// Hand over the notices queued so far along with the current notifier.
    pub fn take_notices(&mut self) -> PendingNotices {
        PendingNotices {
            notifier: self.notifier.clone(),
            notices: std::mem::take(&mut self.pending_notices),
        }
    }

    fn refresh_frame_data(&mut self) {
        self.events.append(&mut self.ctx.events);
        self.ensure_overlay_capacity();
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        let body_count = self.body_instance_count() as f32;
        let overlay_count = self.overlay_vertex_count() as f32;
        let event_count = self.game_events_len() as f32;

        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_WORLD_WIDTH] = self.config.world_width;
        h[HEADER_WORLD_HEIGHT] = self.config.world_height;
        h[HEADER_MAX_BODIES] = self.layout.max_bodies as f32;
        h[HEADER_BODY_COUNT] = body_count;
        h[HEADER_MAX_OVERLAY_VERTICES] = self.layout.max_overlay_vertices as f32;
        h[HEADER_OVERLAY_VERTEX_COUNT] = overlay_count;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = event_count;
        h[HEADER_BACKGROUND_RGB] = pack_rgb(self.config.background);
        h[HEADER_GENERATION] = self.generation as f32;
    }

    /// Lines are unbounded, so the overlay region grows to fit them.
    fn ensure_overlay_capacity(&mut self) {
        let needed = self.ctx.overlay.vertex_count();
        if needed <= self.layout.max_overlay_vertices {
            return;
        }
        let grown = needed.next_power_of_two();
        log::warn!(
            "overlay needs {} vertices, growing capacity from {} to {}",
            needed,
            self.layout.max_overlay_vertices,
            grown
        );
        self.layout = ProtocolLayout::new(self.layout.max_bodies, grown, self.layout.max_events);
    }

    // ---- Accessors ----

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Run `f` against the game and the live world between ticks. Buffers
    /// and events are refreshed right after, and a reset request is honored.
    pub fn with_game<R>(&mut self, f: impl FnOnce(&mut G, &mut EngineContext) -> R) -> R {
        let out = f(&mut self.game, &mut self.ctx);
        self.handle_reset_request();
        self.refresh_frame_data();
        out
    }

    /// Number of world lifetimes built so far.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.timestep.is_running()
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn body_instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    /// Visible bodies this frame, capped at the protocol capacity.
    pub fn body_instance_count(&self) -> u32 {
        self.render_buffer.instance_count().min(self.layout.max_bodies as u32)
    }

    pub fn overlay_ptr(&self) -> *const f32 {
        self.ctx.overlay.vertices_ptr()
    }

    /// Overlay stroke color packed as 0xRRGGBB.
    pub fn overlay_rgb(&self) -> f32 {
        pack_rgb(self.ctx.overlay.style.color)
    }

    pub fn overlay_vertex_count(&self) -> u32 {
        self.ctx.overlay.vertex_count() as u32
    }

    pub fn game_events(&self) -> &[GameEvent] {
        &self.events[..self.game_events_len() as usize]
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        (self.events.len() as u32).min(self.layout.max_events as u32)
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
