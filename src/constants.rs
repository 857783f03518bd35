//! Scene population and interaction tuning constants.

// Ambient population (fixed at startup, never resized)
pub const AMBIENT_WEB_COUNT: usize = 25;
pub const AMBIENT_FLY_COUNT: usize = 30;
pub const AMBIENT_DEWDROP_COUNT: usize = 40;

// Ambient entities scatter over a square field centered on the origin
pub const AMBIENT_FIELD_EXTENT: f32 = 1500.0;

// Fly kinematics (per-frame steps, world units)
pub const FLY_PHASE_STEP: f32 = 0.08;
pub const FLY_SPEED_MAX: f32 = 2.0;
pub const FLY_WOBBLE_AMPLITUDE: f32 = 2.0;
pub const FLY_BOUND: f32 = 800.0; // reflect displacement from spawn point
pub const FLY_WING_RATE: f32 = 12.0;
pub const FLY_WING_SWING: f32 = 0.4;

// Dewdrop shimmer
pub const DEWDROP_PHASE_STEP: f32 = 0.03;
pub const DEWDROP_BASE_ALPHA: f32 = 0.6;
pub const DEWDROP_ALPHA_SWING: f32 = 0.2;

// Camera
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_SPEED: f32 = 0.0005; // wheel delta to zoom factor
pub const INITIAL_ZOOM: f32 = 0.3;
pub const MOMENTUM_GAIN: f32 = 0.8; // fraction of drag delta kept as momentum
pub const MOMENTUM_DECAY: f32 = 0.95; // per idle frame
pub const MOMENTUM_REST: f32 = 0.1; // below this on both axes the camera is idle

// Hover feedback on creature avatars
pub const HOVER_SCALE: f32 = 1.2;
pub const HOVER_TWEEN_SEC: f32 = 0.3;

// Per-node web backdrop
pub const BACKDROP_RADIUS_FACTOR: f32 = 4.0; // node size -> web radius
pub const BACKDROP_SPIRAL_TURNS: usize = 12;
pub const BACKDROP_POINTS_PER_TURN: usize = 15;
pub const BACKDROP_CROSS_THREADS: usize = 8;
pub const BACKDROP_RANDOM_CHORDS: usize = 12;

// Spiral webs drop a return-to-center anchor thread every N points
pub const SPIRAL_ANCHOR_INTERVAL: usize = 8;

// Connecting strands
pub const STRAND_STEPS: usize = 20;
pub const STRAND_AMPLITUDE_BASE: f32 = 50.0;
pub const STRAND_AMPLITUDE_SPAN: f32 = 50.0;
pub const STRAND_FREQUENCY_BASE: f32 = 1.0;
pub const STRAND_FREQUENCY_SPAN: f32 = 1.0;

// Creature avatars
pub const CENTRAL_SEGMENTS: usize = 8;
pub const DIVISION_SEGMENTS: usize = 3;
pub const AVATAR_LEG_COUNT: usize = 6;
pub const SEGMENT_SIZE_FALLOFF: f32 = 0.15; // shrink per body segment
pub const SEGMENT_STACK_STEP: f32 = 0.5; // vertical spacing, in node sizes
pub const AVATAR_HIT_FACTOR: f32 = 1.6; // node size -> hover hit radius

// Background ambient webs
pub const BACKGROUND_WEB_RINGS: usize = 5;
pub const BACKGROUND_WEB_SEGMENTS: usize = 12;
pub const BACKGROUND_WEB_JITTER: f32 = 8.0;
