//! Simulation constants and tuning parameters.

/// Nominal host tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Largest step the simulation will integrate in one tick (seconds).
/// Slow frames are clamped to this so a lag spike cannot blow up physics.
pub const MAX_DT: f32 = 0.05;

// --- Arena ---

/// Half-extent of the playable square (meters). Positions are clamped to
/// `[-MAP_HALF, MAP_HALF]` on X and Z.
pub const MAP_HALF: f32 = 140.0;

/// Player spawn point (feet).
pub const PLAYER_SPAWN: [f32; 3] = [0.0, 0.0, 40.0];

/// Player collision radius against cover (meters).
pub const PLAYER_RADIUS: f32 = 0.65;

// --- Player movement ---

/// Downward acceleration (m/s²).
pub const GRAVITY: f32 = 18.0;

/// Vertical launch speed of a jump (m/s).
pub const JUMP_SPEED: f32 = 6.2;

/// How long after leaving the ground a jump is still accepted (seconds).
pub const COYOTE_SECS: f32 = 0.10;

/// How long an early jump press is remembered (seconds).
pub const JUMP_BUFFER_SECS: f32 = 0.12;

pub const WALK_SPEED: f32 = 5.3;
pub const SPRINT_SPEED: f32 = 8.2;
pub const CROUCH_SPEED: f32 = 3.0;

pub const GROUND_ACCEL: f32 = 55.0;
pub const AIR_ACCEL: f32 = 18.0;
pub const GROUND_FRICTION: f32 = 12.0;

/// Below this horizontal speed friction is skipped (m/s).
pub const FRICTION_MIN_SPEED: f32 = 0.001;

pub const EYE_STAND: f32 = 1.6;
pub const EYE_CROUCH: f32 = 1.2;

/// Decay base for eye-height and FOV smoothing (`t = 1 - base^dt`).
pub const VIEW_SMOOTHING_DECAY: f32 = 0.001;

/// Field of view (degrees).
pub const BASE_FOV: f32 = 75.0;
pub const ADS_FOV: f32 = 55.0;

/// Spread multiplier while aiming down sights.
pub const ADS_SPREAD_FACTOR: f32 = 0.35;

/// Camera pitch is clamped to this magnitude (radians).
pub const PITCH_LIMIT: f32 = 1.55;

/// Player rays that hit nothing draw their tracer out to this distance.
pub const HITSCAN_RANGE: f32 = 200.0;

/// Gun muzzle relative to the eye, along camera (right, up, forward).
pub const PLAYER_MUZZLE_OFFSET: [f32; 3] = [0.18, -0.14, 0.6];

/// Default starting health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

// --- Enemies ---

/// Height of an enemy's pistol above its feet (meters).
pub const ENEMY_MUZZLE_HEIGHT: f32 = 1.2;

/// Preferred distance to the player (meters).
pub const BOSS_STANDOFF: f32 = 40.0;
pub const MINION_STANDOFF: f32 = 30.0;

/// Half-width of the hold band around the standoff distance (meters).
pub const STANDOFF_TOLERANCE: f32 = 3.0;

/// Fraction of movement speed used while backing away.
pub const RETREAT_SPEED_FACTOR: f32 = 0.7;

/// Hit capsule proportions at scale 1.0 (meters).
pub const HIT_CAPSULE_RADIUS: f32 = 0.45;
pub const HIT_CAPSULE_HALF_SEGMENT: f32 = 0.45;
pub const HIT_CAPSULE_CENTER_HEIGHT: f32 = 1.1;

/// Initial shoot cooldown is drawn from this range so a fresh wave does not
/// volley in unison.
pub const ENEMY_FIRST_SHOT_MIN: f32 = 0.3;
pub const ENEMY_FIRST_SHOT_MAX: f32 = 1.0;

/// Minions per boss summon.
pub const SUMMON_COUNT: u32 = 2;

/// Summoned minions appear this far from the boss (meters).
pub const SUMMON_RADIUS_MIN: f32 = 3.0;
pub const SUMMON_RADIUS_MAX: f32 = 6.0;

// --- Line of sight ---

/// A blocking hit this close to the target is ignored so the target's own
/// volume never masks it (meters).
pub const LOS_EPSILON: f32 = 0.2;

// --- Waves ---

/// Boss spawn point for every wave (feet).
pub const BOSS_SPAWN: [f32; 3] = [0.0, 0.0, -90.0];

/// Minion ring around a fresh boss (meters).
pub const WAVE_RING_RADIUS_MIN: f32 = 10.0;
pub const WAVE_RING_RADIUS_MAX: f32 = 25.0;

/// Seconds between boss death and the next wave.
pub const WAVE_DELAY_SECS: f32 = 4.0;

/// Default minion population cap.
pub const MAX_MINIONS: usize = 22;

// --- Effects ---

/// Maximum live tracer effects.
pub const MAX_TRACERS: usize = 25;

pub const TRACER_LIFETIME_SECS: f32 = 0.06;
pub const MUZZLE_FLASH_SECS: f32 = 0.05;

/// Per-second decay base of the view-model recoil offset.
pub const RECOIL_RECOVERY_DECAY: f32 = 0.0001;
