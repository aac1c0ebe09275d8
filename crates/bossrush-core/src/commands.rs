//! Player commands sent from the input layer to the simulation.
//!
//! The input layer owns raw key and mouse capture. It translates them into
//! held-state setters and edge events, which are queued and applied at the
//! next tick boundary.

use serde::{Deserialize, Serialize};

/// Movement keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Held state ---
    /// Replace the set of held movement keys.
    SetMoveKeys { keys: MoveKeys },
    SetSprint { held: bool },
    SetCrouch { held: bool },
    /// Aim down sights on/off.
    SetAim { held: bool },
    /// Absolute camera orientation in radians.
    Look { yaw: f32, pitch: f32 },

    // --- Edge events ---
    /// Jump pressed (buffered briefly).
    Jump,
    /// Primary fire pressed.
    TriggerDown,
    /// Primary fire released.
    TriggerUp,
    /// Reload key.
    Reload,
    /// Number-key weapon slot (1-based).
    SelectWeapon { slot: u8 },

    // --- Session control ---
    /// Start the game once the host is ready.
    StartGame,
    /// Freeze the world (e.g. pointer lock lost).
    Pause,
    Resume,
}
