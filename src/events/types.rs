use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Stable player identity as reported by the recording.
pub type PlayerId = u64;

/// Recording tick. Monotonic within a round.
pub type Tick = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Bomb-carrying side.
    #[serde(alias = "t", alias = "terrorist")]
    Attack,
    #[serde(alias = "ct", alias = "counter_terrorist")]
    Defense,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Attack, Side::Defense];

    pub const fn opponent(self) -> Self {
        match self {
            Self::Attack => Self::Defense,
            Self::Defense => Self::Attack,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
        }
    }
}

/// One value per side, indexable by [Side].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub attack: T,
    pub defense: T,
}

impl<T> PerSide<T> {
    pub fn new(attack: T, defense: T) -> Self {
        Self { attack, defense }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> PerSide<U> {
        PerSide {
            attack: f(Side::Attack, &self.attack),
            defense: f(Side::Defense, &self.defense),
        }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Attack => &self.attack,
            Side::Defense => &self.defense,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Attack => &mut self.attack,
            Side::Defense => &mut self.defense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Player as listed when a round goes live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub side: Side,
    #[serde(default)]
    pub equipment_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlashedPlayer {
    pub player: PlayerId,
    /// Blind duration in seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    RoundStart {
        #[serde(default)]
        roster: Vec<RosterEntry>,
    },
    RoundEnd {
        winner: Side,
    },
    Kill {
        /// `None` for world damage (fall, bomb).
        #[serde(default)]
        attacker: Option<PlayerId>,
        victim: PlayerId,
        #[serde(default)]
        assister: Option<PlayerId>,
        #[serde(default)]
        flash_assist: bool,
        #[serde(default)]
        weapon: String,
        /// Weapon the victim was holding, when the recording has it.
        #[serde(default)]
        victim_weapon: String,
        #[serde(default)]
        attacker_side: Option<Side>,
        victim_side: Side,
        #[serde(default)]
        attacker_equipment: f64,
        #[serde(default)]
        victim_equipment: f64,
        #[serde(default)]
        attacker_position: Option<Position>,
        #[serde(default)]
        victim_position: Option<Position>,
    },
    PlayerHurt {
        victim: PlayerId,
        #[serde(default)]
        attacker: Option<PlayerId>,
        damage: u32,
        #[serde(default)]
        hitgroup: String,
        #[serde(default)]
        utility: bool,
        #[serde(default)]
        attacker_position: Option<Position>,
        #[serde(default)]
        victim_position: Option<Position>,
    },
    BombPlanted {
        planter: PlayerId,
    },
    BombDefused {
        defuser: PlayerId,
    },
    FlashExplode {
        thrower: PlayerId,
        #[serde(default)]
        affected: Vec<FlashedPlayer>,
        /// Source-side hint, used only when sides are unknown.
        #[serde(default)]
        team_flash: bool,
    },
}

/// A single decoded match event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub tick: Tick,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl MatchEvent {
    pub fn new(tick: Tick, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            EventKind::RoundStart { .. } => "round_start",
            EventKind::RoundEnd { .. } => "round_end",
            EventKind::Kill { .. } => "kill",
            EventKind::PlayerHurt { .. } => "player_hurt",
            EventKind::BombPlanted { .. } => "bomb_planted",
            EventKind::BombDefused { .. } => "bomb_defused",
            EventKind::FlashExplode { .. } => "flash_explode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponClass {
    Awp,
    Knife,
    Pistol,
    Rifle,
    Grenade,
    Other,
}

const PISTOLS: &[&str] = &[
    "glock", "usp_silencer", "usp", "hkp2000", "p2000", "p250", "fiveseven", "tec9", "cz75a",
    "deagle", "elite", "revolver",
];

const RIFLES: &[&str] = &[
    "ak47", "m4a1", "m4a1_silencer", "m4a4", "aug", "sg556", "famas", "galilar", "ssg08",
    "scar20", "g3sg1",
];

const GRENADES: &[&str] = &["hegrenade", "inferno", "molotov", "incgrenade"];

impl WeaponClass {
    /// Classify by recording weapon name (`weapon_` prefix and case are ignored).
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_ascii_lowercase();
        let bare = lowered.strip_prefix("weapon_").unwrap_or(&lowered);
        if bare == "awp" {
            Self::Awp
        } else if bare.starts_with("knife") || bare == "bayonet" {
            Self::Knife
        } else if PISTOLS.contains(&bare) {
            Self::Pistol
        } else if RIFLES.contains(&bare) {
            Self::Rifle
        } else if GRENADES.contains(&bare) {
            Self::Grenade
        } else {
            Self::Other
        }
    }

    /// Rifles and the AWP.
    pub fn is_long_gun(self) -> bool {
        matches!(self, Self::Rifle | Self::Awp)
    }
}
