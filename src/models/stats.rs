//! The six-axis stat record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One stat axis, in chart order (clockwise from the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Complexity,
    Flexibility,
    Decoupling,
    Abstraction,
    Performance,
    Popularity,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Complexity,
        Stat::Flexibility,
        Stat::Decoupling,
        Stat::Abstraction,
        Stat::Performance,
        Stat::Popularity,
    ];

    /// Key used in stat records.
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Complexity => "complexity",
            Stat::Flexibility => "flexibility",
            Stat::Decoupling => "decoupling",
            Stat::Abstraction => "abstraction",
            Stat::Performance => "performance",
            Stat::Popularity => "popularity",
        }
    }

    /// Three-letter chart label.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Stat::Complexity => "CMP",
            Stat::Flexibility => "FLX",
            Stat::Decoupling => "DCP",
            Stat::Abstraction => "ABS",
            Stat::Performance => "PRF",
            Stat::Popularity => "POP",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Stat values, conventionally 0-10. Missing keys read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub complexity: i32,
    pub flexibility: i32,
    pub decoupling: i32,
    pub abstraction: i32,
    pub performance: i32,
    pub popularity: i32,
}

impl Stats {
    /// Every stat set to `value`.
    pub fn uniform(value: i32) -> Self {
        Self {
            complexity: value,
            flexibility: value,
            decoupling: value,
            abstraction: value,
            performance: value,
            popularity: value,
        }
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Complexity => self.complexity,
            Stat::Flexibility => self.flexibility,
            Stat::Decoupling => self.decoupling,
            Stat::Abstraction => self.abstraction,
            Stat::Performance => self.performance,
            Stat::Popularity => self.popularity,
        }
    }

    /// Values in chart order.
    pub fn values(&self) -> [i32; 6] {
        Stat::ALL.map(|s| self.get(s))
    }
}
