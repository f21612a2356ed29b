// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed course content: ten exercises and the 14-day training plan.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of days in the training plan.
pub const DAY_COUNT: u32 = 14;

/// Display name used for exercise ids outside the catalog.
pub const UNKNOWN_EXERCISE_NAME: &str = "Exercício Desconhecido";

/// One of the ten self-paced negotiation drills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    /// Best alternative to a negotiated agreement mapping.
    Batna,
    /// Multiple equivalent simultaneous offers.
    Meso,
    /// Planned concession ladder.
    Concessoes,
    /// Situation/problem/implication/need-payoff role-play.
    Spin,
    /// Defending against an extreme anchor.
    Ancora,
    /// Post-meeting summary e-mail.
    Email,
    /// Recorded opening statements.
    Gravacao,
    /// Log of tactics observed.
    Taticas,
    /// Reframing positions.
    Framing,
    /// Post-negotiation review.
    Pos,
}

impl Exercise {
    /// Every exercise, in course order.
    pub const ALL: [Exercise; 10] = [
        Exercise::Batna,
        Exercise::Meso,
        Exercise::Concessoes,
        Exercise::Spin,
        Exercise::Ancora,
        Exercise::Email,
        Exercise::Gravacao,
        Exercise::Taticas,
        Exercise::Framing,
        Exercise::Pos,
    ];

    /// Returns the identifier used as the record key and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::Batna => "batna",
            Exercise::Meso => "meso",
            Exercise::Concessoes => "concessoes",
            Exercise::Spin => "spin",
            Exercise::Ancora => "ancora",
            Exercise::Email => "email",
            Exercise::Gravacao => "gravacao",
            Exercise::Taticas => "taticas",
            Exercise::Framing => "framing",
            Exercise::Pos => "pos",
        }
    }

    /// Returns the course display name.
    ///
    /// Activity titles embed this name, and the backend builds the same
    /// titles, so it must match the server's table exactly.
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Batna => "Mapa BATNA",
            Exercise::Meso => "MESO - Pacotes Equivalentes",
            Exercise::Concessoes => "Concessões Estratégicas",
            Exercise::Spin => "Role-play SPIN",
            Exercise::Ancora => "Defesa de Âncora Extrema",
            Exercise::Email => "E-mail de Síntese",
            Exercise::Gravacao => "Gravação de Aberturas",
            Exercise::Taticas => "Log de Táticas",
            Exercise::Framing => "Framing",
            Exercise::Pos => "Pós-Negociação",
        }
    }

    /// Suggested session length in minutes.
    pub fn suggested_minutes(&self) -> u64 {
        match self {
            Exercise::Meso | Exercise::Spin | Exercise::Gravacao => 45,
            _ => 30,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Exercise::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| Error::UnknownExercise(s.to_string()))
    }
}

/// Display name for any exercise id, known or not.
pub fn exercise_name(id: &str) -> &'static str {
    id.parse::<Exercise>()
        .map(|e| e.name())
        .unwrap_or(UNKNOWN_EXERCISE_NAME)
}

/// Returns the exercise practised on a training day, or `None` outside 1..=14.
///
/// Days 4-7 all drill SPIN and days 10-11 both drill recorded openings.
pub fn day_exercise(day: u32) -> Option<Exercise> {
    let exercise = match day {
        1 => Exercise::Batna,
        2 => Exercise::Meso,
        3 => Exercise::Concessoes,
        4..=7 => Exercise::Spin,
        8 => Exercise::Ancora,
        9 => Exercise::Email,
        10 | 11 => Exercise::Gravacao,
        12 => Exercise::Taticas,
        13 => Exercise::Framing,
        14 => Exercise::Pos,
        _ => return None,
    };
    Some(exercise)
}

/// Returns the training days in plan order.
pub fn days() -> impl Iterator<Item = u32> {
    1..=DAY_COUNT
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
