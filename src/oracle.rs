//! Canned answers to the questions the service understands.

use crate::dex::DexEntry;
use std::str::FromStr;
use strum_macros::EnumString;

pub const PHYSICAL: &str = "physical";
pub const SPECIAL: &str = "special";

/// Matching is exact and case-sensitive; anything else lands in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum Question {
    #[strum(serialize = "is it a monotype?")]
    Monotype,

    #[strum(serialize = "is it a combination [physical, special][physical, special] type")]
    PhysicalSpecialCombination,

    #[strum(serialize = "does it have a [special, physical] type")]
    SpecialOrPhysical,

    #[strum(default)]
    Unrecognized(String),
}

impl Question {
    pub fn parse(raw: &str) -> Self {
        Self::from_str(raw).unwrap_or_else(|_| Self::Unrecognized(raw.to_string()))
    }
}

pub fn monotype(entry: &DexEntry) -> &'static str {
    if entry.type1 == entry.type2 {
        "a monotype"
    } else {
        "not a monotype"
    }
}

/// Both slots have to equal both labels, so this only holds when `t1 == t2`.
pub fn combination(entry: &DexEntry, t1: &str, t2: &str) -> String {
    let slot1 = entry.type1.as_deref();
    let slot2 = entry.type2.as_deref();

    let holds = slot1 == Some(t1) && slot2 == Some(t1) && slot1 == Some(t2) && slot2 == Some(t2);

    if holds {
        format!("a combination [{t1}, {t2}][{t1}, {t2}] type")
    } else {
        format!("not a combination [{t1}, {t2}][{t1}, {t2}] type")
    }
}

pub fn single_or_dual_type(entry: &DexEntry, t1: &str, t2: &str) -> String {
    match (entry.has_type(t1), entry.has_type(t2)) {
        (true, true) => format!("a {t1} {t2} type"),
        (true, false) => format!("a {t1} type"),
        (false, true) => format!("a {t2} type"),
        (false, false) => format!("not a {t1} or {t2} type"),
    }
}

pub fn answer(subject: &str, entry: &DexEntry, question: &Question) -> String {
    match question {
        Question::Monotype => format!("{} is {}", subject, monotype(entry)),
        Question::PhysicalSpecialCombination => {
            format!("{} is {}", subject, combination(entry, PHYSICAL, SPECIAL))
        }
        // No "is" here; the phrasing has always read "<name> a special type".
        Question::SpecialOrPhysical => {
            format!("{} {}", subject, single_or_dual_type(entry, SPECIAL, PHYSICAL))
        }
        Question::Unrecognized(raw) => {
            format!("Sorry, I don't understand the question: {}", raw)
        }
    }
}
