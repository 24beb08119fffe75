use crate::models::{HabitDefinition, HabitKind};

/// The tracked habits, in display order. Fixed at compile time; the log only
/// ever references these ids.
pub const CATALOG: &[HabitDefinition] = &[
    HabitDefinition {
        id: "solat_fardhu",
        label: "Solat Fardhu",
        kind: HabitKind::BoundedCounter,
        bound: Some(5),
        unit: Some("times"),
        icon: "Sun",
        description: Some("5 Daily Prayers"),
    },
    HabitDefinition {
        id: "tilawah",
        label: "Tilawah Al-Quran",
        kind: HabitKind::BoundedCounter,
        bound: Some(20),
        unit: Some("pages"),
        icon: "BookOpen",
        description: Some("Quran recitation"),
    },
    HabitDefinition {
        id: "solat_subuh",
        label: "Solat Subuh",
        kind: HabitKind::Boolean,
        bound: None,
        unit: None,
        icon: "Sunrise",
        description: Some("On time / Jamaah"),
    },
    HabitDefinition {
        id: "solat_rawatib",
        label: "Solat Rawatib",
        kind: HabitKind::BoundedCounter,
        bound: Some(5),
        unit: Some("times"),
        icon: "Plus",
        description: Some("Sunnah prayers"),
    },
    HabitDefinition {
        id: "al_mathurat",
        label: "Al-Mathurat",
        kind: HabitKind::BoundedCounter,
        bound: Some(2),
        unit: Some("times"),
        icon: "BookHeart",
        description: Some("Morning & Evening"),
    },
    HabitDefinition {
        id: "qiamullail",
        label: "Qiamullail",
        kind: HabitKind::Boolean,
        bound: None,
        unit: None,
        icon: "Moon",
        description: Some("Night prayer"),
    },
    HabitDefinition {
        id: "istighfar",
        label: "Istighfar",
        kind: HabitKind::Boolean,
        bound: None,
        unit: None,
        icon: "RefreshCcw",
        description: Some("Seeking forgiveness"),
    },
    HabitDefinition {
        id: "puasa",
        label: "Puasa",
        kind: HabitKind::Boolean,
        bound: None,
        unit: None,
        icon: "UtensilsCrossed",
        description: Some("Fasting"),
    },
    HabitDefinition {
        id: "bersenam",
        label: "Bersenam",
        kind: HabitKind::Boolean,
        bound: None,
        unit: None,
        icon: "Activity",
        description: Some("Exercise"),
    },
];

pub fn find(id: &str) -> Option<&'static HabitDefinition> {
    CATALOG.iter().find(|habit| habit.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, habit) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|other| other.id != habit.id),
                "duplicate habit id {}",
                habit.id
            );
        }
    }

    #[test]
    fn bounded_counters_carry_a_bound() {
        for habit in CATALOG {
            match habit.kind {
                HabitKind::BoundedCounter => {
                    assert!(habit.bound.is_some(), "{} is missing a bound", habit.id)
                }
                _ => assert!(habit.bound.is_none(), "{} should not have a bound", habit.id),
            }
        }
    }

    #[test]
    fn find_resolves_known_ids_only() {
        assert!(find("solat_fardhu").is_some());
        assert!(find("unknown_habit").is_none());
    }
}
