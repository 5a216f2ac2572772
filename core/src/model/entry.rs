use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConsumptionTotals {
    pub per_day: f64,
    pub per_year: f64,
    pub per_year_kg: f64,
}

impl ConsumptionTotals {
    // per_year and per_year_kg are derived here and nowhere else.
    pub fn from_per_day(per_day: f64) -> Self {
        let per_year = per_day * 365.0;
        Self {
            per_day,
            per_year,
            per_year_kg: per_year / 1000.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub per_day: f64,
    pub per_year: f64,
    pub per_year_kg: f64,
}

impl LeaderboardEntry {
    // id 0 is a placeholder; the store assigns the real one on append.
    // 一度保存したエントリは削除以外で変更しない。
    pub fn new(name: &str, totals: ConsumptionTotals) -> Self {
        let name = name.trim();
        Self {
            id: 0,
            username: slugify(name),
            name: name.to_string(),
            per_day: totals.per_day,
            per_year: totals.per_year,
            per_year_kg: totals.per_year_kg,
        }
    }
}

pub fn slugify(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_are_derived_exactly() {
        for per_day in [0.0, 50.0, 123.5, 6.0] {
            let totals = ConsumptionTotals::from_per_day(per_day);
            assert_eq!(totals.per_year, per_day * 365.0);
            assert_eq!(totals.per_year_kg, totals.per_year / 1000.0);
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Alice Smith"), "alice_smith");
        assert_eq!(slugify("  Bob  "), "bob");
        assert_eq!(slugify("ALL CAPS NAME"), "all_caps_name");
    }

    #[test]
    fn test_new_entry_carries_totals() {
        let entry = LeaderboardEntry::new(" Alice ", ConsumptionTotals::from_per_day(50.0));
        assert_eq!(entry.id, 0);
        assert_eq!(entry.name, "Alice");
        assert_eq!(entry.username, "alice");
        assert_eq!(entry.per_year, 18250.0);
        assert_eq!(entry.per_year_kg, 18.25);
    }
}
