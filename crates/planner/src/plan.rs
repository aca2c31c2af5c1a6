use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::VariantArray;
use time::OffsetDateTime;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday through Friday, the subset the dashboard progress bar targets.
    pub const WEEKDAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// One planned meal on a day. The id is the recipe's external id, kept
/// opaque; nothing guarantees the recipe still exists anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlotEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub added_at: u64,
}

impl MealSlotEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            added_at: OffsetDateTime::now_utc().unix_timestamp() as u64,
        }
    }
}

/// How many entries a single day accepts before `add_meal` refuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayCapacity {
    #[default]
    Unlimited,
    Limit(u8),
}

impl DayCapacity {
    pub fn from_config(limit: Option<u8>) -> Self {
        match limit {
            Some(n) => DayCapacity::Limit(n),
            None => DayCapacity::Unlimited,
        }
    }

    pub fn allows(&self, planned: usize) -> bool {
        match self {
            DayCapacity::Unlimited => true,
            DayCapacity::Limit(n) => planned < *n as usize,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AddMeal {
    Added,
    DayFull,
}

/// Week-keyed mapping of day to ordered meal entries. Serializes to the
/// `{"monday": [...], ...}` blob shape; a blob missing some day keys still
/// loads, the missing days reading as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: BTreeMap<Weekday, Vec<MealSlotEntry>>,
}

impl WeekPlan {
    /// The reset state: every day of the fixed set present with no entries.
    pub fn empty() -> Self {
        Self {
            days: Weekday::VARIANTS.iter().map(|d| (*d, Vec::new())).collect(),
        }
    }

    pub fn entries(&self, day: Weekday) -> &[MealSlotEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn add(&mut self, day: Weekday, entry: MealSlotEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// Removes by positional index, returning the removed entry. Out of
    /// range is a no-op.
    pub fn remove(&mut self, day: Weekday, index: usize) -> Option<MealSlotEntry> {
        let entries = self.days.get_mut(&day)?;
        if index >= entries.len() {
            return None;
        }

        Some(entries.remove(index))
    }

    pub fn count_planned(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn days_filled(&self) -> usize {
        self.days.values().filter(|entries| !entries.is_empty()).count()
    }

    /// Percentage of the Monday..Friday target filled, rounded. Weekend
    /// entries count toward totals but not toward this bar.
    pub fn progress_percent(&self) -> u8 {
        let filled = Weekday::WEEKDAYS
            .iter()
            .filter(|day| !self.entries(**day).is_empty())
            .count();

        ((filled as f64 / Weekday::WEEKDAYS.len() as f64) * 100.0).round() as u8
    }

    /// First day in Monday..Sunday order with capacity remaining.
    pub fn first_open_day(&self, capacity: DayCapacity) -> Option<Weekday> {
        Weekday::VARIANTS
            .iter()
            .copied()
            .find(|day| capacity.allows(self.entries(*day).len()))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.days
            .values()
            .flatten()
            .any(|entry| entry.id == id)
    }

    /// Case-insensitive name check, used to avoid suggesting a meal that is
    /// already planned somewhere in the week.
    pub fn contains_name(&self, name: &str) -> bool {
        self.days
            .values()
            .flatten()
            .any(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> MealSlotEntry {
        MealSlotEntry::new(id, name)
    }

    #[test]
    fn count_matches_sum_of_day_lists() {
        let mut plan = WeekPlan::empty();
        plan.add(Weekday::Monday, entry("52977", "Corba"));
        plan.add(Weekday::Monday, entry("53060", "Burek"));
        plan.add(Weekday::Saturday, entry("52804", "Poutine"));

        assert_eq!(plan.count_planned(), 3);
        assert_eq!(plan.days_filled(), 2);

        plan.remove(Weekday::Monday, 0);
        assert_eq!(plan.count_planned(), 2);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut plan = WeekPlan::empty();
        plan.add(Weekday::Tuesday, entry("52977", "Corba"));

        assert!(plan.remove(Weekday::Tuesday, 5).is_none());
        assert!(plan.remove(Weekday::Friday, 0).is_none());
        assert_eq!(plan.count_planned(), 1);
    }

    #[test]
    fn progress_counts_weekdays_only() {
        let mut plan = WeekPlan::empty();
        assert_eq!(plan.progress_percent(), 0);

        plan.add(Weekday::Monday, entry("52977", "Corba"));
        assert_eq!(plan.progress_percent(), 20);

        plan.add(Weekday::Saturday, entry("52804", "Poutine"));
        assert_eq!(plan.progress_percent(), 20);

        for day in Weekday::WEEKDAYS {
            plan.add(day, entry("53060", "Burek"));
        }
        assert_eq!(plan.progress_percent(), 100);
    }

    #[test]
    fn capacity_policy_limits_only_when_capped() {
        assert!(DayCapacity::Unlimited.allows(99));
        assert!(DayCapacity::Limit(3).allows(2));
        assert!(!DayCapacity::Limit(3).allows(3));
        assert_eq!(DayCapacity::from_config(None), DayCapacity::Unlimited);
        assert_eq!(DayCapacity::from_config(Some(3)), DayCapacity::Limit(3));
    }

    #[test]
    fn first_open_day_honors_capacity() {
        let mut plan = WeekPlan::empty();
        assert_eq!(
            plan.first_open_day(DayCapacity::Limit(1)),
            Some(Weekday::Monday)
        );

        plan.add(Weekday::Monday, entry("52977", "Corba"));
        assert_eq!(
            plan.first_open_day(DayCapacity::Limit(1)),
            Some(Weekday::Tuesday)
        );
        assert_eq!(
            plan.first_open_day(DayCapacity::Unlimited),
            Some(Weekday::Monday)
        );
    }

    #[test]
    fn duplicate_checks_span_the_whole_week() {
        let mut plan = WeekPlan::empty();
        plan.add(Weekday::Wednesday, entry("52977", "Corba"));

        assert!(plan.contains_id("52977"));
        assert!(!plan.contains_id("53060"));
        assert!(plan.contains_name("corba"));
        assert!(plan.contains_name("CORBA"));
        assert!(!plan.contains_name("Burek"));
    }
}
