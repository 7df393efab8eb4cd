use crate::libs::activity::ActivityList;
use crate::libs::formatter::format_duration;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    /// Builds the numbered activity table with each activity's committed time.
    ///
    /// `current` marks the running activity. Activities that only appear in
    /// `totals` (recorded under a previous activity list) are listed after the
    /// configured ones, without a number.
    pub fn activities_table(activities: &ActivityList, totals: &HashMap<String, u64>, current: Option<&str>) -> Table {
        let marker = |name: &str| if current == Some(name) { "◀" } else { "" };
        let mut table = Table::new();

        table.add_row(row!["#", "ACTIVITY", "TODAY", ""]);
        for (index, name) in activities.iter().enumerate() {
            let today = totals.get(name).map(|minutes| format_duration(*minutes)).unwrap_or_default();
            table.add_row(row![index + 1, name, today, marker(name)]);
        }

        let mut others: Vec<(&String, &u64)> = totals.iter().filter(|(name, _)| !activities.contains(name)).collect();
        others.sort();
        for (name, minutes) in others {
            table.add_row(row!["", name, format_duration(*minutes), marker(name)]);
        }

        table
    }

    pub fn activities(activities: &ActivityList, totals: &HashMap<String, u64>, current: Option<&str>) {
        Self::activities_table(activities, totals, current).printstd();
    }
}
