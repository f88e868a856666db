//! Column-oriented tables handed to the chart renderer.
//!
//! A [`Table`] is an ordered list of named columns that all hold the same
//! number of rows. The invariant is checked whenever a column is added, so a
//! table that exists is aligned.

use aoc_core::Member;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::metrics::{DailyStarCount, completion_hour};
use crate::ReportError;

/// Column names shared between the table builders and chart definitions.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const HOURS_TO_COMPLETE: &str = "HoursToComplete";
    pub const COMPLETED_AT_HOUR_OF_DAY: &str = "CompletedAtHourOfDay";
    pub const Y: &str = "Y";
    pub const DAY: &str = "Day";
    pub const PART: &str = "Part";
    pub const PART1: &str = "Part1";
    pub const PART2: &str = "Part2";
    pub const PART1_LABEL: &str = "Part 1";
    pub const PART2_LABEL: &str = "Part 2";
}

/// Values of one column.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Column {
    Text(Vec<String>),
    Float(Vec<f64>),
    Integer(Vec<i64>),
}

impl Column {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::Float(values) => values.len(),
            Self::Integer(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Float(_) => "float",
            Self::Integer(_) => "integer",
        }
    }
}

/// Ordered, equal-length named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// [`ReportError::ColumnLength`] if the table already has columns and this
    /// one has a different number of rows.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<Self, ReportError> {
        let name = name.into();
        if let Some((_, first)) = self.columns.first()
            && first.len() != column.len()
        {
            return Err(ReportError::ColumnLength {
                column: name,
                expected: first.len(),
                actual: column.len(),
            });
        }
        self.columns.push((name, column));
        Ok(self)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, column)| column.len())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// # Errors
    ///
    /// [`ReportError::MissingColumn`] for an unknown name.
    pub fn column(&self, name: &str) -> Result<&Column, ReportError> {
        self.columns
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, column)| column)
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
    }

    /// # Errors
    ///
    /// Missing column, or a column that is not text.
    pub fn text(&self, name: &str) -> Result<&[String], ReportError> {
        match self.column(name)? {
            Column::Text(values) => Ok(values),
            other => Err(type_mismatch(name, "text", other)),
        }
    }

    /// Float column, with integer columns widened.
    ///
    /// # Errors
    ///
    /// Missing column, or a text column.
    pub fn numbers(&self, name: &str) -> Result<Vec<f64>, ReportError> {
        match self.column(name)? {
            Column::Float(values) => Ok(values.clone()),
            #[allow(clippy::cast_precision_loss)]
            Column::Integer(values) => Ok(values.iter().map(|&v| v as f64).collect()),
            other @ Column::Text(_) => Err(type_mismatch(name, "numeric", other)),
        }
    }

    /// # Errors
    ///
    /// Missing column, or a column that is not integer.
    pub fn integers(&self, name: &str) -> Result<&[i64], ReportError> {
        match self.column(name)? {
            Column::Integer(values) => Ok(values),
            other => Err(type_mismatch(name, "integer", other)),
        }
    }
}

fn type_mismatch(name: &str, expected: &'static str, actual: &Column) -> ReportError {
    ReportError::ColumnType {
        column: name.to_string(),
        expected,
        actual: actual.kind(),
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, column) in &self.columns {
            map.serialize_entry(name, column)?;
        }
        map.end()
    }
}

/// One row per earned star, in member-then-day-then-part order.
///
/// `Name` repeats each member's name once per declared star; every other
/// column has one entry per completed part. A member whose declared star count
/// disagrees with its parts therefore fails with [`ReportError::ColumnLength`].
///
/// # Errors
///
/// [`ReportError::ColumnLength`] on misaligned columns.
pub fn build_star_table<'a, I>(members: I) -> Result<Table, ReportError>
where
    I: IntoIterator<Item = &'a Member>,
    I::IntoIter: ExactSizeIterator,
{
    let members = members.into_iter();
    #[allow(clippy::cast_precision_loss)]
    let member_count = members.len() as f64;

    let mut names = Vec::new();
    let mut hours = Vec::new();
    let mut jitter = Vec::new();
    let mut days = Vec::new();
    let mut parts = Vec::new();

    for (position, member) in members.enumerate() {
        names.extend(std::iter::repeat_n(member.name.clone(), member.stars as usize));

        #[allow(clippy::cast_precision_loss)]
        let offset = position as f64 / member_count / 2.0;
        for (slot, day) in member.days.iter().enumerate() {
            for part in &day.parts {
                #[allow(clippy::cast_precision_loss)]
                let y = slot as f64 + offset;
                hours.push(completion_hour(day.index, part.get_star));
                jitter.push(y);
                days.push(i64::from(day.index));
                parts.push(i64::from(part.index));
            }
        }
    }

    Table::new()
        .with_column(columns::NAME, Column::Text(names))?
        .with_column(columns::HOURS_TO_COMPLETE, Column::Float(hours.clone()))?
        .with_column(columns::COMPLETED_AT_HOUR_OF_DAY, Column::Float(hours))?
        .with_column(columns::Y, Column::Float(jitter))?
        .with_column(columns::DAY, Column::Integer(days))?
        .with_column(columns::PART, Column::Integer(parts))
}

/// One row per event day from the dense star counts, plus constant legend
/// label columns.
///
/// # Errors
///
/// [`ReportError::ColumnLength`] on misaligned columns.
pub fn build_count_table(counts: &[DailyStarCount]) -> Result<Table, ReportError> {
    let label = |text: &str| Column::Text(vec![text.to_string(); counts.len()]);

    Table::new()
        .with_column(
            columns::DAY,
            Column::Integer(counts.iter().map(|c| i64::from(c.day)).collect()),
        )?
        .with_column(
            columns::PART1,
            Column::Integer(counts.iter().map(|c| i64::from(c.part1)).collect()),
        )?
        .with_column(
            columns::PART2,
            Column::Integer(counts.iter().map(|c| i64::from(c.part2)).collect()),
        )?
        .with_column(columns::PART1_LABEL, label(columns::PART1_LABEL))?
        .with_column(columns::PART2_LABEL, label(columns::PART2_LABEL))
}

#[cfg(test)]
mod tests {
    use aoc_core::calendar::from_epoch_seconds;
    use aoc_core::{Day, Part};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::metrics::count_stars_per_day_and_part;

    fn part(index: u32, ts: i64) -> Part {
        Part {
            index,
            get_star: from_epoch_seconds(ts).expect("in range"),
            star_index: 0,
        }
    }

    fn member(id: u64, name: &str, stars: u32, days: Vec<Day>) -> Member {
        Member {
            id,
            name: name.to_string(),
            local_score: 0,
            global_score: 0,
            stars,
            last_star: from_epoch_seconds(0).expect("in range"),
            days,
        }
    }

    // 2023-12-02T05:30:00Z and 2023-12-02T06:10:00Z
    fn ada() -> Member {
        member(
            1,
            "Ada",
            2,
            vec![Day {
                index: 1,
                parts: vec![part(1, 1_701_495_000), part(2, 1_701_497_400)],
            }],
        )
    }

    #[test]
    fn single_member_example() {
        let members = vec![ada()];
        let table = build_star_table(&members).expect("aligned");
        assert_eq!(table.text(columns::NAME).unwrap(), ["Ada", "Ada"]);
        let hours = table.numbers(columns::HOURS_TO_COMPLETE).unwrap();
        assert!((hours[0] - 24.5).abs() < 1e-9);
        assert!((hours[1] - 25.166_666).abs() < 1e-4);
        assert_eq!(
            table.numbers(columns::COMPLETED_AT_HOUR_OF_DAY).unwrap(),
            hours
        );
        assert_eq!(table.integers(columns::DAY).unwrap(), [1, 1]);
        assert_eq!(table.integers(columns::PART).unwrap(), [1, 2]);
    }

    #[test]
    fn column_order_is_stable() {
        let members = vec![ada()];
        let table = build_star_table(&members).expect("aligned");
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(
            names,
            vec!["Name", "HoursToComplete", "CompletedAtHourOfDay", "Y", "Day", "Part"]
        );
    }

    #[test]
    fn jitter_uses_day_slot_and_member_position() {
        let second = member(
            2,
            "Bob",
            2,
            vec![
                Day {
                    index: 3,
                    parts: vec![part(1, 1_701_583_200)],
                },
                Day {
                    index: 5,
                    parts: vec![part(1, 1_701_756_000)],
                },
            ],
        );
        let members = vec![ada(), second];
        let table = build_star_table(&members).expect("aligned");
        let y = table.numbers(columns::Y).unwrap();
        assert_eq!(y, vec![0.0, 0.0, 0.25, 1.25]);
        assert_eq!(table.integers(columns::DAY).unwrap(), [1, 1, 3, 5]);
    }

    #[test]
    fn reversed_members_reverse_rows() {
        let other = member(
            2,
            "Bob",
            1,
            vec![Day {
                index: 2,
                parts: vec![part(1, 1_701_583_200)],
            }],
        );
        let members = vec![ada(), other];
        let table = build_star_table(members.iter().rev()).expect("aligned");
        assert_eq!(table.text(columns::NAME).unwrap(), ["Bob", "Ada", "Ada"]);
    }

    #[test]
    fn star_count_mismatch_is_rejected() {
        let mut liar = ada();
        liar.stars = 3;
        let error = build_star_table(&[liar]).expect_err("misaligned");
        assert!(matches!(
            error,
            ReportError::ColumnLength { expected: 3, actual: 2, .. }
        ));
    }

    #[test]
    fn empty_member_list_gives_empty_columns() {
        let table = build_star_table(&Vec::<Member>::new()).expect("aligned");
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_names().count(), 6);
    }

    #[test]
    fn count_table_has_twenty_five_rows() {
        let counts = count_stars_per_day_and_part(&[ada()]);
        let table = build_count_table(&counts).expect("aligned");
        assert_eq!(table.row_count(), 25);
        assert_eq!(table.integers(columns::PART1).unwrap()[0], 1);
        assert_eq!(table.integers(columns::PART2).unwrap()[0], 1);
        assert_eq!(table.integers(columns::PART1).unwrap()[12], 0);
        assert!(table.text(columns::PART2_LABEL).unwrap().iter().all(|l| l == "Part 2"));
    }

    #[test]
    fn lookups_check_kind_and_name() {
        let table = build_star_table(&[ada()]).expect("aligned");
        assert!(matches!(
            table.integers(columns::NAME),
            Err(ReportError::ColumnType { expected: "integer", actual: "text", .. })
        ));
        assert!(matches!(
            table.column("Nope"),
            Err(ReportError::MissingColumn(name)) if name == "Nope"
        ));
        assert!(table.numbers(columns::DAY).is_ok());
    }

    #[test]
    fn mismatched_column_is_rejected() {
        let error = Table::new()
            .with_column("a", Column::Integer(vec![1, 2]))
            .and_then(|t| t.with_column("b", Column::Float(vec![1.0])))
            .expect_err("misaligned");
        assert!(matches!(
            error,
            ReportError::ColumnLength { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn serializes_columns_in_order() {
        let table = Table::new()
            .with_column("Day", Column::Integer(vec![1, 2]))
            .and_then(|t| t.with_column("Name", Column::Text(vec!["a".into(), "b".into()])))
            .expect("aligned");
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Day":[1,2],"Name":["a","b"]}"#);
    }
}
