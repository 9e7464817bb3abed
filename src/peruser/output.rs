use crate::error::{Result, WikiStatsError};
use crate::model::PerUserStats;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;

pub fn output_stats(stats: &PerUserStats) -> Result<()> {
    println!("{}", render(stats)?);
    Ok(())
}

/// Key-sorted, 4-space-indented JSON so repeated runs diff cleanly.
pub fn render(stats: &PerUserStats) -> Result<String> {
    let sorted: BTreeMap<&str, &BTreeMap<String, u64>> = BTreeMap::from([
        ("years", &stats.years),
        ("months", &stats.months),
        ("weeks", &stats.weeks),
    ]);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    sorted.serialize(&mut serializer)?;

    String::from_utf8(buf)
        .map_err(|_| WikiStatsError::Response("serializer produced non-UTF-8 output".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_sorted_four_space_dump() {
        let mut stats = PerUserStats::default();
        stats.years.insert("2020".into(), 3);
        stats.years.insert("2019".into(), 1);
        stats.months.insert("2020 11".into(), 2);
        stats.months.insert("2020 02".into(), 1);
        stats.weeks.insert("2020 46".into(), 2);

        let expected = r#"{
    "months": {
        "2020 02": 1,
        "2020 11": 2
    },
    "weeks": {
        "2020 46": 2
    },
    "years": {
        "2019": 1,
        "2020": 3
    }
}"#;
        assert_eq!(render(&stats).unwrap(), expected);
    }

    #[test]
    fn renders_empty_maps() {
        let dump = render(&PerUserStats::default()).unwrap();
        assert_eq!(dump, "{\n    \"months\": {},\n    \"weeks\": {},\n    \"years\": {}\n}");
    }
}
