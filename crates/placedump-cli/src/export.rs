//! CSV export of collected place records.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local};
use csv::WriterBuilder;
use placedump_core::PlaceRecord;

/// Column order of the exported CSV.
pub(crate) const HEADER: [&str; 14] = [
    "name",
    "geo_location",
    "place_id",
    "address1",
    "city",
    "state",
    "postal_code",
    "formatted_address",
    "details",
    "local_phone_number",
    "international_phone_number",
    "website",
    "url",
    "rating",
];

/// Default export filename: `"{query} in {location} ({pages} pages) {timestamp}.csv"`.
///
/// Path separators in `query` or `location` become `-` so the name always
/// lands in the working directory.
pub(crate) fn default_filename(
    query: &str,
    location: &str,
    pages: u32,
    now: DateTime<Local>,
) -> String {
    let timestamp = now.format("%Y-%m-%d %H-%M-%S");
    format!(
        "{} in {} ({pages} pages) {timestamp}.csv",
        sanitize(query),
        sanitize(location)
    )
}

fn sanitize(part: &str) -> String {
    part.trim().replace(['/', '\\'], "-")
}

/// Renders one record in [`HEADER`] order. Absent values become empty cells.
pub(crate) fn record_row(record: &PlaceRecord) -> [String; 14] {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        record.name.clone(),
        record.geo_location.to_string(),
        record.place_id.clone(),
        record.address1.clone(),
        record.city.clone(),
        record.state.clone(),
        record.postal_code.clone(),
        opt(&record.formatted_address),
        record.details.to_string(),
        opt(&record.local_phone_number),
        opt(&record.international_phone_number),
        opt(&record.website),
        opt(&record.url),
        record.rating.map(|r| r.to_string()).unwrap_or_default(),
    ]
}

/// Writes the header and one row per record to `writer`.
///
/// # Errors
///
/// Returns an error if any row cannot be written or the writer fails to
/// flush.
pub(crate) fn write_records<W: Write>(writer: W, records: &[PlaceRecord]) -> anyhow::Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer
        .write_record(HEADER)
        .context("failed to write CSV header")?;
    for record in records {
        csv_writer
            .write_record(record_row(record))
            .with_context(|| format!("failed to write CSV row for place {}", record.place_id))?;
    }
    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Creates (or truncates) `path` and writes all records to it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn write_csv(path: &Path, records: &[PlaceRecord]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_records(std::io::BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use placedump_core::GeoLocation;

    use super::*;

    fn record() -> PlaceRecord {
        PlaceRecord {
            name: "Cafe, One".to_string(),
            geo_location: GeoLocation {
                lat: 47.61,
                lng: -122.33,
            },
            place_id: "p1".to_string(),
            address1: "100 Main St Apt 2".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            postal_code: "98101".to_string(),
            formatted_address: Some("100 Main St #2, Seattle, WA 98101, USA".to_string()),
            details: serde_json::json!({ "rating": 4.5 }),
            local_phone_number: Some("(206) 555-0100".to_string()),
            international_phone_number: None,
            website: None,
            url: Some("https://maps.google.com/?cid=1".to_string()),
            rating: Some(4.5),
        }
    }

    #[test]
    fn default_filename_follows_convention() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap();
        assert_eq!(
            default_filename("coffee", "Seattle", 2, now),
            "coffee in Seattle (2 pages) 2024-05-01 09-30-05.csv"
        );
    }

    #[test]
    fn default_filename_replaces_path_separators() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap();
        let name = default_filename("bars/pubs", "Seattle\\WA", 1, now);
        assert_eq!(name, "bars-pubs in Seattle-WA (1 pages) 2024-05-01 09-30-05.csv");
    }

    #[test]
    fn record_row_follows_header_order() {
        let row = record_row(&record());
        assert_eq!(row[0], "Cafe, One");
        assert_eq!(row[1], "47.61,-122.33");
        assert_eq!(row[2], "p1");
        assert_eq!(row[3], "100 Main St Apt 2");
        assert_eq!(row[6], "98101");
        assert_eq!(row[8], r#"{"rating":4.5}"#);
        assert_eq!(row[10], "");
        assert_eq!(row[11], "");
        assert_eq!(row[13], "4.5");
    }

    #[test]
    fn missing_rating_renders_empty() {
        let mut rec = record();
        rec.rating = None;
        assert_eq!(record_row(&rec)[13], "");
    }

    #[test]
    fn write_records_emits_header_then_rows() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[record()]).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, HEADER);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Cafe, One");
        assert_eq!(&rows[0][8], r#"{"rating":4.5}"#);
    }

    #[test]
    fn write_records_with_no_records_writes_header_only() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("name,geo_location,place_id,"));
    }

    #[test]
    fn write_csv_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        write_csv(&path, &[record(), record()]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 2);
    }
}
