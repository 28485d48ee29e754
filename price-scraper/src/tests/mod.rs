use chrono::{DateTime, TimeZone, Utc};

pub mod fixtures;

/// Build a UTC instant for tests.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test time {}-{}-{} {}:{}", year, month, day, hour, min))
}

/// Wrap `OIL` records in the response root element.
pub fn report_xml(entries: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from("<RESULT>");
    for (date, code, price) in entries {
        xml.push_str(&format!(
            "<OIL><DATE>{}</DATE><PRODCD>{}</PRODCD><PRICE>{}</PRICE></OIL>",
            date, code, price
        ));
    }
    xml.push_str("</RESULT>");
    xml
}
