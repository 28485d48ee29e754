use std::fs;
use std::path::Path;

/// Load a saved API response by name from `src/tests/fixtures`.
pub fn load_xml_fixture(fixture_name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src/tests/fixtures")
        .join(format!("{}.xml", fixture_name));
    fs::read(path).unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}
