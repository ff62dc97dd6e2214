//! JSON Export

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ExportError;

/// Write any serializable value as pretty JSON
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(value)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        period: &'static str,
        total: u64,
    }

    #[test]
    fn writes_pretty_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("report.json");
        write_json(
            &path,
            &Sample {
                period: "This Month",
                total: 1_845_670,
            },
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["period"], "This Month");
        assert_eq!(value["total"], 1_845_670);
    }
}
