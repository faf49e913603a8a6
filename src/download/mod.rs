use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::http::response::Payload;

const FILE_PREFIX: &str = "worker-response";

pub fn suggested_file_name(payload: &Payload, now: &DateTime<Local>) -> String {
    let extension = match payload {
        Payload::Json(_) => "json",
        Payload::Text(_) => "txt",
    };
    format!("{FILE_PREFIX}-{}.{extension}", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Asks for a destination and writes `contents` there.
///
/// `Ok(None)` means the dialog was dismissed.
pub async fn save_response(file_name: String, contents: String) -> Result<Option<PathBuf>, String> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_file_name(&file_name)
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    handle
        .write(contents.as_bytes())
        .await
        .map_err(|e| format!("Failed to write response file `{}`: {e}", path.display()))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn file_name_is_timestamped_by_payload_kind() {
        let now = Local.with_ymd_and_hms(2024, 11, 5, 14, 3, 9).unwrap();
        assert_eq!(
            suggested_file_name(&Payload::Json(json!([])), &now),
            "worker-response-2024-11-05T14-03-09.json"
        );
        assert_eq!(
            suggested_file_name(&Payload::Text("hi".into()), &now),
            "worker-response-2024-11-05T14-03-09.txt"
        );
    }
}
