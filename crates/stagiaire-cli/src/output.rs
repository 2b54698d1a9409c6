use serde::Serialize;
use stagiaire_core::StagiaireError;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Envelope printed for every command: `data` on success, `error` and
/// `error_kind` on failure.
#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> CliResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            api_version: API_VERSION,
            data: Some(data),
            error: None,
            error_kind: None,
        }
    }
}

impl CliResponse<()> {
    fn failed(err: &anyhow::Error) -> Self {
        Self {
            success: false,
            api_version: API_VERSION,
            data: None,
            error: Some(err.to_string()),
            error_kind: Some(error_kind(err)),
        }
    }
}

/// Domain errors keep their variant name; anything else came from argument
/// parsing or the binary itself.
fn error_kind(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<StagiaireError>()
        .map_or("invalid_argument", StagiaireError::kind)
}

fn render<T: Serialize>(response: &CliResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"api_version":"{}","error":"Could not encode response: {}"}}"#,
            API_VERSION, e
        )
    })
}

pub fn output_success<T: Serialize>(data: T) {
    println!("{}", render(&CliResponse::ok(data)));
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    output_success(ListResponse { items, count });
}

/// Prints the error envelope on stderr and exits with code 1.
pub fn output_error(err: &anyhow::Error) -> ! {
    eprintln!("{}", render(&CliResponse::failed(err)));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_envelope_carries_kind() {
        let err: anyhow::Error = StagiaireError::Authentication("Incorrect email or password".into()).into();
        let json: serde_json::Value = serde_json::from_str(&render(&CliResponse::failed(&err))).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Incorrect email or password");
        assert_eq!(json["error_kind"], "authentication");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_parse_errors_are_invalid_arguments() {
        let err = anyhow::anyhow!("Invalid date 'soon'. Expected YYYY-MM-DD");
        assert_eq!(error_kind(&err), "invalid_argument");
    }

    #[test]
    fn test_list_envelope() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&CliResponse::ok(ListResponse { items: vec!["a", "b"], count: 2 }))).unwrap();
        assert_eq!(json["data"]["count"], 2);
        assert!(json.get("error_kind").is_none());
    }
}
