//! Host-facing rendering of provider results

use courier_core::tools::ToolError;

use crate::resend::{AudienceList, SendEmailResponse};

/// `Audiences: <pretty JSON>`
pub fn format_audiences(audiences: &AudienceList) -> Result<String, ToolError> {
    Ok(format!("Audiences: {}", serde_json::to_string_pretty(audiences)?))
}

/// `Email sent successfully! <compact JSON>`
pub fn format_sent(sent: &SendEmailResponse) -> Result<String, ToolError> {
    Ok(format!("Email sent successfully! {}", serde_json::to_string(sent)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resend::interpret_response;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_format_sent_is_compact() {
        let sent = SendEmailResponse::new("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
        assert_eq!(
            format_sent(&sent).unwrap(),
            r#"Email sent successfully! {"id":"49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#
        );
    }

    #[test]
    fn test_format_audiences_is_pretty() {
        let list = AudienceList(json!({
            "object": "list",
            "data": [{ "id": "a1", "name": "Registered Users", "created_at": "2023-10-06 22:59:55" }]
        }));

        let text = format_audiences(&list).unwrap();
        assert!(text.starts_with("Audiences: {\n  \""));
        assert!(text.contains("\"object\": \"list\""));
        assert!(text.contains("\"name\": \"Registered Users\""));
    }

    #[test]
    fn test_provider_listing_passes_through_verbatim() {
        let body = r#"{"object":"list","has_more":false,"data":[{"id":"a1","name":"Newsletter","created_at":null,"object":"audience"}]}"#;

        let list: AudienceList =
            interpret_response(StatusCode::OK, body, "Failed to list audiences").unwrap();
        let text = format_audiences(&list).unwrap();

        let rendered: serde_json::Value =
            serde_json::from_str(text.strip_prefix("Audiences: ").unwrap()).unwrap();
        assert_eq!(rendered, serde_json::from_str::<serde_json::Value>(body).unwrap());
        assert!(text.contains("\"has_more\": false"));
    }

    #[test]
    fn test_format_sent_keeps_extra_members() {
        let sent: SendEmailResponse =
            interpret_response(StatusCode::OK, r#"{"id":"abc","object":"email"}"#, "Email failed to send")
                .unwrap();
        let text = format_sent(&sent).unwrap();
        assert!(text.contains(r#""object":"email""#));
    }
}
