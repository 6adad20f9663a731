use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest<'a> {
    pub user_id: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveActivityRequest<'a> {
    pub activity_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct SavedStateResponse {
    pub success: bool,
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedActivitiesResponse {
    pub success: bool,
    #[serde(default)]
    pub saved_activities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_serialize_requests_in_camel_case() {
        let body = serde_json::to_value(SaveActivityRequest {
            activity_id: "evt-1",
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "activityId": "evt-1" }));

        let body = serde_json::to_value(CredentialsRequest {
            user_id: "kit",
            password: "secret1",
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "userId": "kit", "password": "secret1" }));
    }

    #[test_log::test]
    fn should_deserialize_saved_activities() {
        let dto = serde_json::from_str::<SavedActivitiesResponse>(
            r##"{ "success": true, "savedActivities": ["evt-1", "exh-7"] }"##,
        )
        .unwrap();

        assert!(dto.success);
        assert_eq!(dto.saved_activities, vec!["evt-1", "exh-7"]);
    }
}
