//! People endpoints.

use reqwest::Method;

use crate::error::ApiError;
use crate::types::{NewPerson, Person, PersonPatch};

use super::ApiClient;

impl ApiClient {
    /// Fetch all people.
    pub async fn list_people(&self) -> Result<Vec<Person>, ApiError> {
        self.request(Method::GET, "/people/", None, "list people")
            .await
    }

    /// Fetch one person by id.
    pub async fn get_person(&self, id: &str) -> Result<Person, ApiError> {
        match self
            .request(Method::GET, &format!("/people/{id}"), None, "fetch person")
            .await
        {
            Err(ApiError::Http { status: 404, .. }) => Err(ApiError::NotFound {
                resource: "person",
                id: id.to_string(),
            }),
            other => other,
        }
    }

    /// Create a person; the backend assigns id and contact stats.
    pub async fn create_person(&self, person: &NewPerson) -> Result<Person, ApiError> {
        let body = Self::to_body(person, "create person")?;
        self.request(Method::POST, "/people/", Some(body), "create person")
            .await
    }

    /// Update person fields; absent patch fields are left alone.
    pub async fn update_person(&self, id: &str, patch: &PersonPatch) -> Result<Person, ApiError> {
        let body = Self::to_body(patch, "update person")?;
        self.request(
            Method::PUT,
            &format!("/people/{id}"),
            Some(body),
            "update person",
        )
        .await
    }

    /// Remove a person.
    pub async fn delete_person(&self, id: &str) -> Result<(), ApiError> {
        self.request_no_content(Method::DELETE, &format!("/people/{id}"), "delete person")
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&format!("{}/api/v1", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_list_people_decodes_snake_case_wire() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/people/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "p1",
                "name": "Sarah Chen",
                "role": "Product Lead at Orio",
                "avatar_color": "bg-indigo-200",
                "last_met": "Jan 16",
                "met_count": 5,
                "interests": ["Ethical AI"],
                "context": "Met at a conference.",
                "open_follow_ups": ["Send the deck"]
            }])))
            .mount(&server)
            .await;

        let people = client_for(&server).await.list_people().await.unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].avatar_color, "bg-indigo-200");
        assert_eq!(people[0].last_met.as_deref(), Some("Jan 16"));
        assert_eq!(people[0].open_follow_ups, vec!["Send the deck"]);
    }

    #[tokio::test]
    async fn test_get_person_404_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/people/p9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_person("p9").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_person_sends_snake_case_body() {
        let server = MockServer::start().await;
        // The mock only matches the snake_case body; a camelCase leak would
        // fall through to the server's 404 and fail the call.
        Mock::given(method("POST"))
            .and(path("/api/v1/people/"))
            .and(body_json(json!({
                "name": "Elena Rostova",
                "role": "Investor",
                "avatar_color": "bg-orange-200",
                "interests": ["Fintech"],
                "context": "Briefly introduced by Sarah.",
                "open_follow_ups": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "p3",
                "name": "Elena Rostova",
                "role": "Investor",
                "avatar_color": "bg-orange-200",
                "last_met": null,
                "met_count": 0,
                "interests": ["Fintech"],
                "context": "Briefly introduced by Sarah.",
                "open_follow_ups": []
            })))
            .mount(&server)
            .await;

        let new_person = NewPerson {
            name: "Elena Rostova".to_string(),
            role: "Investor".to_string(),
            avatar_color: "bg-orange-200".to_string(),
            interests: vec!["Fintech".to_string()],
            context: "Briefly introduced by Sarah.".to_string(),
            open_follow_ups: vec![],
        };

        let person = client_for(&server)
            .await
            .create_person(&new_person)
            .await
            .unwrap();
        assert_eq!(person.id, "p3");
        assert_eq!(person.met_count, 0);
    }

    #[tokio::test]
    async fn test_update_person_sends_only_present_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/people/p1"))
            .and(body_json(json!({ "context": "Now raising a seed round." })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "p1",
                "name": "Sarah Chen",
                "role": "Product Lead at Orio",
                "avatar_color": "bg-indigo-200",
                "context": "Now raising a seed round."
            })))
            .mount(&server)
            .await;

        let patch = PersonPatch {
            context: Some("Now raising a seed round.".to_string()),
            ..Default::default()
        };

        let person = client_for(&server)
            .await
            .update_person("p1", &patch)
            .await
            .unwrap();
        assert_eq!(person.context, "Now raising a seed round.");
    }

    #[tokio::test]
    async fn test_delete_person_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/people/p1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .delete_person("p1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }
}
