mod integration_tests {
    use crate::test_utils::{bearer, register, setup_test_server};
    use axum::body::Bytes;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use common::{
        MessageResponse, ProfileResponse, TokenResponse, UserResponse, ValidationErrorResponse,
    };
    use serde_json::json;

    fn messages(body: &ValidationErrorResponse) -> Vec<&str> {
        body.errors.iter().map(|e| e.msg.as_str()).collect()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = setup_test_server().await;

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_register_and_load_user() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane Doe", "Jane@Example.com").await;

        let (name, value) = bearer(&token);
        let response = server.get("/api/auth").add_header(name, value).await;

        response.assert_status(StatusCode::OK);
        let user: UserResponse = response.json();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
        assert!(user.avatar.unwrap().starts_with("https://www.gravatar.com/avatar/"));

        // The password hash never leaves the server
        let (name, value) = bearer(&token);
        let raw: serde_json::Value = server.get("/api/auth").add_header(name, value).await.json();
        assert!(raw.get("password_hash").is_none());
        assert!(raw.get("password").is_none());
    }

    #[tokio::test]
    async fn test_register_validation_errors() {
        let server = setup_test_server().await;

        let response = server
            .post("/api/users")
            .json(&json!({ "email": "not-an-email", "password": "123" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(
            messages(&body),
            vec![
                "Please include a valid email",
                "Name is required",
                "Please enter a password with 6 or more characters",
            ]
        );
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let server = setup_test_server().await;
        register(&server, "First", "dup@example.com").await;

        let response = server
            .post("/api/users")
            .json(&json!({ "name": "Second", "email": "DUP@example.com", "password": "secret123" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(messages(&body), vec!["User already exists"]);
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let server = setup_test_server().await;

        let response = server
            .post("/api/users")
            .bytes(Bytes::from_static(b"{ not json"))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].param, "body");
    }

    #[tokio::test]
    async fn test_login() {
        let server = setup_test_server().await;
        register(&server, "Jane", "login@example.com").await;

        let response = server
            .post("/api/auth")
            .json(&json!({ "email": "login@example.com", "password": "secret123" }))
            .await;
        response.assert_status(StatusCode::OK);
        let token = response.json::<TokenResponse>().token;

        let (name, value) = bearer(&token);
        server.get("/api/auth").add_header(name, value).await.assert_status(StatusCode::OK);

        let wrong = server
            .post("/api/auth")
            .json(&json!({ "email": "login@example.com", "password": "wrong-password" }))
            .await;
        wrong.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(messages(&wrong.json()), vec!["Invalid credentials"]);

        let unknown = server
            .post("/api/auth")
            .json(&json!({ "email": "nobody@example.com", "password": "secret123" }))
            .await;
        unknown.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(messages(&unknown.json()), vec!["Invalid credentials"]);
    }

    #[tokio::test]
    async fn test_private_routes_require_token() {
        let server = setup_test_server().await;

        let response = server.get("/api/auth").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: MessageResponse = response.json();
        assert_eq!(body.msg, "No token, authorization denied");

        let (name, value) = bearer("garbage");
        let response = server.get("/api/profile/me").add_header(name, value).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: MessageResponse = response.json();
        assert_eq!(body.msg, "Token is not valid");

        // Authentication happens before body validation
        let response = server.post("/api/profile").json(&json!({})).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_legacy_token_header() {
        let server = setup_test_server().await;
        let token = register(&server, "Legacy", "legacy@example.com").await;

        let response = server
            .get("/api/auth")
            .add_header(
                HeaderName::from_static("x-auth-token"),
                HeaderValue::from_str(&token).unwrap(),
            )
            .await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_me_without_profile() {
        let server = setup_test_server().await;
        let token = register(&server, "No Profile", "none@example.com").await;

        let (name, value) = bearer(&token);
        let response = server.get("/api/profile/me").add_header(name, value).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: MessageResponse = response.json();
        assert_eq!(body.msg, "There is no profile for this user");
    }

    #[tokio::test]
    async fn test_create_profile_then_get_me() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "profile@example.com").await;

        let (name, value) = bearer(&token);
        let response = server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({
                "status": "Developer",
                "skills": "Rust, SQL ,,Yew",
                "company": "Acme",
                "website": "https://jane.dev",
                "githubusername": "janedoe",
                "twitter": "jane",
                "youtube": ""
            }))
            .await;
        response.assert_status(StatusCode::OK);
        let created: ProfileResponse = response.json();

        assert_eq!(created.status, "Developer");
        assert_eq!(created.skills, vec!["Rust", "SQL", "Yew"]);
        assert_eq!(created.company.as_deref(), Some("Acme"));
        assert_eq!(created.github_username.as_deref(), Some("janedoe"));
        assert_eq!(created.social.twitter.as_deref(), Some("jane"));
        assert_eq!(created.social.youtube, None);
        assert_eq!(created.user.name, "Jane");
        assert!(created.experience.is_empty());

        let (name, value) = bearer(&token);
        let me: ProfileResponse = server.get("/api/profile/me").add_header(name, value).await.json();
        assert_eq!(me, created);
    }

    #[tokio::test]
    async fn test_profile_validation_errors() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "invalid-profile@example.com").await;

        let (name, value) = bearer(&token);
        let response = server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({ "skills": " , " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(messages(&body), vec!["Skills are required", "Status is required"]);
    }

    #[tokio::test]
    async fn test_whitespace_status_is_rejected() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "blank-status@example.com").await;

        let (name, value) = bearer(&token);
        let response = server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({ "status": "   ", "skills": "Rust" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(messages(&body), vec!["Status is required"]);

        let (name, value) = bearer(&token);
        server
            .get("/api/profile/me")
            .add_header(name, value)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_profile_keeps_identity_and_unsent_fields() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "update@example.com").await;

        let (name, value) = bearer(&token);
        let first: ProfileResponse = server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({
                "status": "Junior Developer",
                "skills": ["Rust"],
                "company": "Acme",
                "bio": "Hello",
                "linkedin": "jane-li"
            }))
            .await
            .json();

        let (name, value) = bearer(&token);
        let response = server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({
                "status": "Senior Developer",
                "skills": "Rust, Go",
                "bio": ""
            }))
            .await;
        response.assert_status(StatusCode::OK);
        let second: ProfileResponse = response.json();

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.status, "Senior Developer");
        assert_eq!(second.skills, vec!["Rust", "Go"]);
        // Not sent: kept
        assert_eq!(second.company.as_deref(), Some("Acme"));
        // Sent blank: cleared
        assert_eq!(second.bio, None);
        // Social handles are always replaced
        assert_eq!(second.social.linkedin, None);

        let all: Vec<ProfileResponse> = server.get("/api/profile").await.json();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_profiles_and_by_user() {
        let server = setup_test_server().await;
        let jane = register(&server, "Jane", "jane@example.com").await;
        let john = register(&server, "John", "john@example.com").await;

        for (token, status) in [(&jane, "Developer"), (&john, "Student")] {
            let (name, value) = bearer(token);
            server
                .post("/api/profile")
                .add_header(name, value)
                .json(&json!({ "status": status, "skills": "Rust" }))
                .await
                .assert_status(StatusCode::OK);
        }

        let response = server.get("/api/profile").await;
        response.assert_status(StatusCode::OK);
        let all: Vec<ProfileResponse> = response.json();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].user.name, "Jane");
        assert_eq!(all[1].user.name, "John");
        assert!(all.iter().all(|p| p.user.avatar.is_some()));

        let john_id = all[1].user.id;
        let response = server.get(&format!("/api/profile/user/{}", john_id)).await;
        response.assert_status(StatusCode::OK);
        let profile: ProfileResponse = response.json();
        assert_eq!(profile.status, "Student");
    }

    #[tokio::test]
    async fn test_get_profile_by_user_not_found() {
        let server = setup_test_server().await;

        for path in ["/api/profile/user/99999", "/api/profile/user/not-an-id"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: MessageResponse = response.json();
            assert_eq!(body.msg, "Profile not found");
        }
    }

    #[tokio::test]
    async fn test_experience_is_prepended() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "exp@example.com").await;

        let (name, value) = bearer(&token);
        server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({ "status": "Developer", "skills": "Rust" }))
            .await
            .assert_status(StatusCode::OK);

        for (title, from) in [("Junior Engineer", "2018-01-01"), ("Senior Engineer", "2021-06-01")] {
            let (name, value) = bearer(&token);
            server
                .put("/api/profile/experience")
                .add_header(name, value)
                .json(&json!({ "title": title, "company": "Acme", "from": from, "current": true }))
                .await
                .assert_status(StatusCode::OK);
        }

        let (name, value) = bearer(&token);
        let profile: ProfileResponse = server.get("/api/profile/me").add_header(name, value).await.json();
        let titles: Vec<_> = profile.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Senior Engineer", "Junior Engineer"]);
        assert_eq!(profile.experience[0].from.to_string(), "2021-06-01");
        assert!(profile.experience[0].current);
    }

    #[tokio::test]
    async fn test_experience_validation_and_missing_profile() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "exp-invalid@example.com").await;

        let (name, value) = bearer(&token);
        let response = server
            .put("/api/profile/experience")
            .add_header(name, value)
            .json(&json!({ "title": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(
            messages(&body),
            vec!["Company is required", "From date is required", "Title is required"]
        );

        let (name, value) = bearer(&token);
        let response = server
            .put("/api/profile/experience")
            .add_header(name, value)
            .json(&json!({ "title": "Engineer", "company": "Acme", "from": "2020-01-01" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: MessageResponse = response.json();
        assert_eq!(body.msg, "There is no profile for this user");
    }

    #[tokio::test]
    async fn test_experience_form_with_blank_dates() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "exp-blank@example.com").await;

        let (name, value) = bearer(&token);
        server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({ "status": "Developer", "skills": "Rust" }))
            .await
            .assert_status(StatusCode::OK);

        // A current job submitted from the form leaves "to" empty
        let (name, value) = bearer(&token);
        let response = server
            .put("/api/profile/experience")
            .add_header(name, value)
            .json(&json!({
                "title": "Engineer",
                "company": "Acme",
                "from": "2020-01-01",
                "to": "",
                "current": true
            }))
            .await;
        response.assert_status(StatusCode::OK);
        let profile: ProfileResponse = response.json();
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].to, None);
        assert!(profile.experience[0].current);

        // An untouched form reports every missing field, not a parse error
        let (name, value) = bearer(&token);
        let response = server
            .put("/api/profile/experience")
            .add_header(name, value)
            .json(&json!({ "title": " ", "company": "", "from": "", "to": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(
            messages(&body),
            vec!["Company is required", "From date is required", "Title is required"]
        );
    }

    #[tokio::test]
    async fn test_delete_experience() {
        let server = setup_test_server().await;
        let jane = register(&server, "Jane", "del-exp@example.com").await;
        let john = register(&server, "John", "del-exp-other@example.com").await;

        for token in [&jane, &john] {
            let (name, value) = bearer(token);
            server
                .post("/api/profile")
                .add_header(name, value)
                .json(&json!({ "status": "Developer", "skills": "Rust" }))
                .await
                .assert_status(StatusCode::OK);
        }

        let (name, value) = bearer(&jane);
        let profile: ProfileResponse = server
            .put("/api/profile/experience")
            .add_header(name, value)
            .json(&json!({ "title": "Engineer", "company": "Acme", "from": "2020-01-01" }))
            .await
            .json();
        let exp_id = profile.experience[0].id;

        // Someone else's entry is invisible
        let (name, value) = bearer(&john);
        let response = server
            .delete(&format!("/api/profile/experience/{}", exp_id))
            .add_header(name, value)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<MessageResponse>().msg, "Experience not found");

        let (name, value) = bearer(&jane);
        let response = server
            .delete(&format!("/api/profile/experience/{}", exp_id))
            .add_header(name, value)
            .await;
        response.assert_status(StatusCode::OK);
        assert!(response.json::<ProfileResponse>().experience.is_empty());
    }

    #[tokio::test]
    async fn test_delete_account_removes_profile_and_user() {
        let server = setup_test_server().await;
        let token = register(&server, "Jane", "delete@example.com").await;

        let (name, value) = bearer(&token);
        let profile: ProfileResponse = server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({ "status": "Developer", "skills": "Rust" }))
            .await
            .json();
        let (name, value) = bearer(&token);
        server
            .put("/api/profile/experience")
            .add_header(name, value)
            .json(&json!({ "title": "Engineer", "company": "Acme", "from": "2020-01-01" }))
            .await
            .assert_status(StatusCode::OK);

        let (name, value) = bearer(&token);
        let response = server.delete("/api/profile").add_header(name, value).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<MessageResponse>().msg, "User deleted");

        let all: Vec<ProfileResponse> = server.get("/api/profile").await.json();
        assert!(all.is_empty());

        server
            .get(&format!("/api/profile/user/{}", profile.user.id))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        // The token outlives the account but no longer loads a user
        let (name, value) = bearer(&token);
        server
            .get("/api/auth")
            .add_header(name, value)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        // Writes with the stale token are refused too
        let (name, value) = bearer(&token);
        let response = server
            .post("/api/profile")
            .add_header(name, value)
            .json(&json!({ "status": "Developer", "skills": "Rust" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<MessageResponse>().msg, "Token is not valid");

        let (name, value) = bearer(&token);
        let response = server.delete("/api/profile").add_header(name, value).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<MessageResponse>().msg, "Token is not valid");

        let all: Vec<ProfileResponse> = server.get("/api/profile").await.json();
        assert!(all.is_empty());

        // The email is free again
        register(&server, "Jane Again", "delete@example.com").await;
    }
}
