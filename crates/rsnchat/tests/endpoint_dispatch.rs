//! Integration tests for endpoint dispatch against a stub RsnChat server.

use rsnchat::{Error, ImageModel, ImageRequest, ProdiaModel, RsnChatClient, TextModel};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "integration-key";

async fn connected_client(server: &MockServer) -> RsnChatClient {
    Mock::given(method("POST"))
        .and(path("/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("API key validated"))
        .mount(server)
        .await;

    RsnChatClient::builder(API_KEY)
        .with_base_url(server.uri())
        .connect()
        .await
        .unwrap()
}

#[tokio::test]
async fn every_text_endpoint_posts_prompt() {
    let server = MockServer::start().await;
    for model in TextModel::all() {
        Mock::given(method("POST"))
            .and(path(model.path()))
            .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
            .and(body_json(json!({"prompt": "ping"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": "true",
                "message": model.name()
            })))
            .expect(2)
            .mount(&server)
            .await;
    }

    let client = connected_client(&server).await;

    let named = [
        client.gpt("ping").await.unwrap(),
        client.openchat("ping").await.unwrap(),
        client.bard("ping").await.unwrap(),
        client.gemini("ping").await.unwrap(),
        client.bing("ping").await.unwrap(),
        client.llama("ping").await.unwrap(),
        client.mixtral("ping").await.unwrap(),
        client.claude("ping").await.unwrap(),
        client.codellama("ping").await.unwrap(),
    ];
    for (result, model) in named.iter().zip(TextModel::all()) {
        assert_eq!(result.message, model.name());
    }

    for model in TextModel::all() {
        let result = client.text(*model, "ping").await.unwrap();
        assert_eq!(result.message, model.name());
    }
}

#[tokio::test]
async fn every_image_endpoint_posts_its_fields() {
    let server = MockServer::start().await;
    let model_token = ProdiaModel::DELIBERATE_V3.as_str();

    let bodies = [
        (
            ImageModel::Prodia,
            json!({"prompt": "p", "negative_prompt": "n", "model": model_token}),
        ),
        (ImageModel::Kandinsky, json!({"prompt": "p", "negative_prompt": "n"})),
        (
            ImageModel::Absolutebeauty,
            json!({"prompt": "p", "negative_prompt": "n"}),
        ),
        (ImageModel::Sdxl, json!({"prompt": "p", "negative_prompt": "n"})),
        (ImageModel::Dalle, json!({"prompt": "p"})),
        (ImageModel::Icon, json!({"prompt": "p"})),
    ];

    for (model, body) in bodies {
        Mock::given(method("POST"))
            .and(path(model.path()))
            .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": "true",
                "image": model.name()
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = connected_client(&server).await;

    assert_eq!(
        client.prodia("p", "n", ProdiaModel::DELIBERATE_V3).await.unwrap().image,
        "prodia"
    );
    assert_eq!(client.kandinsky("p", "n").await.unwrap().image, "kandinsky");
    assert_eq!(
        client.absolutebeauty("p", "n").await.unwrap().image,
        "absolutebeauty"
    );
    assert_eq!(client.sdxl("p", "n").await.unwrap().image, "sdxl");
    assert_eq!(client.dalle("p").await.unwrap().image, "dalle");
    assert_eq!(client.icon("p").await.unwrap().image, "icon");
}

#[tokio::test]
async fn status_mapping_matches_across_text_and_image() {
    for status in [401u16, 403, 404] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gpt"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/icon"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = connected_client(&server).await;
        let text_err = client.gpt("x").await.unwrap_err();
        let image_err = client
            .image(ImageModel::Icon, &ImageRequest::new("x"))
            .await
            .unwrap_err();

        assert_eq!(text_err.error_code(), image_err.error_code());
        assert_eq!(text_err.status(), Some(status));
        assert_eq!(image_err.status(), Some(status));

        match status {
            401 => assert!(matches!(text_err, Error::AuthenticationError(_))),
            403 => assert!(matches!(text_err, Error::PermissionDenied(_))),
            _ => assert!(matches!(text_err, Error::NotFound(_))),
        }
    }
}

#[tokio::test]
async fn other_statuses_carry_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kandinsky"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = connected_client(&server).await;
    let err = client.kandinsky("x", "").await.unwrap_err();
    assert_eq!(
        err,
        Error::RequestFailed {
            status: 503,
            message: "overloaded".to_string()
        }
    );
}

#[tokio::test]
async fn malformed_image_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dalle"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"success\": \"true\""))
        .mount(&server)
        .await;

    let client = connected_client(&server).await;
    let err = client.dalle("x").await.unwrap_err();
    assert!(matches!(err, Error::DecodeError(_)));
}

#[tokio::test]
async fn invalid_key_returns_no_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/validate"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/gpt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = RsnChatClient::builder("wrong-key")
        .with_base_url(server.uri())
        .connect()
        .await;

    assert!(matches!(result, Err(Error::AuthenticationError(_))));
}

#[tokio::test]
async fn clones_share_configuration() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/llama"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": "true", "message": "ok"})),
        )
        .expect(4)
        .mount(&server)
        .await;

    let client = connected_client(&server).await;
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.llama(&format!("prompt {i}")).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.message, "ok");
    }
}
