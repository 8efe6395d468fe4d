use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::{NewTodo, Todo, TodoList};

/// HTTP client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    client: Client,
    base_url: String,
}

impl TodoClient {
    /// Create a client with its own reqwest Client.
    pub fn new(config: &ApiConfig) -> crate::Result<Self> {
        Self::with_client(Client::new(), config)
    }

    /// Create a client sharing an existing reqwest Client.
    pub fn with_client(client: Client, config: &ApiConfig) -> crate::Result<Self> {
        let base_url = config.base_url.trim_end_matches('/');
        Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(config.base_url.clone()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /todos`
    pub async fn list_todos(&self) -> crate::Result<Vec<Todo>> {
        let url = self.url("/todos");
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let list: TodoList = self.handle_response(response).await?;
        Ok(list.todos)
    }

    /// `POST /todos`, returning the stored todo with its assigned id.
    pub async fn create_todo(&self, new_todo: &NewTodo) -> crate::Result<Todo> {
        let url = self.url("/todos");
        log::debug!("POST {} title={:?}", url, new_todo.title);

        let response = self.client.post(&url).json(new_todo).send().await?;
        self.handle_response(response).await
    }

    /// `GET /todos/{id}`
    pub async fn get_todo(&self, id: i64) -> crate::Result<Todo> {
        let url = self.url(&format!("/todos/{}", id));
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::warn!("todo API answered {}: {}", status, body);
            return Err(ClientError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ClientError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
