use super::ManagementAgent;
use crate::{
    error::Error,
    model::{
        CreateInstance, CreateInstanceBackup, DeleteInstance, GetInstanceBackups,
        GetOperationStatus, Instance, InstanceBackup, OperationStatus, RestoreInstanceBackup,
        ServiceVersion,
    },
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{fmt, time::Duration};
use tracing::debug;

pub const DEFAULT_SERVICE_URL: &str = "https://admin.services.crm6.dynamics.com";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Service endpoint and the credentials used to call it
#[derive(Clone)]
pub struct Connection {
    pub service_url: Url,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Connection {
    /// Parse and validate the service url
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the url is malformed or not http(s)
    pub fn new(
        service_url: &str,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, Error> {
        let service_url = Url::parse(service_url)
            .map_err(|e| Error::Argument(format!("invalid service url {service_url}: {e}")))?;

        if !matches!(service_url.scheme(), "http" | "https") {
            return Err(Error::Argument(format!(
                "unsupported service url scheme: {}",
                service_url.scheme()
            )));
        }

        Ok(Self {
            service_url,
            username,
            password,
        })
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("service_url", &self.service_url.as_str())
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Operation endpoints answer with either a single status or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// `ManagementAgent` speaking JSON over HTTP
pub struct RestAgent {
    client: Client,
    connection: Connection,
}

impl RestAgent {
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be built
    pub fn new(connection: Connection) -> Result<Self, Error> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, connection })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/v1/{path}",
            self.connection.service_url.as_str().trim_end_matches('/')
        )
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        self.send(self.client.get(&url).query(query)).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        self.send(self.client.post(&url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let request = match &self.connection.username {
            Some(username) => request.basic_auth(username, self.connection.password.as_deref()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                401 | 403 => Error::Auth(format!("{status}: {body}")),
                _ => Error::Transport(format!("request failed with status {status}: {body}")),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ManagementAgent for RestAgent {
    async fn get_instances(&self, unique_name: Option<&str>) -> Result<Vec<Instance>, Error> {
        let query: Vec<(&str, String)> = unique_name
            .map(|name| ("uniqueName", name.to_string()))
            .into_iter()
            .collect();
        self.get("Instances", &query).await
    }

    async fn get_service_versions(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<ServiceVersion>, Error> {
        let query: Vec<(&str, String)> = name
            .map(|name| ("name", name.to_string()))
            .into_iter()
            .collect();
        self.get("ServiceVersions", &query).await
    }

    async fn create_instance(
        &self,
        request: &CreateInstance,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.post("Instances/Provision", request)
            .await
            .map(OneOrMany::into_vec)
    }

    async fn delete_instance(
        &self,
        request: &DeleteInstance,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.post("Instances/Delete", request)
            .await
            .map(OneOrMany::into_vec)
    }

    async fn get_operation_status(
        &self,
        request: &GetOperationStatus,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.get("Operation", &[("id", request.operation_id.to_string())])
            .await
            .map(OneOrMany::into_vec)
    }

    async fn get_instance_backups(
        &self,
        request: &GetInstanceBackups,
    ) -> Result<Vec<InstanceBackup>, Error> {
        self.get("InstanceBackups", &[("id", request.instance_id.to_string())])
            .await
    }

    async fn create_instance_backup(
        &self,
        request: &CreateInstanceBackup,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.post("InstanceBackups", request)
            .await
            .map(OneOrMany::into_vec)
    }

    async fn restore_instance_backup(
        &self,
        request: &RestoreInstanceBackup,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.post("InstanceBackups/Restore", request)
            .await
            .map(OneOrMany::into_vec)
    }
}
