//! Minimal PostgREST client and the process-wide client handles.

use once_cell::sync::OnceCell;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};

use crate::config::SupabaseConfig;
use crate::ports::CommentStoreError;

/// Authenticated handle to a Supabase project's REST endpoint.
pub struct SupabaseClient {
    rest_url: String,
    key: SecretString,
    http: Client,
}

impl SupabaseClient {
    pub fn new(project_url: &str, key: &str) -> Result<Self, CommentStoreError> {
        let http = Client::builder()
            .build()
            .map_err(|e| CommentStoreError::Network(e.to_string()))?;
        Ok(Self {
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            key: SecretString::new(key.to_string()),
            http,
        })
    }

    /// GET on a table with the session-less auth headers.
    pub fn get(&self, table: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.table_url(table)))
    }

    /// POST on a table with the session-less auth headers.
    pub fn post(&self, table: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.table_url(table)))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.key.expose_secret();
        request
            .header("apikey", key.as_str())
            .bearer_auth(key)
    }
}

/// Lazily constructed admin and public clients.
///
/// Each client is built on first use and reused for the life of the
/// process. Missing settings surface as `NotConfigured` at call time.
pub struct SupabaseClients {
    config: SupabaseConfig,
    admin: OnceCell<SupabaseClient>,
    public: OnceCell<SupabaseClient>,
}

impl SupabaseClients {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config,
            admin: OnceCell::new(),
            public: OnceCell::new(),
        }
    }

    /// Client authenticated with the secret key; used for writes.
    pub fn admin(&self) -> Result<&SupabaseClient, CommentStoreError> {
        self.admin.get_or_try_init(|| {
            let url = self.url()?;
            let key = non_empty(self.config.secret_key.as_deref())
                .ok_or(CommentStoreError::NotConfigured("SUPABASE__SECRET_KEY"))?;
            tracing::debug!("Initializing Supabase admin client");
            SupabaseClient::new(url, key)
        })
    }

    /// Client authenticated with the publishable key; falls back to the
    /// admin client when no publishable key is configured.
    pub fn public(&self) -> Result<&SupabaseClient, CommentStoreError> {
        let url = self.url()?;
        let Some(key) = non_empty(self.config.publishable_key.as_deref()) else {
            return self.admin();
        };
        self.public.get_or_try_init(|| {
            tracing::debug!("Initializing Supabase public client");
            SupabaseClient::new(url, key)
        })
    }

    fn url(&self) -> Result<&str, CommentStoreError> {
        non_empty(self.config.url.as_deref()).ok_or(CommentStoreError::NotConfigured("SUPABASE__URL"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
