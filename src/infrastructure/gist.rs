//! GitHub Gist API client

use crate::error::{HitokotoError, Result};
use crate::infrastructure::http::error_body;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// One file inside a gist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing)]
    pub language: Option<String>,

    #[serde(default, skip_serializing)]
    pub size: Option<u64>,

    #[serde(default, skip_serializing)]
    pub truncated: Option<bool>,
}

/// A gist as returned by `GET /gists/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Gist {
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
}

/// Body of `PATCH /gists/{id}`
#[derive(Debug, Serialize)]
struct GistEdit<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    files: &'a BTreeMap<String, GistFile>,
}

impl Gist {
    /// Replace the content of `file_name`, adding the file when it is missing.
    ///
    /// Returns `false` when a new entry had to be created. New entries carry
    /// only their content.
    pub fn set_file_content(&mut self, file_name: &str, content: String) -> bool {
        let existed = self.files.contains_key(file_name);
        self.files.entry(file_name.to_string()).or_default().content = Some(content);
        existed
    }

    pub fn file_content(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name)?.content.as_deref()
    }
}

/// Store of remote multi-file documents
pub trait GistStore {
    /// Retrieve a gist by id
    fn get(&self, gist_id: &str) -> Result<Gist>;

    /// Submit the whole gist back as one edit
    fn edit(&self, gist_id: &str, gist: &Gist) -> Result<Gist>;
}

impl<T: GistStore + ?Sized> GistStore for &T {
    fn get(&self, gist_id: &str) -> Result<Gist> {
        (**self).get(gist_id)
    }

    fn edit(&self, gist_id: &str, gist: &Gist) -> Result<Gist> {
        (**self).edit(gist_id, gist)
    }
}

/// Token-authenticated client for the GitHub REST API
pub struct GitHubGistClient {
    client: reqwest::blocking::Client,
    api_url: String,
    token: String,
}

impl GitHubGistClient {
    pub fn new(client: reqwest::blocking::Client, api_url: String, token: String) -> Self {
        GitHubGistClient {
            client,
            api_url,
            token,
        }
    }

    fn gist_url(&self, gist_id: &str) -> String {
        format!("{}/gists/{}", self.api_url, gist_id)
    }

    fn authorized(&self, builder: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    fn parse_response(response: reqwest::blocking::Response) -> Result<Gist> {
        let status = response.status();
        if !status.is_success() {
            return Err(HitokotoError::GistStatus {
                status: status.as_u16(),
                body: error_body(response),
            });
        }

        response
            .json::<Gist>()
            .map_err(|e| HitokotoError::Gist(format!("Malformed gist response: {}", e)))
    }
}

impl GistStore for GitHubGistClient {
    fn get(&self, gist_id: &str) -> Result<Gist> {
        let url = self.gist_url(gist_id);
        debug!(url = %url, "retrieving gist");

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .map_err(|e| HitokotoError::Gist(e.to_string()))?;

        Self::parse_response(response)
    }

    fn edit(&self, gist_id: &str, gist: &Gist) -> Result<Gist> {
        let url = self.gist_url(gist_id);
        let body = GistEdit {
            description: gist.description.as_deref(),
            files: &gist.files,
        };
        debug!(url = %url, files = gist.files.len(), "submitting gist edit");

        let response = self
            .authorized(self.client.patch(&url))
            .json(&body)
            .send()
            .map_err(|e| HitokotoError::Gist(e.to_string()))?;

        Self::parse_response(response)
    }
}
