use reqwest::{
    StatusCode,
    blocking::{Client, Response},
    header::CONTENT_TYPE,
};
use serde::Serialize;

use crate::{
    embed::{Embed, non_empty},
    error::{Error, Result},
};

/// A webhook message: optional text, optional sender overrides and any number of embeds.
///
/// The message is a plain value owned by the caller. [`send`](Self::send) serializes
/// its current state, so sending twice posts twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,

    // Always present, even when empty.
    embeds: Vec<Embed>,
}

/// Composes the canonical Discord webhook URL from its id and token.
#[must_use]
pub fn webhook_url(id: u64, token: &str) -> String {
    format!("https://discord.com/api/webhooks/{id}/{token}")
}

impl Message {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = non_empty(content);
        self
    }

    /// Overrides the webhook's display name for this message only.
    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = non_empty(username);
        self
    }

    /// Overrides the webhook's avatar for this message only.
    pub fn set_avatar_url(&mut self, avatar_url: impl Into<String>) -> &mut Self {
        self.avatar_url = non_empty(avatar_url);
        self
    }

    /// Appends an empty embed and hands it back for configuration.
    ///
    /// Embeds are displayed in creation order. Earlier embeds stay reachable
    /// through [`embed_mut`](Self::embed_mut).
    pub fn new_embed(&mut self) -> &mut Embed {
        let index = self.embeds.len();
        self.embeds.push(Embed::default());
        &mut self.embeds[index]
    }

    #[must_use]
    pub fn embed_mut(&mut self, index: usize) -> Option<&mut Embed> {
        self.embeds.get_mut(index)
    }

    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Encodes the message as the JSON body Discord expects.
    ///
    /// # Errors
    /// Fails with [`Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Posts the message to `url` with a freshly built default HTTP client.
    ///
    /// Blocks until the server answers or the client gives up.
    ///
    /// # Errors
    /// * [`Error::Serialization`] if the message could not be encoded
    /// * [`Error::Transport`] if the HTTP client could not be built or the request could not be completed
    /// * [`Error::Rejected`] if the server answered with anything but `204 No Content`
    pub fn send(&self, url: &str) -> Result<()> {
        let client = Client::builder().build()?;
        self.send_with(&client, url)
    }

    /// Posts the message to `url` using the given client (for custom timeouts, proxies, ...).
    ///
    /// # Errors
    /// Same as [`send`](Self::send).
    pub fn send_with(&self, client: &Client, url: &str) -> Result<()> {
        let body: Vec<u8> = self.to_json()?;
        log::debug!(
            "Posting webhook message with {} embed(s), {} bytes",
            self.embeds.len(),
            body.len(),
        );

        let resp: Response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        handle_response(resp)
    }
}

fn handle_response(response: Response) -> Result<()> {
    let status: StatusCode = response.status();

    // Drain the body so the connection can be reused; its content is irrelevant.
    if let Err(e) = response.bytes() {
        log::trace!("Could not read webhook response body with status {status}: {e}");
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(());
    }

    log::debug!("Webhook request rejected with status {status}");
    Err(Error::Rejected { status })
}
