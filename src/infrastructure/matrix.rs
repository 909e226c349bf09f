//! # Matrix Service
//!
//! `ChatProvider` implementation for a single Matrix room.
//! Handles text delivery, image captions, reactions and error notices.

use crate::domain::traits::ChatProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::attachment::AttachmentConfig;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::EventId;
use matrix_sdk::ruma::events::reaction::ReactionEventContent;
use matrix_sdk::ruma::events::relation::Annotation;
use matrix_sdk::ruma::events::room::message::{RoomMessageEventContent, TextMessageEventContent};
use std::convert::TryFrom;
use std::path::Path;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
    platform: String,
}

/// Raw media ready for upload.
struct Media {
    filename: String,
    content_type: mime::Mime,
    data: Vec<u8>,
}

impl MatrixService {
    pub fn new(room: Room, platform: &str) -> Self {
        Self {
            room,
            platform: platform.to_string(),
        }
    }

    /// Loads media from an HTTP(S) URL or a local path.
    async fn load_media(source: &str) -> Result<Media> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let response = reqwest::get(source)
                .await
                .with_context(|| format!("Failed to fetch {source}"))?
                .error_for_status()?;
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<mime::Mime>().ok())
                .filter(|m| m.type_() == mime::IMAGE)
                .unwrap_or_else(|| guess_mime(source));
            let data = response.bytes().await?.to_vec();
            Ok(Media {
                filename: file_name(source),
                content_type,
                data,
            })
        } else {
            let data = tokio::fs::read(source)
                .await
                .with_context(|| format!("Failed to read {source}"))?;
            Ok(Media {
                filename: file_name(source),
                content_type: guess_mime(source),
                data,
            })
        }
    }

    async fn internal_send_image(&self, source: &str, caption: &str) -> Result<String> {
        let media = Self::load_media(source).await?;
        let config = AttachmentConfig::new()
            .caption(Some(TextMessageEventContent::plain(caption)));
        let response = self
            .room
            .send_attachment(media.filename, &media.content_type, media.data, config)
            .await?;
        Ok(response.event_id.to_string())
    }

    async fn internal_react(&self, event_id: &str, key: &str) -> Result<()> {
        let event_id = <&EventId>::try_from(event_id)?;
        let content = ReactionEventContent::new(Annotation::new(event_id.to_owned(), key.to_string()));
        self.room.send(content).await?;
        Ok(())
    }
}

fn file_name(source: &str) -> String {
    let trimmed = source.split(['?', '#']).next().unwrap_or(source);
    Path::new(trimmed)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("menu.jpg")
        .to_string()
}

fn guess_mime(source: &str) -> mime::Mime {
    let name = file_name(source).to_lowercase();
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        Some("webp") => "image/webp".parse().unwrap_or(mime::IMAGE_JPEG),
        _ => mime::IMAGE_JPEG,
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    fn platform(&self) -> String {
        self.platform.clone()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_markdown(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn send_plain(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending plain text to {} ({} chars)", self.room_id(), content.chars().count());
        self.room
            .send(RoomMessageEventContent::text_plain(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn send_image(&self, source: &str, caption: &str) -> Result<String, String> {
        tracing::info!("Bot sending image {} to {}", source, self.room_id());
        self.internal_send_image(source, caption)
            .await
            .map_err(|e| format!("{e:#}"))
    }

    async fn send_error(&self, error: &str) -> Result<(), String> {
        self.send_message(&crate::strings::messages::command_failed(error))
            .await
            .map(|_| ())
    }

    async fn react(&self, event_id: &str, key: &str) -> Result<(), String> {
        self.internal_react(event_id, key)
            .await
            .map_err(|e| e.to_string())
    }
}
