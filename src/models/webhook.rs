//! Webhook payload DTOs
//!
//! The JSON body POSTed to a Discord webhook URL. Only the fields the bot
//! actually sends; optional fields are omitted from the payload entirely
//! rather than sent as null.

use serde::Serialize;

/// Body of a webhook execution request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// A rich embed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// RGB colour packed as 0xRRGGBB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// ISO 8601 timestamp shown next to the footer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_omits_unset_fields() {
        let embed = Embed {
            title: Some("Hello".to_string()),
            color: Some(0x00FF00),
            ..Default::default()
        };

        let json = serde_json::to_value(&embed).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["color"], 0x00FF00);
        assert!(json.get("description").is_none());
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_message_serializes_embeds() {
        let message = WebhookMessage {
            content: None,
            embeds: vec![Embed {
                title: Some("t".to_string()),
                footer: Some(EmbedFooter {
                    text: "Wire | Published At".to_string(),
                    icon_url: None,
                }),
                fields: vec![EmbedField {
                    name: "Name".to_string(),
                    value: "Aeden".to_string(),
                    inline: true,
                }],
                ..Default::default()
            }],
        };

        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("content").is_none());
        assert_eq!(json["embeds"][0]["footer"]["text"], "Wire | Published At");
        assert_eq!(json["embeds"][0]["fields"][0]["name"], "Name");
    }
}
