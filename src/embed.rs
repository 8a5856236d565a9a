mod color;
mod field;
mod parts;

use serde::Serialize;

use crate::clock::{Clock, SystemClock, format_timestamp};

pub use color::{Color, ParseColorError};
pub use field::Field;
pub use parts::{Author, Footer, Image, Thumbnail};

pub(crate) use parts::non_empty;

/// A rich panel attached to a [`Message`](crate::Message).
///
/// Embeds are created through [`Message::new_embed`](crate::Message::new_embed)
/// and live inside the message. Every setter overwrites the previous value.
///
/// `footer`, `thumbnail` and `author` are always sent (as `{}` when unset),
/// while `image` and `fields` are left out entirely until something is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,

    footer: Footer,
    thumbnail: Thumbnail,

    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Image>,

    author: Author,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
}

impl Embed {
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = non_empty(title);
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = non_empty(url);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = non_empty(description);
        self
    }

    /// Sets the colour from a packed `0xRRGGBB` integer, sent exactly as given.
    ///
    /// `0` clears the colour instead of selecting black; use
    /// [`set_color`](Self::set_color) with [`Color::BLACK`] for that.
    pub fn set_colour(&mut self, code: u32) -> &mut Self {
        self.color = (code != 0).then_some(code);
        self
    }

    /// Sets the colour; unlike [`set_colour`](Self::set_colour) black is sent as `0`.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color.to_discord());
        self
    }

    /// Stamps the embed with the current UTC time.
    pub fn set_timestamp(&mut self) -> &mut Self {
        self.set_timestamp_with(SystemClock)
    }

    pub fn set_timestamp_with(&mut self, clock: impl Clock) -> &mut Self {
        self.timestamp = Some(format_timestamp(clock.now()));
        self
    }

    pub fn set_footer(&mut self, text: impl Into<String>, icon_url: impl Into<String>) -> &mut Self {
        self.footer = Footer {
            icon_url: non_empty(icon_url),
            text: non_empty(text),
        };
        self
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.image = Some(Image {
            url: non_empty(url),
        });
        self
    }

    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> &mut Self {
        self.thumbnail = Thumbnail {
            url: non_empty(url),
        };
        self
    }

    pub fn set_author(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> &mut Self {
        self.author = Author {
            name: non_empty(name),
            url: non_empty(url),
            icon_url: non_empty(icon_url),
        };
        self
    }

    /// Appends a field. Fields are displayed in the order they were added.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> &mut Self {
        self.fields.push(Field::new(name, value, inline));
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The packed colour code that will be sent.
    #[must_use]
    pub const fn color(&self) -> Option<u32> {
        self.color
    }

    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    #[must_use]
    pub const fn footer(&self) -> &Footer {
        &self.footer
    }

    #[must_use]
    pub const fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    #[must_use]
    pub const fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
