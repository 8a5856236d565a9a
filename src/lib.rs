#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

//! Build Discord webhook messages (content, sender overrides and rich embeds)
//! and post them with a single blocking HTTP request.
//!
//! ```no_run
//! use discord_webhook::Message;
//!
//! let mut message = Message::new();
//! message.set_content("Deployment finished").set_username("CI");
//! message
//!     .new_embed()
//!     .set_title("release v1.2.0")
//!     .set_colour(0x2E_CC71)
//!     .add_field("Duration", "4m 12s", true)
//!     .set_timestamp();
//! message.send("https://discord.com/api/webhooks/123/abc")?;
//! # Ok::<(), discord_webhook::Error>(())
//! ```

pub mod clock;
pub mod embed;
mod error;
mod message;

pub use clock::{Clock, SystemClock};
pub use embed::{Author, Color, Embed, Field, Footer, Image, Thumbnail};
pub use error::{Error, Result};
pub use message::{Message, webhook_url};
