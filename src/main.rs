mod logging;
mod validate;

use anyhow::{Context, Result, bail};
use clap::Parser;
use discord_webhook::{Color, Message, webhook_url};

/// Post a message to a Discord webhook
#[derive(Parser)]
struct Args {
    /// The full webhook URL (alternatively use --id and --token)
    #[arg(conflicts_with_all = ["id", "token"])]
    url: Option<String>,

    /// Webhook ID, combined with --token into a discord.com URL
    #[arg(long, requires = "token")]
    id: Option<u64>,

    /// Webhook token, combined with --id into a discord.com URL
    #[arg(long, requires = "id")]
    token: Option<String>,

    /// Message text
    #[arg(short, long)]
    content: Option<String>,

    /// Display name override for this message
    #[arg(short, long)]
    username: Option<String>,

    /// Avatar image URL override for this message
    #[arg(long)]
    avatar_url: Option<String>,

    #[command(flatten)]
    embed: EmbedArgs,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::Args)]
struct EmbedArgs {
    /// Embed title
    #[arg(short, long)]
    title: Option<String>,

    /// Embed description
    #[arg(short, long)]
    description: Option<String>,

    /// Link opened when clicking the embed title
    #[arg(long)]
    embed_url: Option<String>,

    /// Embed colour as decimal, #RRGGBB or 0xRRGGBB
    #[arg(long)]
    colour: Option<Color>,

    /// Stamp the embed with the current time
    #[arg(long)]
    timestamp: bool,

    /// Footer text
    #[arg(long)]
    footer: Option<String>,

    /// Footer icon URL
    #[arg(long)]
    footer_icon: Option<String>,

    /// Large image URL
    #[arg(long)]
    image: Option<String>,

    /// Thumbnail image URL
    #[arg(long)]
    thumbnail: Option<String>,

    /// Author name
    #[arg(long)]
    author: Option<String>,

    /// Author link
    #[arg(long)]
    author_url: Option<String>,

    /// Author icon URL
    #[arg(long)]
    author_icon: Option<String>,

    /// Field as NAME=VALUE (repeatable, shown in the given order)
    #[arg(short, long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Display all fields inline
    #[arg(long)]
    inline: bool,
}

impl EmbedArgs {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.embed_url.is_none()
            && self.colour.is_none()
            && !self.timestamp
            && self.footer.is_none()
            && self.footer_icon.is_none()
            && self.image.is_none()
            && self.thumbnail.is_none()
            && self.author.is_none()
            && self.author_url.is_none()
            && self.author_icon.is_none()
            && self.fields.is_empty()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let url = resolve_url(&args)?;
    let message = build_message(args);

    log::info!("Sending message with {} embed(s)", message.embeds().len());
    message
        .send(&url)
        .context("Could not deliver webhook message")?;
    log::info!("Message delivered");
    Ok(())
}

fn resolve_url(args: &Args) -> Result<String> {
    if let Some(url) = &args.url {
        return Ok(url.clone());
    }
    let (Some(id), Some(token)) = (args.id, &args.token) else {
        bail!("Either a webhook URL or both --id and --token are required");
    };
    validate::webhook_id(id).context("Invalid WebHook ID")?;
    validate::webhook_token(token).context("Invalid WebHook Token")?;
    Ok(webhook_url(id, token))
}

fn build_message(args: Args) -> Message {
    let mut message = Message::new();
    if let Some(content) = args.content {
        message.set_content(content);
    }
    if let Some(username) = args.username {
        message.set_username(username);
    }
    if let Some(avatar_url) = args.avatar_url {
        message.set_avatar_url(avatar_url);
    }

    let e = args.embed;
    if e.is_empty() {
        return message;
    }

    let embed = message.new_embed();
    if let Some(title) = e.title {
        embed.set_title(title);
    }
    if let Some(description) = e.description {
        embed.set_description(description);
    }
    if let Some(url) = e.embed_url {
        embed.set_url(url);
    }
    if let Some(colour) = e.colour {
        embed.set_color(colour);
    }
    if e.timestamp {
        embed.set_timestamp();
    }
    if e.footer.is_some() || e.footer_icon.is_some() {
        embed.set_footer(e.footer.unwrap_or_default(), e.footer_icon.unwrap_or_default());
    }
    if let Some(image) = e.image {
        embed.set_image(image);
    }
    if let Some(thumbnail) = e.thumbnail {
        embed.set_thumbnail(thumbnail);
    }
    if e.author.is_some() || e.author_url.is_some() || e.author_icon.is_some() {
        embed.set_author(
            e.author.unwrap_or_default(),
            e.author_url.unwrap_or_default(),
            e.author_icon.unwrap_or_default(),
        );
    }
    for (name, value) in e.fields {
        embed.add_field(name, value, e.inline);
    }

    message
}

fn parse_field(s: &str) -> Result<(String, String)> {
    let Some((name, value)) = s.split_once('=') else {
        bail!("Expected NAME=VALUE, got {s:?}");
    };
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("webhook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn url_or_parts() {
        let args = parse(&["https://example.com/hook"]);
        assert_eq!(resolve_url(&args).unwrap(), "https://example.com/hook");

        let args = parse(&["--id", "42", "--token", "abc_DEF"]);
        assert_eq!(
            resolve_url(&args).unwrap(),
            "https://discord.com/api/webhooks/42/abc_DEF"
        );

        let args = parse(&[]);
        assert!(resolve_url(&args).is_err());

        let args = parse(&["--id", "42", "--token", "a/b"]);
        assert!(resolve_url(&args).is_err());
    }

    #[test]
    fn id_requires_token() {
        let res = Args::try_parse_from(["webhook", "--id", "42"]);
        assert!(res.is_err());
    }

    #[test]
    fn content_only_has_no_embed() {
        let message = build_message(parse(&["x", "--content", "hi"]));
        assert_eq!(message.content(), Some("hi"));
        assert!(message.embeds().is_empty());
    }

    #[test]
    fn embed_from_flags() {
        let message = build_message(parse(&[
            "x", "--title", "T", "--colour", "#ff0000", "-f", "a=1", "-f", "b=2=3", "--inline",
        ]));
        let [embed] = message.embeds() else {
            panic!("expected one embed");
        };
        assert_eq!(embed.title(), Some("T"));
        assert_eq!(embed.color(), Some(0xFF_0000));
        let fields: Vec<_> = embed
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str(), f.inline))
            .collect();
        assert_eq!(fields, [("a", "1", true), ("b", "2=3", true)]);
    }

    #[test]
    fn rejects_field_without_separator() {
        assert!(parse_field("novalue").is_err());
    }
}
