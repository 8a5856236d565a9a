use std::collections::HashSet;

use anyhow::{Result, bail};

pub fn webhook_token(token: &str) -> Result<()> {
    const CHARS: &[u8; 65] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";
    validate_charset("Webhook Token", token, CHARS)
}

pub fn webhook_id(id: u64) -> Result<()> {
    // Snowflakes are never zero.
    if id == 0 {
        bail!("Webhook ID must not be zero");
    }
    Ok(())
}

fn validate_charset(description: &'static str, string: &str, charset: &'static [u8]) -> Result<()> {
    if string.is_empty() {
        bail!("{description} is empty");
    }
    if string.bytes().all(|b| charset.contains(&b)) {
        return Ok(());
    }

    let set = string
        .bytes()
        .filter(|b| !charset.contains(b))
        .map(char::from)
        .collect::<HashSet<char>>();
    bail!("{description} contains invalid characters: {set:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_token_charset() {
        assert!(webhook_token("AbC-123_x.y").is_ok());
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(webhook_token("").is_err());
        let err = webhook_token("abc/def").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
    }

    #[test]
    fn rejects_zero_id() {
        assert!(webhook_id(0).is_err());
        assert!(webhook_id(1_234_567_890).is_ok());
    }
}
