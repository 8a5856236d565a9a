use serde::Serialize;

/// A labelled name/value pair shown inside an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Only sent when set.
    #[serde(skip_serializing_if = "is_false")]
    pub inline: bool,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}
