//! Blocking alerts that must be dismissed by the user.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn wrong_network(network_name: &str) -> Self {
        Self::new(
            NoticeKind::Warning,
            format!("Change the network to {network_name}"),
        )
    }

    pub fn minted() -> Self {
        Self::new(NoticeKind::Success, "Crypto Dev NFT is successfully minted!!!")
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Failure, text)
    }
}
