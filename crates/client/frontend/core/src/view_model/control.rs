//! The single control shown on the mint screen.

/// User intent triggered by activating a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    ConnectWallet,
    StartPresale,
    PresaleMint,
    PublicMint,
}

/// Mutually exclusive screen states, each rendering exactly one control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    ConnectWallet,
    Loading,
    StartPresale,
    PresaleNotStarted,
    PresaleMint,
    PublicMint,
}

impl Control {
    /// Pick the control for the given flags. The first matching rule wins:
    /// not connected, loading, owner before presale, presale not started,
    /// presale running, presale ended.
    pub fn resolve(
        connected: bool,
        loading: bool,
        is_owner: bool,
        presale_started: bool,
        presale_ended: bool,
    ) -> Self {
        if !connected {
            Control::ConnectWallet
        } else if loading {
            Control::Loading
        } else if is_owner && !presale_started {
            Control::StartPresale
        } else if !presale_started {
            Control::PresaleNotStarted
        } else if !presale_ended {
            Control::PresaleMint
        } else {
            Control::PublicMint
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::ConnectWallet => "Connect your wallet",
            Control::Loading => "Loading...",
            Control::StartPresale => "Start Presale!",
            Control::PresaleNotStarted => "Presale hasnt started!",
            Control::PresaleMint => "Presale Mint 🚀",
            Control::PublicMint => "Public Mint 🚀",
        }
    }

    /// Text rendered above the control, if any.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Control::PresaleMint => Some(
                "Presale has started!!! If your address is whitelisted, Mint a Crypto Dev 🥳",
            ),
            _ => None,
        }
    }

    /// Action fired on activation; `None` for informational states.
    pub fn action(&self) -> Option<UserAction> {
        match self {
            Control::ConnectWallet => Some(UserAction::ConnectWallet),
            Control::StartPresale => Some(UserAction::StartPresale),
            Control::PresaleMint => Some(UserAction::PresaleMint),
            Control::PublicMint => Some(UserAction::PublicMint),
            Control::Loading | Control::PresaleNotStarted => None,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.action().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference table, rule by rule.
    fn expected(connected: bool, loading: bool, owner: bool, started: bool, ended: bool) -> Control {
        match (connected, loading, owner, started, ended) {
            (false, _, _, _, _) => Control::ConnectWallet,
            (true, true, _, _, _) => Control::Loading,
            (true, false, true, false, _) => Control::StartPresale,
            (true, false, false, false, _) => Control::PresaleNotStarted,
            (true, false, _, true, false) => Control::PresaleMint,
            (true, false, _, true, true) => Control::PublicMint,
        }
    }

    #[test]
    fn every_flag_combination_yields_one_control() {
        for bits in 0u8..32 {
            let flag = |n: u8| bits & (1 << n) != 0;
            let (connected, loading, owner, started, ended) =
                (flag(0), flag(1), flag(2), flag(3), flag(4));

            assert_eq!(
                Control::resolve(connected, loading, owner, started, ended),
                expected(connected, loading, owner, started, ended),
                "connected={connected} loading={loading} owner={owner} started={started} ended={ended}"
            );
        }
    }

    #[test]
    fn owner_sees_mint_controls_once_presale_started() {
        assert_eq!(
            Control::resolve(true, false, true, true, false),
            Control::PresaleMint
        );
        assert_eq!(
            Control::resolve(true, false, true, true, true),
            Control::PublicMint
        );
    }

    #[test]
    fn informational_states_have_no_action() {
        assert_eq!(Control::Loading.action(), None);
        assert_eq!(Control::PresaleNotStarted.action(), None);
        assert_eq!(
            Control::PresaleMint.action(),
            Some(UserAction::PresaleMint)
        );
        assert!(Control::PresaleMint.description().is_some());
        assert!(Control::PublicMint.description().is_none());
    }
}
