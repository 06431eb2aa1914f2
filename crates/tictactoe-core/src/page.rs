//! Route guard and wallet gate for the game details page.

use alloy_primitives::Address;

use crate::address::parse_address;

/// What the page should render before any game data is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// The route parameter is missing or not an address; nothing is fetched.
    NotFound,
    /// Valid game, but no wallet account is active.
    ConnectWallet { game_address: Address },
    /// Account known, chain id not reported yet.
    AwaitingNetwork { game_address: Address },
    Ready {
        game_address: Address,
        account: Address,
        chain_id: u64,
    },
}

impl PageState {
    pub fn resolve(
        route_param: Option<&str>,
        account: Option<Address>,
        chain_id: Option<u64>,
    ) -> Self {
        let Some(game_address) = route_param.and_then(|p| parse_address(p).ok()) else {
            return PageState::NotFound;
        };
        match (account, chain_id) {
            (None, _) => PageState::ConnectWallet { game_address },
            (Some(_), None) => PageState::AwaitingNetwork { game_address },
            (Some(account), Some(chain_id)) => PageState::Ready {
                game_address,
                account,
                chain_id,
            },
        }
    }

    /// `true` when the page is allowed to issue network requests.
    pub fn should_fetch(&self) -> bool {
        matches!(self, PageState::Ready { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME: &str = "0x1111111111111111111111111111111111111111";

    #[test]
    fn invalid_param_is_not_found() {
        let account = Some(Address::repeat_byte(0x22));
        for param in [None, Some(""), Some("0x123"), Some("hello")] {
            let state = PageState::resolve(param, account, Some(1));
            assert_eq!(state, PageState::NotFound);
            assert!(!state.should_fetch());
        }
    }

    #[test]
    fn no_account_asks_for_wallet() {
        let state = PageState::resolve(Some(GAME), None, Some(1));
        assert!(matches!(state, PageState::ConnectWallet { .. }));
        assert!(!state.should_fetch());
    }

    #[test]
    fn ready_with_account_and_chain() {
        let account = Address::repeat_byte(0x22);
        assert!(matches!(
            PageState::resolve(Some(GAME), Some(account), None),
            PageState::AwaitingNetwork { .. }
        ));
        let state = PageState::resolve(Some(GAME), Some(account), Some(5));
        assert_eq!(
            state,
            PageState::Ready {
                game_address: Address::repeat_byte(0x11),
                account,
                chain_id: 5,
            }
        );
        assert!(state.should_fetch());
    }
}
