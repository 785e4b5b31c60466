use cosmwasm_std::{Deps, DepsMut, Env, MessageInfo};

pub struct Context<'a> {
    pub deps: DepsMut<'a>,
    pub env: Env,
    pub info: MessageInfo,
}

impl<'a> Context<'a> {
    pub fn from(deps: DepsMut<'a>, env: Env, info: MessageInfo) -> Context<'a> {
        Context { deps, env, info }
    }
}

pub struct QueryContext<'a> {
    pub deps: Deps<'a>,
    pub env: Env,
}

impl<'a> QueryContext<'a> {
    pub fn from(deps: Deps<'a>, env: Env) -> QueryContext<'a> {
        QueryContext { deps, env }
    }
}

pub mod testing {
    use cosmwasm_std::{
        Addr, BlockInfo, Coin, ContractInfo, Deps, Env, MessageInfo, Timestamp, TransactionInfo,
    };

    use crate::cw::QueryContext;

    pub const MOCK_CONTRACT_ADDR: &str = "cosmos2contract";

    /// Returns a mocked QueryContext DI wrapper.
    pub fn mock_query_ctx<'a>(deps: Deps<'a>, env: &'a Env) -> QueryContext<'a> {
        QueryContext {
            deps,
            env: env.clone(),
        }
    }

    /// Returns a default environment with height, time, chain_id, and contract address.
    /// Modify height/time if you want to test phase gating.
    ///
    /// This is intended for use in test code only.
    pub fn mock_env() -> Env {
        Env {
            block: BlockInfo {
                height: 12_345,
                time: Timestamp::from_nanos(1_571_797_419_879_305_533),
                chain_id: "cosmos-testnet-14002".to_string(),
            },
            transaction: Some(TransactionInfo { index: 3 }),
            contract: ContractInfo {
                address: Addr::unchecked(MOCK_CONTRACT_ADDR),
            },
        }
    }

    /// Just set sender and funds for the message.
    /// This is intended for use in test code only.
    pub fn mock_info(sender: &str, funds: &[Coin]) -> MessageInfo {
        MessageInfo {
            sender: Addr::unchecked(sender),
            funds: funds.to_vec(),
        }
    }
}
