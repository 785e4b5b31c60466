use crate::tests::helpers::{
    env_at, instantiate_controller, register_exclusions, stub_instantiate_msg, ADMIN,
    MIGRATION_START, SUCCESSOR_TOKEN,
};
use crate::tests::querier::mock_querier::mock_dependencies;
use common::cw::testing::MOCK_CONTRACT_ADDR;
use cosmwasm_std::{to_json_binary, SubMsg, WasmMsg};
use token_migration_api::error::TokenMigrationError::Unauthorized;
use token_migration_api::error::TokenMigrationResult;
use token_migration_api::token::SuccessorTokenExecuteMsg;

#[test]
fn register_exclusions_emits_all_four_exemptions() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START - 500);

    instantiate_controller(deps.as_mut(), &env, stub_instantiate_msg())?;

    let response = register_exclusions(deps.as_mut(), &env, ADMIN)?;

    let expected_exclusions = vec![
        SuccessorTokenExecuteMsg::ExcludeFromFees {
            account: MOCK_CONTRACT_ADDR.to_string(),
            exclude: true,
        },
        SuccessorTokenExecuteMsg::ExcludeFromMaxTransactionLimit {
            account: MOCK_CONTRACT_ADDR.to_string(),
            exclude: true,
        },
        SuccessorTokenExecuteMsg::ExcludeFromMaxWallet {
            account: MOCK_CONTRACT_ADDR.to_string(),
            exclude: true,
        },
        SuccessorTokenExecuteMsg::ExcludeFromPause {
            account: MOCK_CONTRACT_ADDR.to_string(),
            exclude: true,
        },
    ];

    let expected_messages = expected_exclusions
        .iter()
        .map(|msg| {
            Ok(SubMsg::new(WasmMsg::Execute {
                contract_addr: SUCCESSOR_TOKEN.to_string(),
                msg: to_json_binary(msg)?,
                funds: vec![],
            }))
        })
        .collect::<TokenMigrationResult<Vec<SubMsg>>>()?;

    assert_eq!(response.messages, expected_messages);

    Ok(())
}

#[test]
fn non_admin_cannot_register_exclusions() -> TokenMigrationResult<()> {
    let mut deps = mock_dependencies();
    let env = env_at(MIGRATION_START - 500);

    instantiate_controller(deps.as_mut(), &env, stub_instantiate_msg())?;

    let result = register_exclusions(deps.as_mut(), &env, "random_address");
    assert_eq!(result, Err(Unauthorized));

    Ok(())
}
