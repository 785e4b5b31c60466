use cosmwasm_schema::cw_serde;

/// Administrative surface of the successor token, beyond the standard CW20
/// interface. The controller's own address must be exempted through all four
/// gates before phase one can move successor tokens without being throttled
/// by the token's anti-bot limits. The flag logic itself lives in the token
/// contract; the controller only invokes it with the authority it is granted.
#[cw_serde]
pub enum SuccessorTokenExecuteMsg {
    ExcludeFromFees { account: String, exclude: bool },
    ExcludeFromMaxTransactionLimit { account: String, exclude: bool },
    ExcludeFromMaxWallet { account: String, exclude: bool },
    ExcludeFromPause { account: String, exclude: bool },
}
