#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const ORACLE_ADDRESS_1: TestAddress = TestAddress::new("oracle1");
pub const ORACLE_ADDRESS_2: TestAddress = TestAddress::new("oracle2");
pub const ORACLE_ADDRESS_3: TestAddress = TestAddress::new("oracle3");
pub const ORACLE_ADDRESS_4: TestAddress = TestAddress::new("oracle4");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const ORACLE_LEDGER_ADDRESS: TestSCAddress = TestSCAddress::new("oracle-ledger");
pub const ORACLE_LEDGER_PATH: MxscPath = MxscPath::new("output/oracle-ledger.mxsc.json");

pub const EGLD_TICKER: &[u8] = b"EGLD";
pub const DOLLAR_TICKER: &[u8] = b"USD";
pub const BTC_TICKER: &[u8] = b"BTC";

pub const EGLD_DECIMALS: u8 = 18;

/// Deploy-time block timestamp; late enough that the first daily rollup
/// cooldown window has already elapsed.
pub const GENESIS_TIMESTAMP: u64 = 1_000_000_000;
