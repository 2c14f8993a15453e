pub mod wallet_testkit;
