
mod test_admin;
mod test_check_balance;
mod test_vault_ledger;
mod test_whitelist;
