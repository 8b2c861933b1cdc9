pub mod account;
pub mod site;
