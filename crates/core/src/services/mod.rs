pub mod account_service;
pub mod currency_service;
pub mod interest_service;
pub mod investment_service;
pub mod loan_service;
