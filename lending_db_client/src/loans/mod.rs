pub mod create_loan;
pub mod get_loans;
pub mod return_loan;
