//! Data models for Shelfmark

pub mod book;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, BookStatus};
pub use loan::{Loan, LoanDetails};
