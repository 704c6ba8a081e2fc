pub mod checkout;
pub mod confirmation;
