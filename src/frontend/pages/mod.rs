pub mod checkout;
pub mod dashboard;
pub mod home;
