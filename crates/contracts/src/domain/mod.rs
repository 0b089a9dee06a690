pub mod a001_customer;
pub mod a002_salesman;
pub mod a003_item;
pub mod a004_invoice;
pub mod common;
