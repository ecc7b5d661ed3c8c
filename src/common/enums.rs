pub mod address_error;
