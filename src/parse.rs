pub mod intermediate;
