pub mod db;
pub mod user;
pub mod expense_type;
pub mod address;
pub mod service_provider;
pub mod expense;

#[cfg(test)]
mod tests;
