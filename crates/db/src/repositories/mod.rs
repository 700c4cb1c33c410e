//! Repository implementations for data access.

pub mod company;

pub use company::CompanyRepository;
