//! `SeaORM` entity definitions.

pub mod companies;
