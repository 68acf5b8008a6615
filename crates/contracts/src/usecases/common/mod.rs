//! Общие типы и трейты для всех UseCase

pub mod usecase_metadata;

// Реэкспорты
pub use usecase_metadata::UseCaseMetadata;
