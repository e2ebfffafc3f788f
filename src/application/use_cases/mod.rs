/// Use cases module containing application business logic orchestration
mod list_prerequisites;

pub use list_prerequisites::ListPrerequisitesUseCase;
