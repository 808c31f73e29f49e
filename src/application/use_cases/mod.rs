/// Use cases module containing application business logic orchestration
mod analyze_conflicts;

pub use analyze_conflicts::AnalyzeConflictsUseCase;
