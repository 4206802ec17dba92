//! Global actions - not tied to any store slice

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
}
