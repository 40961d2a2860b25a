/// Errors that can occur when evaluating a circle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The model has no points, so the mean radius is undefined.
    #[error("empty point set")]
    EmptyPointSet,
}
