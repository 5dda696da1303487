/// Logging port used by the catalog use cases.
///
/// Keeps the core free of any concrete logging backend; the infrastructure
/// layer provides the implementation.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
