/// Values the account flows need beyond their ports. Loaded once at process
/// start and passed into use-case constructors; there is no ambient lookup.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Public base URL the verification and recovery links point at.
    pub frontend_base_url: String,
}
