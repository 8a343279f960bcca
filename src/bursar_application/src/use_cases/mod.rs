pub mod complete_verification;
pub mod create_agent;
pub mod forgot_password;
pub mod list_agents;
pub mod login;
pub mod register_merchant;
pub mod reset_password;
pub mod set_agent_active;
pub mod update_agent;

// Re-export for convenience
pub use complete_verification::{CompleteVerificationError, CompleteVerificationUseCase};
pub use create_agent::{CreateAgentError, CreateAgentUseCase, NewAgentRequest};
pub use forgot_password::{ForgotPasswordError, InitiateForgotPasswordUseCase};
pub use list_agents::{AgentPage, ListAgentsError, ListAgentsUseCase};
pub use login::{AuthenticatedMerchant, LoginError, LoginUseCase};
pub use register_merchant::{NewMerchantRequest, RegisterMerchantError, RegisterMerchantUseCase};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
pub use set_agent_active::{SetAgentActiveError, SetAgentActiveUseCase};
pub use update_agent::{UpdateAgentError, UpdateAgentRequest, UpdateAgentUseCase};
