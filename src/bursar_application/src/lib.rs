pub mod config;
pub mod use_cases;

mod notifications;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::FlowConfig;

// Re-export for convenience
pub use use_cases::{
    complete_verification::{CompleteVerificationError, CompleteVerificationUseCase},
    create_agent::{CreateAgentError, CreateAgentUseCase, NewAgentRequest},
    forgot_password::{ForgotPasswordError, InitiateForgotPasswordUseCase},
    list_agents::{AgentPage, ListAgentsError, ListAgentsUseCase},
    login::{AuthenticatedMerchant, LoginError, LoginUseCase},
    register_merchant::{NewMerchantRequest, RegisterMerchantError, RegisterMerchantUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
    set_agent_active::{SetAgentActiveError, SetAgentActiveUseCase},
    update_agent::{UpdateAgentError, UpdateAgentRequest, UpdateAgentUseCase},
};
