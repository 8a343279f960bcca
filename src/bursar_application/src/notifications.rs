//! Mail envelopes dispatched by the account flows. Dispatch is best effort:
//! a failed send (or a failed token issuance on a courtesy-resend path) is
//! logged and swallowed, never surfaced as failure of the primary operation.

use serde_json::json;

use bursar_core::{
    Email, MailTemplate, Mailer, Merchant, SafeAgent, TokenIssuer, TokenPurpose,
};

pub(crate) const MERCHANT_VERIFICATION_SUBJECT: &str = "Verify your account";
pub(crate) const AGENT_VERIFICATION_SUBJECT: &str = "Activate your agent account";
pub(crate) const PASSWORD_RECOVERY_SUBJECT: &str = "Reset your password";

pub(crate) fn onboarding_link(frontend_base_url: &str, token: &str) -> String {
    format!("{frontend_base_url}/onboarding/verify?token={token}")
}

pub(crate) fn recovery_link(frontend_base_url: &str, token: &str) -> String {
    format!("{frontend_base_url}/reset-password?token={token}")
}

async fn send_best_effort<E: Mailer>(
    mailer: &E,
    recipient: &Email,
    template: MailTemplate,
    subject: &str,
    context: serde_json::Value,
) {
    if let Err(error) = mailer.send(recipient, template, subject, context).await {
        tracing::warn!(%error, %template, "failed to dispatch email");
    }
}

/// Issue a fresh onboarding token for the merchant and mail the verification
/// link. Used both on first registration and as the courtesy resend when an
/// unverified account shows up again.
pub(crate) async fn dispatch_merchant_verification<T, E>(
    token_issuer: &T,
    mailer: &E,
    frontend_base_url: &str,
    merchant: &Merchant,
) where
    T: TokenIssuer,
    E: Mailer,
{
    let token = match token_issuer.issue(merchant.id.as_uuid(), TokenPurpose::Onboarding) {
        Ok(token) => token,
        Err(error) => {
            tracing::warn!(%error, "failed to issue onboarding token for verification email");
            return;
        }
    };

    let context = json!({
        "businessName": merchant.business_name,
        "verificationLink": onboarding_link(frontend_base_url, &token),
    });

    send_best_effort(
        mailer,
        &merchant.email,
        MailTemplate::MerchantAccountVerification,
        MERCHANT_VERIFICATION_SUBJECT,
        context,
    )
    .await;
}

pub(crate) async fn dispatch_agent_verification<T, E>(
    token_issuer: &T,
    mailer: &E,
    frontend_base_url: &str,
    recipient: &Email,
    agent: &SafeAgent,
) where
    T: TokenIssuer,
    E: Mailer,
{
    let token = match token_issuer.issue(agent.id.as_uuid(), TokenPurpose::Onboarding) {
        Ok(token) => token,
        Err(error) => {
            tracing::warn!(%error, "failed to issue onboarding token for agent verification email");
            return;
        }
    };

    let context = json!({
        "name": agent.name,
        "verificationLink": onboarding_link(frontend_base_url, &token),
    });

    send_best_effort(
        mailer,
        recipient,
        MailTemplate::AgentAccountVerification,
        AGENT_VERIFICATION_SUBJECT,
        context,
    )
    .await;
}

/// Mail the password-recovery link. The token is issued by the caller, since
/// failing to issue it fails the whole forgot-password operation.
pub(crate) async fn dispatch_password_recovery<E>(
    mailer: &E,
    frontend_base_url: &str,
    merchant: &Merchant,
    token: &str,
) where
    E: Mailer,
{
    let context = json!({
        "businessName": merchant.business_name,
        "recoveryLink": recovery_link(frontend_base_url, token),
    });

    send_best_effort(
        mailer,
        &merchant.email,
        MailTemplate::PasswordRecovery,
        PASSWORD_RECOVERY_SUBJECT,
        context,
    )
    .await;
}
