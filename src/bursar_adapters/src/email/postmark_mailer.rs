use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;

use bursar_core::{Email, MailTemplate, Mailer};

/// Postmark-backed mailer using the templated-send endpoint: the template
/// alias is the core's template name and the context becomes the template
/// model.
pub struct PostmarkMailer {
    http_client: Client,
    base_url: String,
    sender: Email,
    authorization_token: Secret<String>,
}

impl PostmarkMailer {
    pub fn new(
        base_url: String,
        sender: Email,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }
}

#[async_trait::async_trait]
impl Mailer for PostmarkMailer {
    #[tracing::instrument(name = "Sending templated email", skip_all, fields(template = %template))]
    async fn send(
        &self,
        recipient: &Email,
        template: MailTemplate,
        subject: &str,
        context: Value,
    ) -> Result<(), String> {
        let base = Url::parse(&self.base_url).map_err(|e| e.to_string())?;
        let url = base.join("/email/withTemplate").map_err(|e| e.to_string())?;

        let request_body = SendWithTemplateRequest {
            from: self.sender.expose(),
            to: recipient.expose(),
            template_alias: template.as_str(),
            template_model: TemplateModel { subject, context },
            message_stream: MESSAGE_STREAM,
        };

        let request = self
            .http_client
            .post(url)
            .header(
                POSTMARK_AUTH_HEADER,
                self.authorization_token.expose_secret(),
            )
            .json(&request_body);

        request
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

const MESSAGE_STREAM: &str = "outbound";
const POSTMARK_AUTH_HEADER: &str = "X-Postmark-Server-Token";

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct SendWithTemplateRequest<'a> {
    from: &'a str,
    to: &'a str,
    template_alias: &'a str,
    template_model: TemplateModel<'a>,
    message_stream: &'a str,
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct TemplateModel<'a> {
    subject: &'a str,
    #[serde(flatten)]
    context: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn email(address: &str) -> Email {
        Email::try_from(Secret::from(address.to_owned())).unwrap()
    }

    fn mailer(base_url: String) -> PostmarkMailer {
        PostmarkMailer::new(
            base_url,
            email("no-reply@example.com"),
            Secret::from("token".to_owned()),
            Client::new(),
        )
    }

    #[tokio::test]
    async fn posts_template_alias_and_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/email/withTemplate"))
            .and(header("X-Postmark-Server-Token", "token"))
            .and(body_partial_json(json!({
                "From": "no-reply@example.com",
                "To": "a@b.com",
                "TemplateAlias": "password-recovery",
                "TemplateModel": {
                    "Subject": "Reset your password",
                    "recoveryLink": "https://app.example.com/reset-password?token=t",
                },
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        mailer(server.uri())
            .send(
                &email("a@b.com"),
                MailTemplate::PasswordRecovery,
                "Reset your password",
                json!({"recoveryLink": "https://app.example.com/reset-password?token=t"}),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = mailer(server.uri())
            .send(
                &email("a@b.com"),
                MailTemplate::MerchantAccountVerification,
                "Verify your account",
                json!({}),
            )
            .await;

        assert!(result.is_err());
    }
}
