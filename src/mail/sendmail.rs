use crate::{Error, Result};
use lettre::{
    message::{header, SinglePart},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use std::env::var;

pub async fn send_email(to: &str, subject: &str, html_body: String) -> Result<()> {
    let smtp_username = var("SMTP_USERNAME").expect("SMTP_USERNAME must be set");
    let smtp_password = var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set");
    let smtp_server = var("SMTP_SERVER").expect("SMTP_SERVER must be set");
    let smtp_port: u16 = var("SMTP_PORT")
        .expect("SMTP_PORT must be set")
        .parse()
        .map_err(|_| Error::InternalServerError)?;

    let email = Message::builder()
        .from(smtp_username.parse().map_err(|_| Error::InternalServerError)?)
        .to(to.parse().map_err(|_| Error::InternalServerError)?)
        .subject(subject)
        .header(header::ContentType::TEXT_HTML)
        .singlepart(
            SinglePart::builder()
                .header(header::ContentType::TEXT_HTML)
                .body(html_body),
        )
        .map_err(|_| Error::InternalServerError)?;

    let creds = Credentials::new(smtp_username.clone(), smtp_password.clone());
    let mailer = SmtpTransport::starttls_relay(&smtp_server)
        .map_err(|_| Error::InternalServerError)?
        .credentials(creds)
        .port(smtp_port)
        .build();

    mailer.send(&email).map_err(|err| {
        tracing::error!("Failed to send email: {:?}", err);
        Error::InternalServerError
    })?;

    Ok(())
}
