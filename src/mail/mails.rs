use crate::{models::contact::ContactSubmission, Result};

use super::sendmail::send_email;

pub async fn send_contact_notification(
    support_email: &str,
    submission: &ContactSubmission,
) -> Result<()> {
    let subject = format!("New contact submission from {}", submission.name);
    let company = submission.company.as_deref().unwrap_or("-");

    let html_body = format!(
        r#"<h2>New contact submission</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Company:</strong> {company}</p>
<p><strong>Message:</strong></p>
<p>{message}</p>
<p>Received at {received}</p>"#,
        name = submission.name,
        email = submission.email,
        company = company,
        message = submission.message,
        received = submission.created_at.to_rfc3339(),
    );

    send_email(support_email, &subject, html_body).await
}
