use async_trait::async_trait;
use kernel::mailer::{MailRecipient, Mailer, ReservationConfirmationMail};
use lettre::{
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use shared::{config::SmtpConfig, error::{AppError, AppResult}};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let from = config
            .from
            .parse()
            .map_err(|_| AppError::ExternalServiceError("invalid SMTP from address".into()))?;
        Ok(Self { transport, from })
    }

    async fn send(&self, to: &MailRecipient, subject: &str, body: String) -> AppResult<()> {
        let to: Mailbox = format!("{} <{}>", to.name, to.email)
            .parse()
            .map_err(|_| AppError::ExternalServiceError("invalid recipient address".into()))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body)
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_reservation_confirmation(
        &self,
        to: &MailRecipient,
        mail: &ReservationConfirmationMail,
    ) -> AppResult<()> {
        let body = format!(
            "Hola {},\n\n\
             Tu reservación {} está confirmada.\n\n\
             Experiencia: {}\n\
             Fecha: {}\n\
             Personas: {}\n\
             Total: ${}\n\n\
             ¡Nos vemos en la montaña!\n\
             El equipo de Vertika",
            to.name,
            mail.reservation_id,
            mail.experience_title,
            mail.experience_date.format("%Y-%m-%d %H:%M UTC"),
            mail.seats,
            mail.total,
        );
        self.send(to, "Reservación confirmada", body).await
    }

    async fn send_review_request(
        &self,
        to: &MailRecipient,
        experience_title: &str,
    ) -> AppResult<()> {
        let body = format!(
            "Hola {},\n\n\
             Esperamos que hayas disfrutado \"{}\".\n\
             Cuéntanos cómo te fue dejando una reseña en la app.\n\n\
             El equipo de Vertika",
            to.name, experience_title,
        );
        self.send(to, "¿Cómo estuvo tu experiencia?", body).await
    }

    async fn send_verification_email(&self, to: &MailRecipient, token: &str) -> AppResult<()> {
        let body = format!(
            "Hola {},\n\n\
             Confirma tu correo visitando:\n\
             https://vertika.mx/verify-email?token={}\n\n\
             El equipo de Vertika",
            to.name, token,
        );
        self.send(to, "Confirma tu correo", body).await
    }
}
