use crate::{
    api::{ApiClient, OtpPurpose},
    otp::{FlowError, OtpDispatcher},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    dispatcher: OtpDispatcher,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            dispatcher: OtpDispatcher::new(client),
        }
    }

    pub async fn request_reset_code(&self, email: &str) -> Result<(), FlowError> {
        self.dispatcher
            .request_code(OtpPurpose::ResetPassword, email)
            .await
    }
}
