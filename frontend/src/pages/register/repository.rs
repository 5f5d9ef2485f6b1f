use crate::{
    api::{ApiClient, OtpPurpose},
    otp::{FlowError, OtpDispatcher},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    dispatcher: OtpDispatcher,
}

impl RegisterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            dispatcher: OtpDispatcher::new(client),
        }
    }

    pub async fn request_code(&self, email: &str) -> Result<(), FlowError> {
        self.dispatcher
            .request_code(OtpPurpose::Register, email)
            .await
    }
}
