/*
[INPUT]:  Authorisation requests (raw card, CSE-encrypted card, 3-D Secure result)
[OUTPUT]: Authorisation results
[POS]:    HTTP layer - payment endpoints (basic auth)
[UPDATE]: When adding new payment endpoints or changing request filling
*/

use crate::http::{AdyenClient, Result};
use crate::types::{
    Authorise3dRequest, AuthoriseEncryptedRequest, AuthoriseRequest, AuthoriseResponse,
};

const AUTHORISE: &str = "authorise";
const AUTHORISE_3D: &str = "authorise3d";

/// Payment operations, obtained from [`AdyenClient::payment`]
#[derive(Debug, Clone, Copy)]
pub struct PaymentGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> PaymentGateway<'a> {
    pub fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    /// Authorise a payment
    ///
    /// POST /authorise
    pub async fn authorise(&self, mut req: AuthoriseRequest) -> Result<AuthoriseResponse> {
        self.client.fill_merchant_account(&mut req.merchant_account);
        self.client.execute_json(AUTHORISE, &req).await
    }

    /// Authorise a payment with card data encrypted by the CSE script
    ///
    /// POST /authorise
    pub async fn authorise_encrypted(
        &self,
        req: AuthoriseEncryptedRequest,
    ) -> Result<AuthoriseResponse> {
        self.authorise(req.into()).await
    }

    /// Complete a 3-D Secure authorisation
    ///
    /// POST /authorise3d
    pub async fn authorise_3d(&self, mut req: Authorise3dRequest) -> Result<AuthoriseResponse> {
        self.client.fill_merchant_account(&mut req.merchant_account);
        self.client.execute_json(AUTHORISE_3D, &req).await
    }
}
