/*
[INPUT]:  Modification requests referencing an earlier authorisation
[OUTPUT]: Modification acknowledgements
[POS]:    HTTP layer - modification endpoints (basic auth)
[UPDATE]: When adding new modification endpoints
*/

use crate::http::{AdyenClient, Result};
use crate::types::{
    CancelOrRefundRequest, CancelRequest, CaptureRequest, ModificationResponse, RefundRequest,
};

const CAPTURE: &str = "capture";
const CANCEL: &str = "cancel";
const REFUND: &str = "refund";
const CANCEL_OR_REFUND: &str = "cancelOrRefund";

/// Modification operations, obtained from [`AdyenClient::modification`]
#[derive(Debug, Clone, Copy)]
pub struct ModificationGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> ModificationGateway<'a> {
    pub fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    /// POST /capture
    pub async fn capture(&self, mut req: CaptureRequest) -> Result<ModificationResponse> {
        self.client.fill_merchant_account(&mut req.merchant_account);
        self.client.execute_json(CAPTURE, &req).await
    }

    /// POST /cancel
    pub async fn cancel(&self, mut req: CancelRequest) -> Result<ModificationResponse> {
        self.client.fill_merchant_account(&mut req.merchant_account);
        self.client.execute_json(CANCEL, &req).await
    }

    /// POST /refund
    pub async fn refund(&self, mut req: RefundRequest) -> Result<ModificationResponse> {
        self.client.fill_merchant_account(&mut req.merchant_account);
        self.client.execute_json(REFUND, &req).await
    }

    /// POST /cancelOrRefund
    pub async fn cancel_or_refund(
        &self,
        mut req: CancelOrRefundRequest,
    ) -> Result<ModificationResponse> {
        self.client.fill_merchant_account(&mut req.merchant_account);
        self.client.execute_json(CANCEL_OR_REFUND, &req).await
    }
}
