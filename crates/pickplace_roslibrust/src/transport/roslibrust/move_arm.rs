use std::marker::PhantomData;

use ::roslibrust::rosbridge::ClientHandle;
use ::roslibrust::RosServiceType;

use crate::action::dtos::move_arm;
use crate::action::{MoveArmClient, MoveArmFuture};

/// Downstream provides the concrete `MoveArm` request message.
pub trait FromMoveArmRequest: Sized + Send + Sync + 'static {
    fn from_request(req: &move_arm::Request) -> Self;
}

/// Downstream provides the concrete `MoveArm` response message.
pub trait MoveArmResponse {
    fn success(&self) -> bool;
}

/// `MoveArmClient` backed by a rosbridge service call.
pub struct RosbridgeMoveArm<S> {
    ros: ClientHandle,
    service: String,
    _srv: PhantomData<fn() -> S>,
}

impl<S> RosbridgeMoveArm<S> {
    pub fn new(ros: ClientHandle, service: impl Into<String>) -> Self {
        Self {
            ros,
            service: service.into(),
            _srv: PhantomData,
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl<S> MoveArmClient for RosbridgeMoveArm<S>
where
    S: RosServiceType,
    S::Request: FromMoveArmRequest,
    S::Response: MoveArmResponse,
{
    type Error = String;

    fn move_arm<'a>(&'a self, req: &'a move_arm::Request) -> MoveArmFuture<'a, Self::Error> {
        Box::pin(async move {
            let msg = S::Request::from_request(req);
            let resp = self
                .ros
                .call_service::<S>(&self.service, msg)
                .await
                .map_err(|e| format!("{} call failed: {e}", self.service))?;
            Ok(move_arm::Response {
                success: resp.success(),
            })
        })
    }
}
