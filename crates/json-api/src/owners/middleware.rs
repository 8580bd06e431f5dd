//! Owner middleware.

use salvo::prelude::*;
use uuid::Uuid;

use reelcart_app::domain::owners::OwnerUuid;

use crate::extensions::*;

pub(crate) const OWNER_HEADER: &str = "x-owner-uuid";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(owner) = extract_owner(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid x-owner-uuid header"));
        ctrl.skip_rest();

        return;
    };

    depot.insert_owner_uuid(owner);

    ctrl.call_next(req, depot, res).await;
}

fn extract_owner(req: &Request) -> Option<OwnerUuid> {
    let value = req.headers().get(OWNER_HEADER)?.to_str().ok()?.trim();

    Uuid::parse_str(value).ok().map(OwnerUuid::from_uuid)
}
