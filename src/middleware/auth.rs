use crate::{error::AppError, models::VendorAccount, session::SessionState};

/// The vendor logged in on this session, or a rejection asking them to log in.
pub fn require_vendor(session: &SessionState) -> Result<VendorAccount, AppError> {
    session
        .vendor
        .clone()
        .ok_or_else(|| AppError::Unauthorized("Please log in as a vendor first.".into()))
}
