//! Auth slice reducer.

use devlink_types::AuthState;

/// The account no longer exists: drop the session.
pub(super) fn account_deleted(auth: &mut AuthState) {
    auth.token = None;
    auth.is_authenticated = false;
    auth.loading = false;
}
