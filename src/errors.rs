// ============================================================
// Error messages — every failing endpoint reverts the whole call
// ============================================================

// ── Input validation ──

pub const ERR_INVALID_SHARES_AMOUNT: &str = "Requested value and share amount must be positive";

// ── Authorization / state preconditions ──

pub const ERR_UNAUTHORIZED_ACCESS: &str = "Caller is not a member";
pub const ERR_MEMBER_EXISTS: &str = "Address is already a member";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_ALREADY_VOTED: &str = "Already voted on this proposal";
pub const ERR_PROPOSAL_NOT_APPROVED: &str = "Proposal is not approved for this caller";
pub const ERR_INSUFFICIENT_EGLD: &str = "Payment is below the requested value";
pub const ERR_INSUFFICIENT_SHARES: &str = "No shares to redeem";

// ── External effects ──

pub const ERR_FAILED_TRANSFER: &str = "Payout transfer failed";
