multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — an offer to pay EGLD into the pool for shares
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    /// EGLD the proposer must attach when exchanging
    pub requested_value: BigUint<M>,
    /// Shares minted to the proposer on exchange
    pub share_amount: BigUint<M>,
    pub vote_count: u64,
    /// Set once vote_count reaches quorum. Never reset.
    pub approved: bool,
}
