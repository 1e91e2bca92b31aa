multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_VOTED, ERR_INVALID_SHARES_AMOUNT, ERR_PROPOSAL_NOT_FOUND};
use crate::membership;
use crate::types::Proposal;

#[multiversx_sc::module]
pub trait ProposalsModule: membership::MembershipModule {
    // ========================================================
    // ENDPOINT: propose
    // Open to any caller, members or not.
    // ========================================================

    #[endpoint(propose)]
    fn propose(&self, requested_value: BigUint, share_amount: BigUint) -> u64 {
        require!(
            requested_value > 0u64 && share_amount > 0u64,
            ERR_INVALID_SHARES_AMOUNT
        );

        let caller = self.blockchain().get_caller();
        let proposal_id = self.proposal_count().get() + 1u64;

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            requested_value,
            share_amount,
            vote_count: 0u64,
            approved: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.requested_value,
            &proposal.share_amount,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per member per proposal. Approval flips once, when
    // the count first reaches quorum, and is never reverted.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.require_caller_member();

        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        let mut proposal = proposal_mapper.get();
        proposal.vote_count += 1;
        self.has_voted(proposal_id, &caller).set(true);

        self.vote_event(proposal_id, &caller, proposal.vote_count);

        if !proposal.approved && proposal.vote_count >= self.quorum().get() {
            proposal.approved = true;
            self.proposal_approved_event(proposal_id, proposal.vote_count);
        }

        proposal_mapper.set(&proposal);
    }

    fn find_proposal(&self, proposal_id: u64) -> Option<Proposal<Self::Api>> {
        let proposal_mapper = self.proposals(proposal_id);
        if proposal_mapper.is_empty() {
            return None;
        }
        Some(proposal_mapper.get())
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> OptionalValue<Proposal<Self::Api>> {
        match self.find_proposal(proposal_id) {
            Some(proposal) => OptionalValue::Some(proposal),
            None => OptionalValue::None,
        }
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if let Some(proposal) = self.find_proposal(id) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(hasVoted)]
    fn has_member_voted(&self, proposal_id: u64, member: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, member).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] requested_value: &BigUint,
        share_amount: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        vote_count: u64,
    );

    #[event("proposalApproved")]
    fn proposal_approved_event(&self, #[indexed] proposal_id: u64, vote_count: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getQuorum)]
    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<u64>;

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
