multiversx_sc::imports!();

use crate::errors::{
    ERR_FAILED_TRANSFER, ERR_INSUFFICIENT_EGLD, ERR_INSUFFICIENT_SHARES,
    ERR_PROPOSAL_NOT_APPROVED,
};
use crate::{membership, proposals, share_ledger};

#[multiversx_sc::module]
pub trait ExchangeModule:
    membership::MembershipModule + share_ledger::ShareLedgerModule + proposals::ProposalsModule
{
    // ========================================================
    // ENDPOINT: exchangeShares
    // The proposer pays at least the requested value and receives
    // the proposal's shares. Overpayment is credited to the pool.
    // ========================================================

    #[endpoint(exchangeShares)]
    #[payable("EGLD")]
    fn exchange_shares(&self, proposal_id: u64) {
        let caller = self.require_caller_member();
        let payment_amount = self.call_value().egld_value().clone_value();

        let proposal = match self.find_proposal(proposal_id) {
            Some(proposal) => proposal,
            None => sc_panic!(ERR_PROPOSAL_NOT_APPROVED),
        };
        require!(
            proposal.proposer == caller && proposal.approved,
            ERR_PROPOSAL_NOT_APPROVED
        );
        require!(
            payment_amount >= proposal.requested_value,
            ERR_INSUFFICIENT_EGLD
        );

        self.mint_shares(&caller, &proposal.share_amount, &payment_amount);

        self.shares_exchanged_event(
            proposal_id,
            &caller,
            &payment_amount,
            &proposal.share_amount,
        );
    }

    // ========================================================
    // ENDPOINT: rageQuit
    // Burns all of the caller's shares for a proportional slice of
    // the pool. Ledger effects are committed before the payout is
    // sent; a re-entering caller already sees a zero balance.
    // ========================================================

    #[endpoint(rageQuit)]
    fn rage_quit(&self) {
        let caller = self.require_caller_member();
        require!(self.shares(&caller).get() > 0u64, ERR_INSUFFICIENT_SHARES);

        let (burned_shares, payout) = self.burn_all_shares(&caller);

        if payout > 0u64 {
            let sc_balance = self
                .blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
            require!(sc_balance >= payout, ERR_FAILED_TRANSFER);

            self.send().direct_egld(&caller, &payout);
        }

        self.rage_quit_event(&caller, &burned_shares, &payout);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("sharesExchanged")]
    fn shares_exchanged_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] member: &ManagedAddress,
        #[indexed] paid_value: &BigUint,
        shares: &BigUint,
    );

    #[event("rageQuit")]
    fn rage_quit_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] burned_shares: &BigUint,
        payout: &BigUint,
    );
}
