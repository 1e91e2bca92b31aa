#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod exchange;
pub mod membership;
pub mod proposals;
pub mod share_ledger;
pub mod types;

// ============================================================
// Contract
// Members vote proposals to quorum; the proposer of an approved
// proposal pays EGLD into the pool for shares, and any member can
// later rage-quit for a proportional slice of the pool.
// ============================================================

#[multiversx_sc::contract]
pub trait TreasuryGuild:
    membership::MembershipModule
    + share_ledger::ShareLedgerModule
    + proposals::ProposalsModule
    + exchange::ExchangeModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, quorum: u64) {
        self.quorum().set(quorum);
        self.proposal_count().set(0u64);
        self.total_shares().set(BigUint::zero());
        self.total_pooled_value().set(BigUint::zero());

        let deployer = self.blockchain().get_caller();
        self.members().insert(deployer.clone());
        self.member_added_event(&deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getGuildStats)]
    fn get_guild_stats(&self) -> MultiValue5<BigUint, BigUint, u64, u64, u64> {
        let total_shares = self.total_shares().get();
        let total_pooled_value = self.total_pooled_value().get();
        let member_count = self.members().len() as u64;
        let proposal_count = self.proposal_count().get();
        let quorum = self.quorum().get();
        (
            total_shares,
            total_pooled_value,
            member_count,
            proposal_count,
            quorum,
        )
            .into()
    }
}
